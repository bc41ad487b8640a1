use serde::{Deserialize, Serialize};

/// Feature flags loaded from `config.toml`. Missing flags default to off.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Generate and store a QR payload for each property at creation.
    #[serde(default)]
    pub qr_tagging: bool,
    /// Expose the admin aggregate overview endpoint.
    #[serde(default)]
    pub admin_overview: bool,
    /// Emit structured request traces.
    #[serde(default)]
    pub telemetry: bool,
}

/// Top-level application config file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
