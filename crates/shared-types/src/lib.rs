pub mod config;
pub mod error;
pub mod models;

// Malkhana domain modules (canonical locations for all custody domain types)
pub mod case;
pub mod custody;
pub mod disposal;
pub mod property;

pub use config::*;
pub use error::*;
pub use models::*;

// Re-export all domain types
pub use case::*;
pub use custody::*;
pub use disposal::*;
pub use property::*;
