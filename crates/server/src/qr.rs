use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use uuid::Uuid;

/// Build the scannable payload stored as a property's opaque `qr_code`
/// reference. Image rendering is owned by the presentation layer; the
/// register only keeps the payload string.
pub fn build_qr_payload(property_id: Uuid, case_number: &str, property_tag: &str) -> String {
    let payload = serde_json::json!({
        "v": 1,
        "property_id": property_id.to_string(),
        "case_number": case_number,
        "property_tag": property_tag,
    });
    BASE64.encode(payload.to_string())
}

/// Decode a QR payload back into its JSON form. Used by scan lookups.
pub fn decode_qr_payload(encoded: &str) -> Option<serde_json::Value> {
    let bytes = BASE64.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}
