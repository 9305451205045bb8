use crate::bundle::Bundle;
use crate::error::BundleError;

/// Wire encodings for crossing the host/plugin process boundary. Decoding
/// restores shape only; callers still run `is_bundle_valid` on the result.
impl Bundle {
    pub fn to_msgpack(&self) -> Result<Vec<u8>, BundleError> {
        rmp_serde::to_vec(self).map_err(|e| BundleError::Malformed(e.to_string()))
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, BundleError> {
        rmp_serde::from_slice(bytes).map_err(|e| BundleError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BundleError> {
        serde_json::to_string(self).map_err(|e| BundleError::Malformed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, BundleError> {
        serde_json::from_str(text).map_err(|e| BundleError::Malformed(e.to_string()))
    }
}
