use crate::schema::ValueKind;
use thiserror::Error;

/// Rejection reason for a bundle that failed schema validation or decoding.
///
/// `is_bundle_valid` collapses every variant to `false`; the variants exist
/// so tests and debug logs can name the exact failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("bundle holds {actual} keys, the schema expects exactly {expected}")]
    KeyCount { expected: usize, actual: usize },

    #[error("required key {key} is missing")]
    MissingKey { key: &'static str },

    #[error("key {key} does not hold a {expected} value")]
    WrongType { key: &'static str, expected: ValueKind },

    #[error("key {key} must not be empty")]
    EmptyValue { key: &'static str },

    #[error("malformed bundle encoding: {0}")]
    Malformed(String),
}
