pub mod bundle;
pub mod error;
pub mod host;
pub mod schema;
pub mod wire;

pub use bundle::{generate_bundle, is_bundle_valid, Bundle};
pub use error::BundleError;
pub use host::{FixedVersionContext, HostContext};
pub use schema::{
    validate_bundle, FieldSpec, ValueKind, BUNDLE_EXTRA_INT_VERSION_CODE,
    BUNDLE_EXTRA_STRING_MESSAGE, BUNDLE_SCHEMA,
};

pub const CONTRACT_RELEASE: &str = "v1";
