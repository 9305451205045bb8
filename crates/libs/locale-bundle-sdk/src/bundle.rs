use crate::host::HostContext;
use crate::schema::{self, BUNDLE_EXTRA_INT_VERSION_CODE, BUNDLE_EXTRA_STRING_MESSAGE};
use rmpv::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat key/value payload exchanged between the host application and the
/// plugin. Immutable once handed to the host; received instances are
/// untrusted until `is_bundle_valid` accepts them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: BTreeMap<String, Value>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::from(value.into()));
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.entries.insert(key.into(), Value::from(value));
    }

    /// Inserts an arbitrary value, including `Value::Nil` for the host-side
    /// equivalent of storing a null.
    pub fn put_value(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.entries.get(key).and_then(Value::as_i64).and_then(|v| i32::try_from(v).ok())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the bundle the plugin hands back to the host after configuration.
/// Always valid by construction; the message is trusted caller input.
pub fn generate_bundle(host: &dyn HostContext, message: &str) -> Bundle {
    let mut bundle = Bundle::new();
    bundle.put_string(BUNDLE_EXTRA_STRING_MESSAGE, message);
    bundle.put_int(BUNDLE_EXTRA_INT_VERSION_CODE, host.version_code());
    bundle
}

/// Total boolean verdict over an untrusted, possibly absent bundle.
///
/// Never panics and never raises; every anomaly (absent bundle, wrong key
/// count, missing key, wrong type, empty message) yields `false`. The
/// rejection reason is logged at debug level only.
pub fn is_bundle_valid(bundle: Option<&Bundle>) -> bool {
    let Some(bundle) = bundle else {
        return false;
    };

    match schema::validate_bundle(bundle) {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("bundle rejected: {reason}");
            false
        }
    }
}
