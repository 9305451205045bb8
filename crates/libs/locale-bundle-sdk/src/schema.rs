use crate::bundle::Bundle;
use crate::error::BundleError;
use std::fmt;

pub const BUNDLE_EXTRA_STRING_MESSAGE: &str = "com.localekit.plugin.extra.STRING_MESSAGE";
pub const BUNDLE_EXTRA_INT_VERSION_CODE: &str = "com.localekit.plugin.extra.INT_VERSION_CODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    I32,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Str => f.write_str("string"),
            ValueKind::I32 => f.write_str("32-bit integer"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: ValueKind,
    pub require_non_empty: bool,
}

/// The bundle schema shared by the generator and the validator.
///
/// The key strings are part of the public contract with already-configured
/// hosts; renaming them breaks saved configurations.
pub const BUNDLE_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        key: BUNDLE_EXTRA_STRING_MESSAGE,
        kind: ValueKind::Str,
        require_non_empty: true,
    },
    FieldSpec {
        key: BUNDLE_EXTRA_INT_VERSION_CODE,
        kind: ValueKind::I32,
        require_non_empty: false,
    },
];

/// Closed-schema check: the bundle must hold exactly the schema's keys, each
/// with the declared value kind. A nil where a string is expected, or an
/// integer outside `i32` range, counts as a wrong type.
pub fn validate_bundle(bundle: &Bundle) -> Result<(), BundleError> {
    if bundle.len() != BUNDLE_SCHEMA.len() {
        return Err(BundleError::KeyCount {
            expected: BUNDLE_SCHEMA.len(),
            actual: bundle.len(),
        });
    }

    for field in BUNDLE_SCHEMA {
        let value = bundle.get(field.key).ok_or(BundleError::MissingKey { key: field.key })?;

        match field.kind {
            ValueKind::Str => {
                let text = value.as_str().ok_or(BundleError::WrongType {
                    key: field.key,
                    expected: field.kind,
                })?;
                if field.require_non_empty && text.is_empty() {
                    return Err(BundleError::EmptyValue { key: field.key });
                }
            }
            ValueKind::I32 => {
                let fits_i32 = value.as_i64().is_some_and(|v| i32::try_from(v).is_ok());
                if !fits_i32 {
                    return Err(BundleError::WrongType {
                        key: field.key,
                        expected: field.kind,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmpv::Value;

    fn correct_bundle() -> Bundle {
        let mut bundle = Bundle::new();
        bundle.put_string(BUNDLE_EXTRA_STRING_MESSAGE, "I am a toast message!");
        bundle.put_int(BUNDLE_EXTRA_INT_VERSION_CODE, 1);
        bundle
    }

    #[test]
    fn correct_bundle_passes() {
        assert_eq!(Ok(()), validate_bundle(&correct_bundle()));
    }

    #[test]
    fn key_count_is_checked_before_field_kinds() {
        let mut bundle = correct_bundle();
        bundle.put_string("test", "test");

        assert_eq!(
            Err(BundleError::KeyCount { expected: 2, actual: 3 }),
            validate_bundle(&bundle)
        );
    }

    #[test]
    fn missing_key_is_named() {
        let mut bundle = Bundle::new();
        bundle.put_string(BUNDLE_EXTRA_STRING_MESSAGE, "I am a toast message!");
        bundle.put_string("test", "test");

        assert_eq!(
            Err(BundleError::MissingKey { key: BUNDLE_EXTRA_INT_VERSION_CODE }),
            validate_bundle(&bundle)
        );
    }

    #[test]
    fn nil_message_is_a_type_mismatch() {
        let mut bundle = correct_bundle();
        bundle.put_value(BUNDLE_EXTRA_STRING_MESSAGE, Value::Nil);

        assert_eq!(
            Err(BundleError::WrongType {
                key: BUNDLE_EXTRA_STRING_MESSAGE,
                expected: ValueKind::Str,
            }),
            validate_bundle(&bundle)
        );
    }

    #[test]
    fn empty_message_is_rejected_as_empty_not_wrong_type() {
        let mut bundle = correct_bundle();
        bundle.put_string(BUNDLE_EXTRA_STRING_MESSAGE, "");

        assert_eq!(
            Err(BundleError::EmptyValue { key: BUNDLE_EXTRA_STRING_MESSAGE }),
            validate_bundle(&bundle)
        );
    }

    #[test]
    fn version_code_outside_i32_range_is_a_type_mismatch() {
        let mut bundle = correct_bundle();
        bundle.put_value(BUNDLE_EXTRA_INT_VERSION_CODE, Value::from(i64::from(i32::MAX) + 1));

        assert_eq!(
            Err(BundleError::WrongType {
                key: BUNDLE_EXTRA_INT_VERSION_CODE,
                expected: ValueKind::I32,
            }),
            validate_bundle(&bundle)
        );
    }

    #[test]
    fn boolean_and_float_do_not_pass_as_version_code() {
        for value in [Value::Boolean(true), Value::F64(1.0)] {
            let mut bundle = correct_bundle();
            bundle.put_value(BUNDLE_EXTRA_INT_VERSION_CODE, value);

            assert_eq!(
                Err(BundleError::WrongType {
                    key: BUNDLE_EXTRA_INT_VERSION_CODE,
                    expected: ValueKind::I32,
                }),
                validate_bundle(&bundle)
            );
        }
    }
}
