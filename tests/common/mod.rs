//! Common test utilities for validation testing.
//!
//! Fixtures for class hierarchies, a logging initializer and helpers that
//! shorten the common assert-on-report patterns.

use prop_validator::value::Class;
use prop_validator::{Report, Rule, Schema, Value, validate};

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts a JSON literal into a data tree.
pub fn data(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Validates `value` under the single field `val`.
pub fn check(rule: Rule, value: Value) -> Report {
    init_logging();
    let schema = Schema::from([("val", rule)]);
    let data = Value::object([("val", value)]);
    validate(&schema, &data)
}

/// Object paths of the invalid results, in report order.
pub fn error_paths(report: &Report) -> Vec<&str> {
    report
        .errors
        .iter()
        .map(|error| error.object_path.as_str())
        .collect()
}

/// Class hierarchy shared by `instance_of` tests.
pub struct Fixtures {
    pub base: Class,
    pub derived: Class,
    pub unrelated: Class,
}

impl Fixtures {
    pub fn new() -> Self {
        let base = Class::new("Base");
        let derived = Class::extends("Derived", &base);
        Self {
            base,
            derived,
            unrelated: Class::new("Unrelated"),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

/// Asserts that validating `$value` against `$rule` under `val` succeeds.
#[macro_export]
macro_rules! assert_valid {
    ($rule:expr, $value:expr) => {{
        let value: prop_validator::Value = $value;
        let report = $crate::common::check($rule.clone(), value.clone());
        assert!(
            report.is_valid,
            "expected {:?} to be valid, got {:?}",
            value,
            report.error_messages()
        );
    }};
}

/// Asserts that validating `$value` against `$rule` under `val` fails.
#[macro_export]
macro_rules! assert_invalid {
    ($rule:expr, $value:expr) => {{
        let value: prop_validator::Value = $value;
        let report = $crate::common::check($rule.clone(), value.clone());
        assert!(!report.is_valid, "expected {:?} to be invalid", value);
    }};
}
