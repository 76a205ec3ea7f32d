//! Declarative schema validation for dynamic data trees.
//!
//! Schemas are built from composable rules in the style of React's PropTypes
//! and evaluated against a [`Value`] tree. Validation never fails: every field
//! produces a [`PropResult`], and the aggregated [`Report`] lists the invalid
//! ones with a path and a human-readable message. Only a malformed schema is an
//! error, and it is reported when the schema is built.
//!
//! # Core Components
//!
//! - [`prop_types`] - Rule combinators (`string`, `shape`, `array_of`, ...)
//! - [`Rule`] - A predicate bundled with its expected-type metadata
//! - [`Schema`] - A bare rule or an ordered field mapping
//! - [`validate`] / [`Validator`] - Evaluate a schema and aggregate the results
//!
//! # Quick Start
//!
//! ```rust
//! use prop_validator::{prop_types, validate, Fields, Schema, Value};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), prop_validator::ConfigError> {
//! let schema = Schema::from([
//!     ("name", prop_types::string().required()),
//!     ("tags", prop_types::array_of(prop_types::string())?),
//!     ("address", prop_types::exact(Fields::from([
//!         ("city", prop_types::string()),
//!     ]))?),
//! ]);
//!
//! let data = Value::from(json!({
//!     "tags": ["a", 1],
//!     "address": { "city": "Oslo", "zip": "0150" }
//! }));
//!
//! let report = validate(&schema, &data);
//! assert!(!report.is_valid);
//! assert_eq!(
//!     report.error_messages(),
//!     vec![
//!         "Property 'name' should be defined as type 'string', but type 'undefined' was found",
//!         "Property 'tags' should be type 'Array<string> | null'",
//!         "Property 'address.zip' should not be defined, but type 'string' was found",
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod path;
pub mod prop_types;
pub mod report;
pub mod rule;
pub mod schema;
pub mod value;

// Re-export commonly used types for convenience
pub use error::{ConfigError, ConfigResult, Error, Exception, Result};
pub use path::{PathSegment, join_object_path};
pub use report::{Label, PropResult, Report, ValidateOptions, Validator, validate};
pub use rule::{Evaluation, Rule, make_rule};
pub use schema::{Fields, RecursionGate, Schema};
pub use value::Value;
