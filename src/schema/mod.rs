//! Schema trees and the evaluator that walks them.
//!
//! # Key Types
//!
//! - [`Schema`] - A bare rule or an ordered field mapping
//! - [`Fields`] - Field name to rule mapping, in declaration order
//! - [`Walker`] - Evaluates a schema against data, depth first
//!
//! # Examples
//!
//! ```rust
//! use prop_validator::prop_types;
//! use prop_validator::schema::{Fields, Schema, walk};
//! use prop_validator::value::Value;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), prop_validator::error::ConfigError> {
//! let schema = Schema::from([
//!     ("id", prop_types::integer().required()),
//!     ("owner", prop_types::shape(Fields::from([("name", prop_types::string())]))?),
//! ]);
//! let data = Value::from(json!({ "id": 7, "owner": { "name": "Ada" } }));
//!
//! let paths: Vec<String> = walk(&schema, &data, Vec::new(), false)
//!     .into_iter()
//!     .map(|result| result.object_path)
//!     .collect();
//! assert_eq!(paths, vec!["id", "owner", "owner.name"]);
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod validation;


pub use types::{Fields, Schema};
pub use validation::{RecursionGate, Walker, walk};
