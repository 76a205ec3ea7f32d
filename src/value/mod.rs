//! Dynamic values and the utilities that describe them.
//!
//! # Key Types
//!
//! - [`Value`] - A node of the data tree being validated
//! - [`Map`] - Insertion-ordered object storage
//! - [`Class`] / [`Instance`] - Nominal types for instance-of checks
//!
//! # Examples
//!
//! ```rust
//! use prop_validator::value::{Value, type_of};
//! use serde_json::json;
//!
//! let data = Value::from(json!({ "name": "Ada", "tags": ["x"] }));
//! assert_eq!(type_of(&data), "Object");
//! assert_eq!(type_of(data.property("tags")), "Array");
//! assert_eq!(type_of(data.property("missing")), "undefined");
//! ```

pub mod classify;
pub mod convert;
pub mod inspect;
pub mod types;


pub use classify::{
    is_array, is_boolean, is_class, is_error, is_function, is_integer, is_number,
    is_plain_object, is_regex, is_string, is_symbol, same_value, type_of,
};
pub use inspect::{format_number, inspect, inspect_arguments, render_json};
pub use types::{Class, ErrorValue, Function, Instance, Map, Symbol, Value};
