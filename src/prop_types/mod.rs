//! Rule combinators.
//!
//! Primitive rules wrap a single type check. The remaining combinators take
//! arguments and return a [`ConfigResult`](crate::error::ConfigResult): bad
//! arguments are rejected when the schema is built, never during validation.
//!
//! # Examples
//!
//! ```rust
//! use prop_validator::prop_types;
//! use prop_validator::schema::Fields;
//!
//! # fn main() -> Result<(), prop_validator::error::ConfigError> {
//! let user = prop_types::exact(Fields::from([
//!     ("name", prop_types::string().required()),
//!     ("age", prop_types::integer_range(0.0, 150.0)?),
//!     ("tags", prop_types::array_of(prop_types::string())?),
//! ]))?;
//! assert_eq!(user.expected_types(), vec!["Object"]);
//! # Ok(())
//! # }
//! ```

pub mod combinators;
pub mod range;


use crate::rule::{Evaluation, Rule, make_rule};
use crate::value::{
    Value, is_array, is_boolean, is_error, is_function, is_integer, is_number, is_plain_object,
    is_regex, is_string, is_symbol,
};

pub use combinators::{
    array_of, custom_prop, exact, instance_of, object_of, one_of, one_of_type, shape,
    string_matching,
};
pub use range::{RangeFamily, RangeKind, integer_range, number_range};

pub const STRING: &str = "string";
pub const NUMBER: &str = "number";
pub const INTEGER: &str = "number: integer";
pub const BOOLEAN: &str = "boolean";
pub const FUNCTION: &str = "function";
pub const OBJECT: &str = "Object<any>";
pub const ARRAY: &str = "Array<any>";
pub const SYMBOL: &str = "symbol";
pub const REGEX: &str = "RegExp";
pub const ERROR: &str = "Error";
pub const ANY: &str = "any";

fn primitive(check: fn(&Value) -> bool, label: &'static str, nullable: bool) -> Rule {
    make_rule(
        move |value: &Value, _: &Evaluation<'_>| Ok(check(value)),
        label,
        nullable,
        false,
    )
}

pub fn string() -> Rule {
    primitive(is_string, STRING, true)
}

/// Any number except NaN
pub fn number() -> Rule {
    primitive(is_number, NUMBER, true)
}

pub fn integer() -> Rule {
    primitive(is_integer, INTEGER, true)
}

pub fn boolean() -> Rule {
    primitive(is_boolean, BOOLEAN, true)
}

/// Functions and classes
pub fn function() -> Rule {
    primitive(is_function, FUNCTION, true)
}

/// Plain objects only; arrays and class instances fail
pub fn object() -> Rule {
    primitive(is_plain_object, OBJECT, true)
}

pub fn array() -> Rule {
    primitive(is_array, ARRAY, true)
}

pub fn symbol() -> Rule {
    primitive(is_symbol, SYMBOL, true)
}

pub fn regex() -> Rule {
    primitive(is_regex, REGEX, true)
}

pub fn error() -> Rule {
    primitive(is_error, ERROR, true)
}

/// Accepts every defined value, `null` included
pub fn any() -> Rule {
    primitive(|_| true, ANY, false)
}
