//! Type classification for data values.
//!
//! [`type_of`] produces the canonical label shown as `valueActualType` in results
//! and in diagnostic messages. The `is_*` predicates are the checks the primitive
//! rules are built on.

use super::types::{Map, Value};

/// Returns the canonical type label of a value.
///
/// Primitive scalars use lowercase names (`string`, `number`, `boolean`, `null`,
/// `undefined`); everything else uses its constructor name (`Array`, `Object`,
/// `Function`, `RegExp`, `Symbol`, the error name, or the class name).
pub fn type_of(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Symbol(_) => "Symbol".to_string(),
        Value::Function(function) if function.is_async() => "AsyncFunction".to_string(),
        Value::Function(_) => "Function".to_string(),
        Value::Regex(_) => "RegExp".to_string(),
        Value::Error(error) => error.name().to_string(),
        Value::Array(_) => "Array".to_string(),
        Value::Object(_) => "Object".to_string(),
        Value::Class(class) => class.name().to_string(),
        Value::Instance(instance) => instance.class().name().to_string(),
    }
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Any number except NaN
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

/// Finite numbers without a fractional part
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.trunc() == *n)
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Functions and classes are both callable
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_) | Value::Class(_))
}

/// Plain key/value objects; arrays and class instances are excluded
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

pub fn is_regex(value: &Value) -> bool {
    matches!(value, Value::Regex(_))
}

pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

/// Nominal type descriptors usable with an instance-of check
pub fn is_class(value: &Value) -> bool {
    matches!(value, Value::Class(_))
}

/// SameValue equality.
///
/// Like `==` on scalars except that `NaN` equals `NaN` and `+0` differs from
/// `-0`. Symbols, functions and classes compare by identity; containers compare
/// member-wise with the same rules.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x == y && x.is_sign_negative() == y.is_sign_negative()
            }
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.ptr_eq(y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        (Value::Class(x), Value::Class(y)) => x.ptr_eq(y),
        (Value::Regex(x), Value::Regex(y)) => x.as_str() == y.as_str(),
        (Value::Error(x), Value::Error(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| same_value(l, r))
        }
        (Value::Object(x), Value::Object(y)) => same_properties(x, y),
        (Value::Instance(x), Value::Instance(y)) => {
            x.class().ptr_eq(y.class()) && same_properties(x.fields(), y.fields())
        }
        _ => false,
    }
}

fn same_properties(a: &Map, b: &Map) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, l)| b.get(key).is_some_and(|r| same_value(l, r)))
}
