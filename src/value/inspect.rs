//! Best-effort string renderings of values for diagnostics.

use super::types::{Map, Value};

/// Renders a number the way a dynamic runtime prints it: `5` rather than
/// `5.0`, `NaN`, `Infinity`, and `0` for negative zero.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Human-oriented rendering used in configuration error messages,
/// e.g. `[ 'a', 2 ]` or `{ a: [Function: go] }`.
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => format!("'{s}'"),
        Value::Symbol(symbol) => format!("Symbol({})", symbol.description()),
        Value::Function(function) => {
            let kind = if function.is_async() { "AsyncFunction" } else { "Function" };
            if function.name().is_empty() {
                format!("[{kind} (anonymous)]")
            } else {
                format!("[{kind}: {}]", function.name())
            }
        }
        Value::Regex(regex) => format!("/{}/", regex.as_str()),
        Value::Error(error) => format!("{}: {}", error.name(), error.message()),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(inspect).collect();
            format!("[ {} ]", inner.join(", "))
        }
        Value::Object(map) => inspect_map(map),
        Value::Class(class) => format!("[class {}]", class.name()),
        Value::Instance(instance) => {
            format!("{} {}", instance.class().name(), inspect_map(instance.fields()))
        }
    }
}

fn inspect_map(map: &Map) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    let inner: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{key}: {}", inspect(value)))
        .collect();
    format!("{{ {} }}", inner.join(", "))
}

/// Renders a list of arguments as a comma-separated sequence of [`inspect`]s.
pub fn inspect_arguments(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(inspect).collect();
    rendered.join(", ")
}

/// JSON-like rendering used in literal labels, e.g. `"qwerty"` or `[1,2]`.
///
/// Values with no JSON form render as `undefined` at the top level and are
/// dropped (objects) or written as `null` (arrays) when nested.
pub fn render_json(value: &Value) -> String {
    render_json_inner(value).unwrap_or_else(|| "undefined".to_string())
}

fn render_json_inner(value: &Value) -> Option<String> {
    match value {
        Value::Undefined | Value::Symbol(_) | Value::Function(_) | Value::Class(_) => None,
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) if n.is_finite() => Some(format_number(*n)),
        Value::Number(_) => Some("null".to_string()),
        Value::String(s) => Some(quote(s)),
        Value::Regex(_) | Value::Error(_) => Some("{}".to_string()),
        Value::Array(items) => {
            let inner: Vec<String> = items
                .iter()
                .map(|item| render_json_inner(item).unwrap_or_else(|| "null".to_string()))
                .collect();
            Some(format!("[{}]", inner.join(",")))
        }
        Value::Object(map) => Some(render_json_map(map)),
        Value::Instance(instance) => Some(render_json_map(instance.fields())),
    }
}

fn render_json_map(map: &Map) -> String {
    let inner: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| {
            render_json_inner(value).map(|rendered| format!("{}:{rendered}", quote(key)))
        })
        .collect();
    format!("{{{}}}", inner.join(","))
}

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}
