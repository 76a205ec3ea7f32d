//! Diagnostic messages for failed rules.

use super::ParentContext;

/// The type family of an expected label: the text before the first `:` or `<`.
///
/// `number: integer` and `Array<string>` belong to the `number` and `Array`
/// families. A value whose actual type equals a family failed a refinement, not
/// the type check itself.
pub fn type_family(label: &str) -> &str {
    label
        .split([':', '<'])
        .next()
        .unwrap_or(label)
        .trim()
}

/// Builds the message for an invalid result.
pub fn create_message(
    path: &str,
    actual: &str,
    expected: &[String],
    parent: &ParentContext,
) -> String {
    if parent.value_should_not_be_defined {
        return format!("Property '{path}' should not be defined, but type '{actual}' was found");
    }

    let expected_text = expected.join(" | ");
    if parent.value_should_be_defined {
        return format!(
            "Property '{path}' should be defined as type '{expected_text}', but type '{actual}' was found"
        );
    }

    if expected.iter().any(|label| type_family(label) == actual) {
        format!("Property '{path}' should be type '{expected_text}'")
    } else {
        format!("Property '{path}' should be type '{expected_text}', but type '{actual}' was found")
    }
}
