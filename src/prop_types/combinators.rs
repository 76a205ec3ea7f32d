//! Combinators that take arguments: enums, unions, containers, nesting.

use crate::error::{ConfigError, ConfigResult, PredicateError};
use crate::path::PathSegment;
use crate::rule::{ContainerKind, Evaluation, ExpectedTypes, Nested, Rule, make_rule};
use crate::schema::{Fields, Schema};
use crate::value::{Value, inspect, is_plain_object, render_json, same_value, type_of};

/// Label of the container check behind `shape` and `exact`.
const SHAPE_LABEL: &str = "Object";

/// Matches strings against a regular expression.
///
/// Takes a [`Value::Regex`]. Evaluating the rule against a defined value that
/// is not a string records an exception on the result.
pub fn string_matching(regex: impl Into<Value>) -> ConfigResult<Rule> {
    let regex = match regex.into() {
        Value::Regex(regex) => regex,
        other => {
            return Err(ConfigError::invalid_argument(
                "stringMatching",
                "a single regular expression argument, e.g. PropTypes.stringMatching(/a|b/)",
                inspect(&other),
            ));
        }
    };

    let source = regex.as_str().to_string();
    Ok(make_rule(
        move |value: &Value, _: &Evaluation<'_>| match value.as_str() {
            Some(text) => Ok(regex.is_match(text)),
            None => Err(format!("cannot match a value of type '{}'", type_of(value)).into()),
        },
        ExpectedTypes::lazy(move || vec![format!("string: /{source}/")]),
        true,
        false,
    ))
}

/// Accepts values SameValue-equal to one of the literals.
///
/// Takes a [`Value::Array`] of literals. Containers compare structurally,
/// member by member, so `one_of([[1]])` accepts a fresh `[1]`.
pub fn one_of(literals: impl Into<Value>) -> ConfigResult<Rule> {
    let literals = match literals.into() {
        Value::Array(literals) => literals,
        other => {
            return Err(ConfigError::invalid_argument(
                "oneOf",
                "a single array of literals that can be compared with SameValue",
                inspect(&other),
            ));
        }
    };

    let labels: Vec<String> = literals
        .iter()
        .map(|literal| format!("{}: {}", type_of(literal), render_json(literal)))
        .collect();
    Ok(make_rule(
        move |value: &Value, _: &Evaluation<'_>| {
            Ok(literals.iter().any(|literal| same_value(literal, value)))
        },
        labels,
        false,
        false,
    ))
}

/// Accepts values that pass at least one of the rules, tried in order.
pub fn one_of_type(rules: impl IntoIterator<Item = Rule>) -> ConfigResult<Rule> {
    let rules: Vec<Rule> = rules.into_iter().collect();
    if rules.is_empty() {
        return Err(ConfigError::invalid_argument(
            "oneOfType",
            "a single non-empty array of rules such as PropTypes.string, PropTypes.number, etc.",
            "[]",
        ));
    }

    let label_rules = rules.clone();
    Ok(make_rule(
        move |value: &Value, evaluation: &Evaluation<'_>| {
            Ok(rules.iter().any(|rule| rule.passes(value, evaluation)))
        },
        ExpectedTypes::lazy(move || {
            label_rules
                .iter()
                .flat_map(Rule::expected_types)
                .collect()
        }),
        false,
        false,
    ))
}

/// Arrays whose every member passes `member`.
pub fn array_of(member: impl Into<Schema>) -> ConfigResult<Rule> {
    member_rule("arrayOf", ContainerKind::Array, member.into())
}

/// Plain objects whose every value passes `member`.
pub fn object_of(member: impl Into<Schema>) -> ConfigResult<Rule> {
    member_rule("objectOf", ContainerKind::Object, member.into())
}

fn member_rule(combinator: &str, container: ContainerKind, member: Schema) -> ConfigResult<Rule> {
    let member = match member {
        Schema::Rule(rule) => rule,
        other @ Schema::Fields(_) => {
            return Err(ConfigError::invalid_argument(
                combinator,
                format!("a single rule, e.g. PropTypes.{combinator}(PropTypes.string)"),
                other.describe(),
            ));
        }
    };

    let label_member = member.clone();
    let label = ExpectedTypes::lazy(move || {
        vec![format!(
            "{}<{}>",
            container.label(),
            label_member.expected_types().join(" | ")
        )]
    });
    let nested = member.nested().cloned().map(|inner| Nested::Members {
        container,
        inner: Box::new(inner),
    });

    let predicate = move |value: &Value, evaluation: &Evaluation<'_>| -> Result<bool, PredicateError> {
        let member_passes = |key: PathSegment, item: &Value| {
            let member_evaluation =
                Evaluation::new(Some(&key), Some(value), evaluation.state, evaluation.parent);
            member.passes(item, &member_evaluation)
        };
        let valid = match (container, value) {
            (ContainerKind::Array, Value::Array(items)) => items
                .iter()
                .enumerate()
                .all(|(index, item)| member_passes(PathSegment::Index(index), item)),
            (ContainerKind::Object, Value::Object(map)) => map
                .iter()
                .all(|(key, item)| member_passes(PathSegment::from(key), item)),
            _ => false,
        };
        Ok(valid)
    };

    Ok(Rule::from_parts(
        Box::new(predicate),
        label,
        true,
        false,
        nested,
        Some(container),
    ))
}

/// Instances of `class` or of one of its subclasses.
///
/// Takes a [`Value::Class`]; functions and instances are rejected.
pub fn instance_of(class: impl Into<Value>) -> ConfigResult<Rule> {
    let class = match class.into() {
        Value::Class(class) => class,
        other => {
            return Err(ConfigError::invalid_argument(
                "instanceOf",
                "a single class argument, e.g. PropTypes.instanceOf(Thing)",
                inspect(&other),
            ));
        }
    };

    let label = class.name().to_string();
    Ok(make_rule(
        move |value: &Value, _: &Evaluation<'_>| {
            Ok(matches!(value, Value::Instance(instance) if instance.is_instance_of(&class)))
        },
        label,
        false,
        false,
    ))
}

/// A rule from a user predicate. The predicate sees the full evaluation
/// context, so it can look at sibling properties.
pub fn custom_prop<F>(predicate: F, label: impl Into<String>) -> ConfigResult<Rule>
where
    F: Fn(&Value, &Evaluation<'_>) -> Result<bool, PredicateError> + Send + Sync + 'static,
{
    let label = label.into();
    if label.trim().is_empty() {
        return Err(ConfigError::invalid_argument(
            "customProp",
            "a predicate function and a non-empty type label",
            inspect(&Value::from(label)),
        ));
    }
    Ok(make_rule(predicate, label, false, false))
}

/// A plain object whose properties are checked against `fields`.
/// Properties not named in `fields` are allowed.
pub fn shape(fields: impl Into<Schema>) -> ConfigResult<Rule> {
    nested_object("shape", fields.into(), false)
}

/// Like [`shape`], but properties not named in `fields` are errors.
pub fn exact(fields: impl Into<Schema>) -> ConfigResult<Rule> {
    nested_object("exact", fields.into(), true)
}

fn nested_object(combinator: &str, schema: Schema, exact: bool) -> ConfigResult<Rule> {
    let fields: Fields = match schema {
        Schema::Fields(fields) => fields,
        other @ Schema::Rule(_) => {
            return Err(ConfigError::invalid_argument(
                combinator,
                format!("a single field mapping, e.g. PropTypes.{combinator}({{ a: PropTypes.string }})"),
                other.describe(),
            ));
        }
    };

    Ok(Rule::from_parts(
        Box::new(
            |value: &Value, _: &Evaluation<'_>| -> Result<bool, PredicateError> {
                Ok(is_plain_object(value))
            },
        ),
        ExpectedTypes::from(SHAPE_LABEL),
        true,
        false,
        Some(Nested::Shape { fields, exact }),
        None,
    ))
}
