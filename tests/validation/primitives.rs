//! Primitive type rules.
//!
//! Each rule accepts its own type, rejects the others, and treats `undefined`
//! and `null` according to its nullability.

use serde_json::json;

use crate::common::{check, data};
use crate::{assert_invalid, assert_valid};

use prop_validator::prop_types;
use prop_validator::value::{Class, Function};
use prop_validator::Value;

#[test]
fn test_string_rule() {
    let rule = prop_types::string();
    assert_valid!(rule, Value::from("hello"));
    assert_valid!(rule, Value::from(""));
    assert_valid!(rule, Value::Undefined);
    assert_valid!(rule, Value::Null);
    assert_invalid!(rule, Value::from(1));
    assert_invalid!(rule, data(json!(["a"])));

    let report = check(rule, Value::from(true));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'string | null', but type 'boolean' was found"]
    );
}

#[test]
fn test_number_rule_rejects_nan() {
    let rule = prop_types::number();
    assert_valid!(rule, Value::from(-3.25));
    assert_valid!(rule, Value::from(f64::INFINITY));
    assert_invalid!(rule, Value::from(f64::NAN));
    assert_invalid!(rule, Value::from("1"));

    let report = check(rule, Value::from(f64::NAN));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'number | null'"]
    );
}

#[test]
fn test_integer_rule() {
    let rule = prop_types::integer();
    assert_valid!(rule, Value::from(10));
    assert_valid!(rule, Value::from(-0.0));
    assert_invalid!(rule, Value::from(10.5));
    assert_invalid!(rule, Value::from(f64::INFINITY));

    let report = check(rule, Value::from(10.5));
    assert_eq!(report.errors[0].value_expected_type, "number: integer | null");
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'number: integer | null'"]
    );
}

#[test]
fn test_boolean_rule() {
    let rule = prop_types::boolean();
    assert_valid!(rule, Value::from(false));
    assert_valid!(rule, Value::Undefined);
    assert_invalid!(rule, Value::from(0));
    assert_invalid!(rule, Value::from("true"));
}

#[test]
fn test_function_rule_accepts_functions_and_classes() {
    let rule = prop_types::function();
    assert_valid!(rule, Value::from(Function::new("handler")));
    assert_valid!(rule, Value::from(Function::new_async("load")));
    assert_valid!(rule, Value::from(Class::new("Thing")));
    assert_invalid!(rule, data(json!({})));
}

#[test]
fn test_object_rule_accepts_plain_objects_only() {
    let rule = prop_types::object();
    let thing = Class::new("Thing");
    assert_valid!(rule, data(json!({ "a": 1 })));
    assert_invalid!(rule, data(json!([1, 2])));
    assert_invalid!(rule, thing.instantiate([("a", 1)]));

    let report = check(rule, data(json!([])));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'Object<any> | null', but type 'Array' was found"]
    );
}

#[test]
fn test_array_rule() {
    let rule = prop_types::array();
    assert_valid!(rule, data(json!([])));
    assert_valid!(rule, data(json!([1, "two", null])));
    assert_invalid!(rule, data(json!({ "0": 1 })));
}

#[test]
fn test_reference_type_rules_accept_null_unless_required() {
    let cases = [
        (prop_types::symbol(), Value::symbol("id"), "symbol"),
        (
            prop_types::regex(),
            Value::regex("^a$").expect("valid regex"),
            "RegExp",
        ),
        (
            prop_types::error(),
            Value::error("TypeError", "bad input"),
            "Error",
        ),
    ];

    for (rule, good, label) in cases {
        assert_valid!(rule, good);
        assert_valid!(rule, Value::Undefined);
        assert_valid!(rule, Value::Null);
        assert_invalid!(rule.required(), Value::Null);

        let report = check(rule, Value::from("text"));
        assert_eq!(report.errors[0].value_expected_type_list, vec![label, "null"]);
        assert_eq!(
            report.errors[0].message.as_deref(),
            Some(format!("Property 'val' should be type '{label} | null', but type 'string' was found").as_str())
        );
    }
}

#[test]
fn test_any_accepts_everything_defined() {
    let rule = prop_types::any();
    for value in [
        Value::Null,
        Value::from(0),
        Value::from(""),
        data(json!({ "deep": [1, { "x": null }] })),
        Value::symbol("s"),
    ] {
        assert_valid!(rule, value);
    }
    assert!(!check(rule.required(), Value::Undefined).is_valid);
}

#[test]
fn test_required_rejects_missing_and_null() {
    let rule = prop_types::string().required();
    assert_valid!(rule, Value::from("present"));
    assert_invalid!(rule, Value::Null);

    let report = check(rule, Value::Undefined);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].is_required);
    assert_eq!(report.errors[0].value_expected_type_list, vec!["string"]);
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be defined as type 'string', but type 'undefined' was found"]
    );
}

#[test]
fn test_required_variant_leaves_base_optional() {
    let base = prop_types::number();
    let required = base.required();
    assert!(check(base, Value::Undefined).is_valid);
    assert!(!check(required, Value::Undefined).is_valid);
}
