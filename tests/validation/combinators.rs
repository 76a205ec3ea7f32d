//! Combinator rules and their configuration errors.

use serde_json::json;

use crate::common::{Fixtures, check, data};
use crate::{assert_invalid, assert_valid};

use prop_validator::prop_types::{self, RangeFamily, RangeKind};
use prop_validator::value::Function;
use prop_validator::{ConfigError, Fields, Value};

#[test]
fn test_number_range_kinds() {
    let inclusive = prop_types::number_range(1.0, 3.0).expect("valid range");
    assert_valid!(inclusive, Value::from(1));
    assert_valid!(inclusive, Value::from(3));
    assert_valid!(inclusive, Value::from(2.5));
    assert_invalid!(inclusive, Value::from(3.01));
    assert_invalid!(inclusive, Value::from("2"));

    let exclusive = RangeFamily::Number.exclusive(&[1.0, 3.0]).expect("valid range");
    assert_invalid!(exclusive, Value::from(1));
    assert_valid!(exclusive, Value::from(1.5));

    let above = RangeFamily::Number.greater_than(&[0.0]).expect("valid range");
    assert_invalid!(above, Value::from(0));
    assert_valid!(above, Value::from(f64::INFINITY));

    let at_most = RangeFamily::Number.less_than_or_equal(&[10.0]).expect("valid range");
    assert_valid!(at_most, Value::from(10));
    assert_invalid!(at_most, Value::from(10.5));
    assert_invalid!(at_most, Value::from(f64::NAN));
}

#[test]
fn test_integer_range_requires_whole_numbers() {
    let rule = prop_types::integer_range(0.0, 10.0).expect("valid range");
    assert_valid!(rule, Value::from(0));
    assert_valid!(rule, Value::from(10));
    assert_invalid!(rule, Value::from(5.5));
    assert_invalid!(rule, Value::from(11));
    assert_valid!(rule, Value::Null);

    let report = check(rule, Value::from(5.5));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'number: integer, 0 ≤ n ≤ 10 | null'"]
    );
}

#[test]
fn test_range_configuration_errors() {
    let error = RangeFamily::Number
        .inclusive(&[5.0])
        .expect_err("one bound is not enough");
    assert_eq!(
        error,
        ConfigError::invalid_range(
            "numberRange",
            RangeKind::Inclusive,
            "takes exactly two bounds, min and max",
            "5",
        )
    );
    assert_eq!(
        error.to_string(),
        "PropTypes.numberRange.inclusive() takes exactly two bounds, min and max; received 5"
    );

    let error = RangeFamily::Integer
        .greater_than(&[1.0, 2.0])
        .expect_err("two bounds are too many");
    assert_eq!(error.combinator(), "integerRange");
    assert!(error.to_string().contains("takes exactly one bound"));

    let error = prop_types::number_range(3.0, 1.0).expect_err("inverted bounds");
    assert!(error.to_string().contains("min to be less than or equal to max"));
    assert!(error.to_string().ends_with("received 3, 1"));

    let error = prop_types::number_range(f64::NAN, 1.0).expect_err("NaN bound");
    assert!(error.to_string().contains("NaN"));
}

#[test]
fn test_string_matching() {
    let rule = prop_types::string_matching(Value::regex("^[a-z]+$").expect("valid regex"))
        .expect("regex argument");
    assert_valid!(rule, Value::from("abc"));
    assert_invalid!(rule, Value::from("ABC"));
    assert_valid!(rule, Value::Null);

    let report = check(rule.clone(), Value::from("A1"));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'string: /^[a-z]+$/ | null'"]
    );

    let report = check(rule, Value::from(42));
    assert!(!report.is_valid);
    let exception = report.errors[0].exception.as_ref().expect("exception recorded");
    assert!(exception.message.contains("number"));
}

#[test]
fn test_string_matching_requires_regex() {
    let error = prop_types::string_matching("a|b").expect_err("plain string rejected");
    assert_eq!(error.combinator(), "stringMatching");
    assert!(error.to_string().ends_with("received 'a|b'"));
}

#[test]
fn test_one_of_literals() {
    let rule = prop_types::one_of(data(json!(["qwerty", 5, null, [1, 2]]))).expect("literal list");
    assert_valid!(rule, Value::from("qwerty"));
    assert_valid!(rule, Value::from(5));
    assert_valid!(rule, Value::Null);
    assert_valid!(rule, data(json!([1, 2])));
    assert_invalid!(rule, Value::from("5"));
    assert_invalid!(rule, data(json!([2, 1])));

    let report = check(rule, Value::from(6));
    assert_eq!(
        report.errors[0].value_expected_type_list,
        vec!["string: \"qwerty\"", "number: 5", "null: null", "Array: [1,2]"]
    );
    assert_eq!(
        report.error_messages(),
        vec![
            "Property 'val' should be type 'string: \"qwerty\" | number: 5 | null: null | Array: [1,2]'"
        ]
    );
}

#[test]
fn test_one_of_uses_same_value() {
    let rule = prop_types::one_of(Value::array([f64::NAN, 0.0])).expect("literal list");
    assert_valid!(rule, Value::from(f64::NAN));
    assert_valid!(rule, Value::from(0.0));
    assert_invalid!(rule, Value::from(-0.0));
}

#[test]
fn test_one_of_requires_array() {
    let error = prop_types::one_of("a").expect_err("scalar rejected");
    assert_eq!(error.code(), "PROPTYPES_ERROR");
    assert!(error.to_string().starts_with("PropTypes.oneOf() only takes"));
    assert!(error.to_string().ends_with("received 'a'"));
}

#[test]
fn test_one_of_type_union() {
    let rule = prop_types::one_of_type([prop_types::string(), prop_types::integer()])
        .expect("non-empty union");
    assert_valid!(rule, Value::from("x"));
    assert_valid!(rule, Value::from(7));
    assert_valid!(rule, Value::Null);
    assert_invalid!(rule, Value::from(7.5));
    assert_invalid!(rule, Value::from(true));

    let report = check(rule, Value::from(true));
    assert_eq!(
        report.errors[0].value_expected_type_list,
        vec!["string", "number: integer"]
    );
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'string | number: integer', but type 'boolean' was found"]
    );
}

#[test]
fn test_one_of_type_null_follows_members() {
    let fixtures = Fixtures::new();
    let rule = prop_types::one_of_type([
        prop_types::instance_of(&fixtures.base).expect("class argument"),
        prop_types::one_of(data(json!(["draft"]))).expect("literal list"),
    ])
    .expect("non-empty union");
    assert_invalid!(rule, Value::Null);
    assert_valid!(rule, Value::from("draft"));
    assert_valid!(rule, fixtures.derived.instantiate([("x", 1)]));

    let with_nullable = prop_types::one_of_type([prop_types::symbol(), prop_types::regex()])
        .expect("non-empty union");
    assert_valid!(with_nullable, Value::Null);
}

#[test]
fn test_one_of_type_rejects_empty_list() {
    let error = prop_types::one_of_type(Vec::new()).expect_err("empty union");
    assert_eq!(error.combinator(), "oneOfType");
    assert!(error.to_string().ends_with("received []"));
}

#[test]
fn test_array_of_and_object_of() {
    let list = prop_types::array_of(prop_types::number()).expect("member rule");
    assert_valid!(list, data(json!([])));
    assert_valid!(list, data(json!([1, 2.5, null])));
    assert_invalid!(list, data(json!([1, "2"])));
    assert_invalid!(list, data(json!({ "a": 1 })));

    let map = prop_types::object_of(prop_types::boolean()).expect("member rule");
    assert_valid!(map, data(json!({ "a": true, "b": false })));
    assert_invalid!(map, data(json!({ "a": "yes" })));
    assert_invalid!(map, data(json!([true])));

    let report = check(map, data(json!({ "a": 1 })));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'Object<boolean> | null'"]
    );
}

#[test]
fn test_member_rules_reject_field_mappings() {
    let error = prop_types::array_of(Fields::from([("a", prop_types::string())]))
        .expect_err("mapping rejected");
    assert_eq!(error.combinator(), "arrayOf");
    assert!(error.to_string().ends_with("received { a }"));
}

#[test]
fn test_instance_of_follows_class_hierarchy() {
    let fixtures = Fixtures::new();
    let rule = prop_types::instance_of(&fixtures.base).expect("class argument");

    assert_valid!(rule, fixtures.base.instantiate(Vec::<(&str, Value)>::new()));
    assert_valid!(rule, fixtures.derived.instantiate([("x", 1)]));
    assert_invalid!(rule, fixtures.unrelated.instantiate([("x", 1)]));
    assert_invalid!(rule, data(json!({})));
    assert_invalid!(rule, Value::Null);

    let report = check(rule, fixtures.unrelated.instantiate([("x", 1)]));
    assert_eq!(
        report.error_messages(),
        vec!["Property 'val' should be type 'Base', but type 'Unrelated' was found"]
    );
}

#[test]
fn test_instance_of_requires_class() {
    let error = prop_types::instance_of(Function::new("Thing")).expect_err("function rejected");
    assert_eq!(error.combinator(), "instanceOf");
    assert!(error.to_string().ends_with("received [Function: Thing]"));
}

#[test]
fn test_custom_prop_reads_siblings() {
    let confirm = prop_types::custom_prop(
        |value, evaluation| Ok(evaluation.sibling("password") == Some(value)),
        "string: equal to password",
    )
    .expect("labelled predicate");
    let schema = prop_validator::Schema::from([
        ("password", prop_types::string()),
        ("confirm", confirm),
    ]);

    let ok = prop_validator::validate(&schema, &data(json!({ "password": "s3cret", "confirm": "s3cret" })));
    assert!(ok.is_valid);

    let mismatch =
        prop_validator::validate(&schema, &data(json!({ "password": "s3cret", "confirm": "other" })));
    assert_eq!(
        mismatch.error_messages(),
        vec!["Property 'confirm' should be type 'string: equal to password'"]
    );
}

#[test]
fn test_custom_prop_requires_label() {
    let error = prop_types::custom_prop(|_, _| Ok(true), "  ").expect_err("blank label");
    assert_eq!(error.combinator(), "customProp");
}

#[test]
fn test_shape_and_exact_require_field_mapping() {
    let error = prop_types::shape(prop_types::string()).expect_err("bare rule rejected");
    assert_eq!(error.combinator(), "shape");
    assert!(error.to_string().ends_with("received [Rule: string]"));

    let error = prop_types::exact(prop_types::number()).expect_err("bare rule rejected");
    assert_eq!(error.combinator(), "exact");
}
