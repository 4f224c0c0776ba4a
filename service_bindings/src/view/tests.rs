//! Unit tests for typed accessor coercion rules.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
#![expect(
    clippy::needless_pass_by_value,
    reason = "rstest injects fixtures and cases by value"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "float results are compared within an epsilon"
)]

use std::collections::BTreeMap;

use rstest::{fixture, rstest};
use serde_json::json;

use super::{TypedListView, TypedMapView, Value};
use crate::error::{BindingError, BindingResult, ValueLocation};
use crate::value::{Decimal, Number, RawValue, ValueKind};

const INTEGER: i64 = 42;
const DOUBLE: f64 = 13.37;

fn big_decimal() -> Decimal {
    "0.12345678901234567890123456789012345678901"
        .parse()
        .expect("literal parses")
}

/// The typed accessors shared by both view kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Accessor {
    Boolean,
    Integer,
    Double,
    Number,
    String,
    ListView,
    MapView,
}

const ALL_ACCESSORS: [Accessor; 7] = [
    Accessor::Boolean,
    Accessor::Integer,
    Accessor::Double,
    Accessor::Number,
    Accessor::String,
    Accessor::ListView,
    Accessor::MapView,
];

const NUMERIC_ACCESSORS: &[Accessor] = &[Accessor::Integer, Accessor::Double, Accessor::Number];

impl Accessor {
    fn on_list(self, view: &TypedListView, index: usize) -> BindingResult<()> {
        match self {
            Self::Boolean => view.get_boolean(index).map(drop),
            Self::Integer => view.get_integer(index).map(drop),
            Self::Double => view.get_double(index).map(drop),
            Self::Number => view.get_number(index).map(drop),
            Self::String => view.get_string(index).map(drop),
            Self::ListView => view.get_list_view(index).map(drop),
            Self::MapView => view.get_map_view(index).map(drop),
        }
    }

    fn on_map(self, view: &TypedMapView, key: &str) -> BindingResult<()> {
        match self {
            Self::Boolean => view.get_boolean(key).map(drop),
            Self::Integer => view.get_integer(key).map(drop),
            Self::Double => view.get_double(key).map(drop),
            Self::Number => view.get_number(key).map(drop),
            Self::String => view.get_string(key).map(drop),
            Self::ListView => view.get_list_view(key).map(drop),
            Self::MapView => view.get_map_view(key).map(drop),
        }
    }
}

fn expect_cast_failure_for_all_but(view: &TypedListView, index: usize, working: &[Accessor]) {
    for accessor in ALL_ACCESSORS {
        let outcome = accessor.on_list(view, index);
        if working.contains(&accessor) {
            assert!(outcome.is_ok(), "{accessor:?} should succeed: {outcome:?}");
        } else {
            assert!(
                matches!(outcome, Err(BindingError::ValueCast { .. })),
                "{accessor:?} should fail with a cast error: {outcome:?}"
            );
        }
    }
}

#[fixture]
fn primitives() -> Vec<RawValue> {
    vec![
        RawValue::Null,
        RawValue::Bool(true),
        RawValue::Integer(INTEGER),
        RawValue::Float(DOUBLE),
        RawValue::Decimal(big_decimal()),
        RawValue::from("Value"),
    ]
}

#[rstest]
fn create_wraps_primitives_and_views(primitives: Vec<RawValue>) {
    let mut values: Vec<Value> = primitives.into_iter().map(Value::from).collect();
    values.push(TypedMapView::default().into());
    values.push(TypedListView::default().into());

    let sut = TypedListView::from_raw_list(values);

    assert_eq!(sut.get_size(), 8);
    assert_eq!(sut.get(0).expect("index 0 exists"), &Value::Null);
    assert!(sut.get_boolean(1).expect("boolean"));
    assert_eq!(sut.get_integer(2).expect("integer"), INTEGER);
    assert!((sut.get_double(3).expect("double") - DOUBLE).abs() < f64::EPSILON);
    assert_eq!(
        sut.get_number(4).expect("number"),
        Number::Decimal(big_decimal())
    );
    assert_eq!(sut.get_string(5).expect("string"), "Value");
    assert!(sut.get_map_view(6).is_ok());
    assert!(sut.get_list_view(7).is_ok());
}

#[test]
fn create_transforms_nested_map_to_map_view() {
    let nested = BTreeMap::from([("Key".to_owned(), RawValue::from("Value"))]);
    let sut = TypedListView::from_raw_list([RawValue::Map(nested)]);

    let view = sut.get_map_view(0).expect("nested map is a map view");
    assert_eq!(view.get_keys(), vec!["Key"]);
}

#[rstest]
fn create_transforms_nested_list_to_list_view(primitives: Vec<RawValue>) {
    let sut = TypedListView::from_raw_list([RawValue::List(primitives)]);

    let view = sut.get_list_view(0).expect("nested list is a list view");
    assert_eq!(view.get_size(), 6);
}

#[rstest]
#[case::boolean(Value::Bool(true), &[Accessor::Boolean])]
#[case::integer(Value::Integer(INTEGER), NUMERIC_ACCESSORS)]
#[case::double(Value::Float(DOUBLE), NUMERIC_ACCESSORS)]
#[case::decimal(Value::Decimal(big_decimal()), NUMERIC_ACCESSORS)]
#[case::string(Value::from("Value"), &[Accessor::String])]
#[case::map_view(Value::Map(TypedMapView::default()), &[Accessor::MapView])]
#[case::list_view(Value::List(TypedListView::default()), &[Accessor::ListView])]
#[case::null(Value::Null, &[])]
fn typed_accessors_accept_only_matching_values(#[case] value: Value, #[case] working: &[Accessor]) {
    let sut = TypedListView::from_raw_list([value]);
    expect_cast_failure_for_all_but(&sut, 0, working);
}

#[test]
fn numeric_accessors_widen_between_representations() {
    let sut = TypedListView::from_raw_list([
        Value::Integer(INTEGER),
        Value::Float(-2.75),
        Value::Decimal(Decimal::new(1_050, 2)),
    ]);

    assert!((sut.get_double(0).expect("integer as double") - 42.0).abs() < f64::EPSILON);
    assert_eq!(sut.get_number(0).expect("integer as number"), Number::Integer(INTEGER));
    assert_eq!(sut.get_integer(1).expect("float as integer"), -2);
    assert_eq!(sut.get_integer(2).expect("decimal as integer"), 10);
    assert!((sut.get_double(2).expect("decimal as double") - 10.5).abs() < f64::EPSILON);
}

#[test]
fn cast_errors_name_requested_and_actual_types() {
    let sut = TypedListView::from_raw_list(["Value"]);

    match sut.get_boolean(0) {
        Err(BindingError::ValueCast {
            requested,
            actual,
            location,
        }) => {
            assert_eq!(requested, ValueKind::Boolean);
            assert_eq!(actual, ValueKind::String);
            assert_eq!(location, ValueLocation::Index(0));
        }
        other => panic!("expected a cast error, got {other:?}"),
    }
}

#[test]
fn number_cast_errors_name_the_numeric_group() {
    let list = TypedListView::from_raw_list(["Value"]);
    let map = TypedMapView::from_raw_map([("key".to_owned(), RawValue::Bool(true))]);

    let list_err = list.get_number(0).expect_err("text is not numeric");
    let map_err = map.get_number("key").expect_err("boolean is not numeric");

    assert!(matches!(
        list_err,
        BindingError::ValueCast { requested: ValueKind::Number, actual: ValueKind::String, .. }
    ));
    assert!(matches!(
        map_err,
        BindingError::ValueCast { requested: ValueKind::Number, actual: ValueKind::Boolean, .. }
    ));
    assert!(list_err.to_string().contains("number"), "{list_err}");
}

#[test]
fn json_decimals_reach_get_number_unrounded() {
    let parsed: serde_json::Value =
        serde_json::from_str("[12345678901234567.891]").expect("document is valid JSON");
    let sut = TypedListView::from_json(parsed).expect("array is a list");

    let number = sut.get_number(0).expect("decimal is numeric");

    assert_eq!(number.to_string(), "12345678901234567.891");
    assert_eq!(
        number,
        Number::Decimal("12345678901234567.891".parse().expect("literal parses"))
    );
    assert_eq!(sut.get_integer(0).expect("decimal as integer"), 12_345_678_901_234_567);
}

#[test]
fn out_of_range_index_is_structural() {
    let sut = TypedListView::from_raw_list([true, false]);

    let err = sut.get_boolean(2).expect_err("index 2 is out of range");
    assert!(matches!(
        err,
        BindingError::IndexOutOfRange { index: 2, size: 2 }
    ));
    assert!(err.is_structural());
}

#[test]
fn get_or_null_distinguishes_null_from_values() {
    let sut = TypedListView::from_raw_list([RawValue::Null, RawValue::Bool(false)]);

    assert_eq!(sut.get_or_null(0).expect("index 0 exists"), None);
    assert_eq!(
        sut.get_or_null(1).expect("index 1 exists"),
        Some(&Value::Bool(false))
    );
    assert!(sut.get_or_null(9).is_err());
}

#[fixture]
fn binding_map() -> TypedMapView {
    TypedMapView::from_json(json!({
        "name": "uaa",
        "port": 8443,
        "ratio": 0.25,
        "enabled": true,
        "tags": ["xsuaa", "oauth"],
        "credentials": {"clientid": "sb-app", "url": "https://auth.example"},
        "retired": null,
    }))
    .expect("object literal is a map")
}

#[rstest]
#[case::string("name", &[Accessor::String])]
#[case::integer("port", NUMERIC_ACCESSORS)]
#[case::double("ratio", NUMERIC_ACCESSORS)]
#[case::boolean("enabled", &[Accessor::Boolean])]
#[case::list_view("tags", &[Accessor::ListView])]
#[case::map_view("credentials", &[Accessor::MapView])]
#[case::null("retired", &[])]
fn map_accessors_follow_list_rules(
    binding_map: TypedMapView,
    #[case] key: &str,
    #[case] working: &[Accessor],
) {
    for accessor in ALL_ACCESSORS {
        let outcome = accessor.on_map(&binding_map, key);
        assert_eq!(
            outcome.is_ok(),
            working.contains(&accessor),
            "{accessor:?} on '{key}': {outcome:?}"
        );
        if let Err(err) = outcome {
            assert!(err.is_value_cast(), "unexpected error for '{key}': {err}");
        }
    }
}

#[rstest]
fn map_view_exposes_nested_structures(binding_map: TypedMapView) {
    assert_eq!(
        binding_map.get_keys(),
        vec!["credentials", "enabled", "name", "port", "ratio", "retired", "tags"]
    );
    let tags = binding_map.get_list_view("tags").expect("tags are a list");
    assert_eq!(tags.get_string(1).expect("second tag"), "oauth");
    let credentials = binding_map
        .get_map_view("credentials")
        .expect("credentials are a map");
    assert_eq!(credentials.get_string("clientid").expect("client id"), "sb-app");
    assert!(binding_map.contains_key("retired"));
    assert_eq!(binding_map.get_or_null("retired").expect("key exists"), None);
}

#[rstest]
fn missing_key_is_not_found(binding_map: TypedMapView) {
    let err = binding_map.get_string("plan").expect_err("plan is absent");
    assert!(matches!(err, BindingError::NotFound { ref key } if key == "plan"));
    assert!(binding_map.get_or_null("plan").is_err());
}

#[test]
fn json_constructors_reject_mismatched_roots() {
    let err = TypedMapView::from_json(json!([1, 2])).expect_err("array is not a map");
    assert!(matches!(
        err,
        BindingError::ValueCast {
            requested: ValueKind::MapView,
            actual: ValueKind::ListView,
            location: ValueLocation::Root,
        }
    ));
    assert!(TypedListView::from_json(json!({"a": 1})).is_err());
}

#[test]
fn clones_share_backing_storage() {
    let original = TypedListView::from_raw_list(["a", "b"]);
    let copy = original.clone();

    assert_eq!(original, copy);
    let first_original: *const Value = original.get(0).expect("index 0 exists");
    let first_copy: *const Value = copy.get(0).expect("index 0 exists");
    assert!(std::ptr::eq(first_original, first_copy));
}
