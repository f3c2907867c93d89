// tests/properties.rs
//
// Property checks for the validator predicates over generated inputs.

use proptest::prelude::*;
use validation::{make, Expected, ValidationError, Value};

fn non_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e9f64..1.0e9).prop_map(Value::Number),
        prop::collection::vec(any::<i32>(), 0..5).prop_map(Value::from),
    ]
}

fn non_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::Bool),
        ".*".prop_map(Value::from),
        prop::collection::vec(".*", 0..5).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_text_passes_string_check(s in ".+") {
        prop_assert!(make(&Value::from(s), "field").is_string().is_ok());
    }

    #[test]
    fn prop_non_text_fails_string_check(v in non_text()) {
        prop_assert_eq!(
            make(&v, "field").is_string().unwrap_err(),
            ValidationError::wrong_type("field", Expected::String)
        );
    }

    #[test]
    fn prop_upper_bound_only(v in -1.0e6f64..1.0e6, max in -1.0e6f64..1.0e6) {
        let value = Value::from(v);
        let result = make(&value, "n").is_between(max, None);
        prop_assert_eq!(result.is_err(), v > max);
    }

    #[test]
    fn prop_two_sided_bound(v in -1.0e6f64..1.0e6, a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let value = Value::from(v);
        let result = make(&value, "n").is_between(max, Some(min));
        prop_assert_eq!(result.is_err(), v < min || v > max);
    }

    #[test]
    fn prop_bounds_are_inclusive(min in -1.0e6f64..0.0, max in 0.0f64..1.0e6) {
        prop_assert!(make(&Value::from(min), "n").is_between(max, Some(min)).is_ok());
        prop_assert!(make(&Value::from(max), "n").is_between(max, Some(min)).is_ok());
    }

    #[test]
    fn prop_element_counts(items in prop::collection::vec(any::<u8>(), 0..20), n in 0usize..25) {
        let len = items.len();
        let value = Value::from(items);
        prop_assert_eq!(make(&value, "list").min_elements(n).is_err(), len < n);
        prop_assert_eq!(make(&value, "list").max_elements(n).is_err(), len > n);
    }

    #[test]
    fn prop_wrong_element_type_fails(
        items in prop::collection::vec(".*", 0..10),
        bad in non_text(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut seq: Vec<Value> = items.into_iter().map(Value::from).collect();
        let idx = at.index(seq.len() + 1);
        seq.insert(idx, bad);
        let value = Value::Sequence(seq);
        prop_assert!(make(&value, "tags").is_string_array().is_err());
    }

    #[test]
    fn prop_non_number_element_fails(
        nums in prop::collection::vec(any::<i32>(), 0..10),
        bad in non_number(),
    ) {
        let mut seq: Vec<Value> = nums.into_iter().map(Value::from).collect();
        seq.push(bad);
        let value = Value::Sequence(seq);
        prop_assert!(make(&value, "rolls").is_number_array().is_err());
    }

    #[test]
    fn prop_enum_membership(pick in 0usize..3, other in "[A-Z]{1,8}") {
        let allowed = ["self", "enemy", "friendly"];
        prop_assert!(make(&Value::from(allowed[pick]), "target").is_part_of_enum(allowed).is_ok());
        prop_assert!(make(&Value::from(other), "target").is_part_of_enum(allowed).is_err());
    }
}

#[test]
fn test_empty_sequences_pass_element_checks() {
    let empty = Value::Sequence(Vec::new());
    assert!(make(&empty, "tags").is_string_array().is_ok());
    assert!(make(&empty, "rolls").is_number_array().is_ok());
    assert!(make(&empty, "ids").is_object_id_array().is_ok());
}
