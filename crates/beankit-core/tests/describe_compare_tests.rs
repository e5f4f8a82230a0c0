mod common;

use std::cmp::Ordering;

use beankit_core::errors::{BeanError, ExErrorKind};
use beankit_core::model::PropertyValue;
use beankit_core::{compare_all, compare_property, describe, equal_properties};
use common::*;

// ===== describe =====

#[test]
fn test_describe_lists_properties_in_declaration_order() {
    let bag = describe(&obelix()).unwrap();

    let names: Vec<&str> = bag.names().collect();
    assert_eq!(
        names,
        vec!["name", "nickname", "gender", "age", "married", "address"]
    );
    assert_eq!(bag.get("name"), Some(&PropertyValue::from("obelix")));
    assert_eq!(bag.get("nickname"), Some(&PropertyValue::Null));
    assert_eq!(bag.get("gender"), Some(&PropertyValue::from("MALE")));
    assert_eq!(bag.get("age"), Some(&PropertyValue::Int(35)));
}

#[test]
fn test_describe_snapshots_nested_beans_as_records() {
    let bag = describe(&obelix()).unwrap();

    let address = bag.get("address").and_then(PropertyValue::as_record).unwrap();
    assert_eq!(address.type_name, "Address");
    assert_eq!(
        address.properties.get("city"),
        Some(&PropertyValue::from("Armorica"))
    );
}

#[test]
fn test_describe_drops_synthetic_class_entry() {
    let guarded = Guarded {
        id: 1,
        score: 2,
        title: None,
    };

    let bag = describe(&guarded).unwrap();

    assert!(!bag.contains_key("class"));
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_describe_wraps_accessor_failure_as_introspection() {
    let err = describe(&Locked).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Introspection);
    match err {
        BeanError::Introspection { type_name, reason } => {
            assert_eq!(type_name, "Locked");
            assert!(reason.contains("access denied"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ===== compare_property =====

#[test]
fn test_compare_both_null_is_equal() {
    let a = person("asterix", Gender::Male);
    let b = person("obelix", Gender::Male);

    assert_eq!(
        compare_property(&a, &b, "nickname").unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_compare_non_null_ranks_above_null() {
    let mut a = person("asterix", Gender::Male);
    a.nickname = Some("little one".to_string());
    let b = person("obelix", Gender::Male);

    assert_eq!(
        compare_property(&a, &b, "nickname").unwrap(),
        Ordering::Greater
    );
    assert_eq!(compare_property(&b, &a, "nickname").unwrap(), Ordering::Less);
}

#[test]
fn test_compare_uses_natural_ordering() {
    let mut a = person("asterix", Gender::Male);
    let mut b = person("obelix", Gender::Male);
    a.age = 35;
    b.age = 30;

    assert_eq!(compare_property(&a, &b, "name").unwrap(), Ordering::Less);
    assert_eq!(compare_property(&a, &b, "age").unwrap(), Ordering::Greater);
    assert_eq!(compare_property(&a, &a, "age").unwrap(), Ordering::Equal);
}

#[test]
fn test_compare_missing_property_counts_as_null() {
    let a = person("asterix", Gender::Male);

    assert_eq!(
        compare_property(&a, &a, "no_such_property").unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_compare_nested_beans_has_no_natural_ordering() {
    let err = compare_property(&obelix(), &obelix(), "address").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Comparison);
    assert!(matches!(err, BeanError::Comparison { ref property, .. } if property == "address"));
}

#[test]
fn test_compare_all_covers_every_property() {
    let a = person("asterix", Gender::Male);
    let b = person("obelix", Gender::Female);

    let orderings = compare_all(&a, &b).unwrap();

    assert_eq!(orderings.len(), 6);
    assert_eq!(orderings["name"], Ordering::Less);
    assert_eq!(orderings["gender"], Ordering::Greater);
    assert_eq!(orderings["address"], Ordering::Equal);
}

// ===== equal_properties =====

#[test]
fn test_equal_properties() {
    let original = obelix();
    let mut moved = obelix();
    moved.address = Some(Address {
        street: "Via Appia".to_string(),
        number: 1,
        city: Some("Rome".to_string()),
    });

    assert!(equal_properties(&original, &obelix()).unwrap());
    assert!(!equal_properties(&original, &moved).unwrap());
    assert!(!equal_properties(&original, &Impostor).unwrap());
}
