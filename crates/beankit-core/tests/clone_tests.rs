mod common;

use beankit_core::errors::{BeanError, ExErrorKind};
use beankit_core::{clone_object, clone_object_quietly, diff};
use common::*;

#[test]
fn test_clone_through_serialization() {
    let original = obelix();

    let copy = clone_object(&original).unwrap();

    assert_eq!(copy, original);
    assert!(diff(&original, &copy).unwrap().is_empty());
}

#[test]
fn test_clone_is_independent_of_original() {
    let original = obelix();

    let mut copy = clone_object(&original).unwrap();
    if let Some(address) = copy.address.as_mut() {
        address.city = Some("Lutetia".to_string());
    }

    assert_eq!(
        original.address.and_then(|a| a.city).as_deref(),
        Some("Armorica")
    );
}

#[test]
fn test_clone_through_native_clone() {
    let original = Token {
        value: "menhir".to_string(),
    };
    assert_eq!(clone_object(&original).unwrap(), original);
}

#[test]
fn test_clone_through_instantiate_and_property_copy() {
    let original = Widget {
        name: "cauldron".to_string(),
        size: 12,
        color: None,
    };
    assert_eq!(clone_object(&original).unwrap(), original);
}

#[test]
fn test_clone_falls_through_failed_serialization() {
    let original = Recoverable {
        id: 7,
        note: Some("potion".to_string()),
    };
    assert_eq!(clone_object(&original).unwrap(), original);
}

#[test]
fn test_clone_surfaces_serialization_error() {
    let err = clone_object(&Fragile { id: 1 }).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert_eq!(
        err,
        BeanError::Serialization {
            message: "stream corrupted".to_string()
        }
    );
}

#[test]
fn test_clone_surfaces_instantiation_error() {
    let err = clone_object(&Sealed { id: 1 }).unwrap_err();

    assert!(
        matches!(err, BeanError::Instantiation { ref reason, .. } if reason == "constructor is private")
    );
}

#[test]
fn test_clone_without_any_strategy() {
    let err = clone_object(&Opaque { id: 1 }).unwrap_err();

    assert_eq!(
        err,
        BeanError::Instantiation {
            type_name: "Opaque".to_string(),
            reason: "no clone strategy available".to_string(),
        }
    );
}

#[test]
fn test_clone_object_quietly() {
    let original = obelix();

    assert_eq!(clone_object_quietly(&original), Some(original));
    assert_eq!(clone_object_quietly(&Opaque { id: 1 }), None);
    assert_eq!(clone_object_quietly(&Fragile { id: 1 }), None);
}
