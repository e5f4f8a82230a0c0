mod common;

use beankit_core::{clone_object, diff, diff_map, diff_recursive};
use common::*;
use proptest::prelude::*;

fn arb_person() -> impl Strategy<Value = Person> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z]{1,8}"),
        any::<bool>(),
        0i32..120,
        any::<bool>(),
        proptest::option::of((
            "[a-z ]{0,12}",
            0i32..500,
            proptest::option::of("[a-z]{1,8}"),
        )),
    )
        .prop_map(|(name, nickname, female, age, married, address)| Person {
            name,
            nickname,
            gender: if female { Gender::Female } else { Gender::Male },
            age,
            married,
            address: address.map(|(street, number, city)| Address {
                street,
                number,
                city,
            }),
        })
}

proptest! {
    #[test]
    fn prop_diff_with_clone_is_empty(original in arb_person()) {
        let copy = clone_object(&original).unwrap();

        prop_assert!(diff(&original, &copy).unwrap().is_empty());
        prop_assert!(diff_recursive(&original, &copy).unwrap().is_empty());
    }

    #[test]
    fn prop_age_change_yields_single_entry(original in arb_person(), delta in 1i32..10) {
        let mut changed = original.clone();
        changed.age = original.age + delta;

        let changes = diff_map(&original, &changed).unwrap();

        prop_assert_eq!(changes.len(), 1);
        prop_assert!(changes.contains_key("age"));
    }

    #[test]
    fn prop_diff_is_symmetric_in_membership(a in arb_person(), b in arb_person()) {
        let names = |changes: Vec<beankit_core::ChangedAttribute>| -> Vec<String> {
            changes.into_iter().map(|c| c.attribute_name).collect()
        };

        let forward = names(diff(&a, &b).unwrap());
        let backward = names(diff(&b, &a).unwrap());

        prop_assert_eq!(forward, backward);
    }
}
