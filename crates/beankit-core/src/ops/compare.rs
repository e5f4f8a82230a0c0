//! Property Comparator.
//!
//! Null handling is asymmetric and fixed: a missing value and an explicit
//! null are the same thing, two nulls are equal, and any non-null value ranks
//! above null.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::describe::describe_unobserved;
use super::observe;
use crate::bean::Describable;
use crate::errors::{BeanError, Result};
use crate::model::PropertyValue;

/// Compare the property `name` of `a` and `b` by natural ordering.
///
/// `Greater` corresponds to 1, `Equal` to 0 and `Less` to -1.
///
/// # Errors
///
/// `Comparison` when both values are non-null and have no natural ordering;
/// `Introspection` when either object cannot be described.
pub fn compare_property(
    a: &dyn Describable,
    b: &dyn Describable,
    name: &str,
) -> Result<Ordering> {
    observe("compare_property", a.type_name(), || {
        let a_bag = describe_unobserved(a)?;
        let b_bag = describe_unobserved(b)?;
        compare_values(name, a_bag.get(name), b_bag.get(name))
    })
}

/// Apply [`compare_property`] to every property of `a`.
///
/// # Errors
///
/// The first `Comparison` or `Introspection` failure.
pub fn compare_all(
    a: &dyn Describable,
    b: &dyn Describable,
) -> Result<BTreeMap<String, Ordering>> {
    observe("compare_all", a.type_name(), || {
        let a_bag = describe_unobserved(a)?;
        let b_bag = describe_unobserved(b)?;
        a_bag
            .iter()
            .map(|(name, value)| {
                compare_values(name, Some(value), b_bag.get(name))
                    .map(|ordering| (name.to_string(), ordering))
            })
            .collect()
    })
}

/// Whether every property of `a` equals the same property of `b`.
///
/// Values without a natural ordering are compared structurally. Objects of
/// different types are never equal.
///
/// # Errors
///
/// `Introspection` when either object cannot be described.
pub fn equal_properties(a: &dyn Describable, b: &dyn Describable) -> Result<bool> {
    observe("equal_properties", a.type_name(), || {
        if a.type_name() != b.type_name() {
            return Ok(false);
        }
        let a_bag = describe_unobserved(a)?;
        let b_bag = describe_unobserved(b)?;
        let equal = a_bag
            .iter()
            .all(|(name, value)| !values_differ(name, Some(value), b_bag.get(name)));
        Ok(equal)
    })
}

pub(crate) fn compare_values(
    name: &str,
    a: Option<&PropertyValue>,
    b: Option<&PropertyValue>,
) -> Result<Ordering> {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ok(Ordering::Equal),
        (Some(_), None) => Ok(Ordering::Greater),
        (None, Some(_)) => Ok(Ordering::Less),
        (Some(a), Some(b)) => a.natural_cmp(b).ok_or_else(|| BeanError::Comparison {
            property: name.to_string(),
            reason: format!(
                "{} and {} values have no natural ordering",
                a.kind_name(),
                b.kind_name()
            ),
        }),
    }
}

/// Ordering-based inequality, falling back to structural inequality for
/// values that cannot be ordered.
pub(crate) fn values_differ(
    name: &str,
    a: Option<&PropertyValue>,
    b: Option<&PropertyValue>,
) -> bool {
    match compare_values(name, a, b) {
        Ok(ordering) => ordering != Ordering::Equal,
        Err(_) => a != b,
    }
}
