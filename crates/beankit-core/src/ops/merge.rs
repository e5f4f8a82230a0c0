//! Property Merger and property copy.

use super::describe::describe_unobserved;
use super::{ensure_same_type, observe};
use crate::bean::{Bean, Describable, PropertyDescriptor};
use crate::errors::{BeanError, Result};
use crate::model::PropertyValue;
use crate::quiet::QuietExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    /// Skip nulls and primitive zero values
    NonDefault,
    Unconditional,
}

impl Transfer {
    fn admits(&self, descriptor: &PropertyDescriptor, value: &PropertyValue) -> bool {
        match self {
            Transfer::NonDefault => !value.is_null() && !value.is_default_for(descriptor.kind),
            Transfer::Unconditional => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum OnSetFailure {
    Propagate,
    /// Log under the given op and continue with the next property
    Skip(&'static str),
}

/// Copy every non-default value of `with` onto `to`.
///
/// Only properties that are both readable and writable on `to` are
/// considered. Nulls are never copied, and neither is the zero value of a
/// primitive property (false, '\0', 0, 0.0). `with` is left untouched.
///
/// # Errors
///
/// - `TypeMismatch` when the operands are of different types
/// - `Introspection` when `with` cannot be described
/// - `PropertyAccess` / `UnknownProperty` from the first failing setter
pub fn merge(to: &mut dyn Bean, with: &dyn Describable) -> Result<()> {
    let type_name = to.type_name().to_string();
    observe("merge", &type_name, || {
        ensure_same_type("merge", &type_name, with.type_name())?;
        transfer(to, with, Transfer::NonDefault, OnSetFailure::Propagate).map(|_| ())
    })
}

/// [`merge`] that logs setter failures and carries on with the remaining
/// properties; precondition failures are logged and nothing is written.
pub fn merge_quietly(to: &mut dyn Bean, with: &dyn Describable) {
    let type_name = to.type_name().to_string();
    observe("merge_quietly", &type_name, || {
        ensure_same_type("merge_quietly", &type_name, with.type_name())?;
        transfer(to, with, Transfer::NonDefault, OnSetFailure::Skip("merge_quietly"))
    })
    .quietly("merge_quietly");
}

/// Merge the single property `name` under the same rules as [`merge`].
///
/// Returns whether the value was written.
///
/// # Errors
///
/// As [`merge`], plus `UnknownProperty` when `to` has no such property.
pub fn merge_property(to: &mut dyn Bean, with: &dyn Describable, name: &str) -> Result<bool> {
    let type_name = to.type_name().to_string();
    observe("merge_property", &type_name, || {
        ensure_same_type("merge_property", &type_name, with.type_name())?;
        let descriptor = to
            .property_descriptors()
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| BeanError::UnknownProperty {
                type_name: type_name.clone(),
                property: name.to_string(),
            })?;
        if !descriptor.is_transferable() {
            return Ok(false);
        }
        let bag = describe_unobserved(with)?;
        match bag.get(name) {
            Some(value) if Transfer::NonDefault.admits(&descriptor, value) => {
                to.set_property(name, value.clone())?;
                Ok(true)
            }
            _ => Ok(false),
        }
    })
}

/// Copy every readable and writable property of `from` onto `to`,
/// nulls and zero values included.
///
/// Returns the number of properties written.
///
/// # Errors
///
/// `Introspection` when `from` cannot be described, or the first failing
/// setter's error.
pub fn copy_properties(to: &mut dyn Bean, from: &dyn Describable) -> Result<usize> {
    let type_name = to.type_name().to_string();
    observe("copy_properties", &type_name, || {
        transfer(to, from, Transfer::Unconditional, OnSetFailure::Propagate)
    })
}

/// [`copy_properties`] that logs setter failures and continues.
///
/// Returns the number of properties written.
pub fn copy_properties_quietly(to: &mut dyn Bean, from: &dyn Describable) -> usize {
    let type_name = to.type_name().to_string();
    observe("copy_properties_quietly", &type_name, || {
        transfer(
            to,
            from,
            Transfer::Unconditional,
            OnSetFailure::Skip("copy_properties_quietly"),
        )
    })
    .quietly_or_default("copy_properties_quietly")
}

pub(crate) fn copy_unobserved(to: &mut dyn Bean, from: &dyn Describable) -> Result<usize> {
    transfer(to, from, Transfer::Unconditional, OnSetFailure::Propagate)
}

fn transfer(
    to: &mut dyn Bean,
    from: &dyn Describable,
    mode: Transfer,
    on_failure: OnSetFailure,
) -> Result<usize> {
    let bag = describe_unobserved(from)?;
    let mut written = 0;

    for descriptor in to
        .property_descriptors()
        .into_iter()
        .filter(PropertyDescriptor::is_transferable)
    {
        let Some(value) = bag.get(&descriptor.name) else {
            continue;
        };
        if !mode.admits(&descriptor, value) {
            continue;
        }
        match to.set_property(&descriptor.name, value.clone()) {
            Ok(()) => written += 1,
            Err(err) => match on_failure {
                OnSetFailure::Propagate => return Err(err),
                OnSetFailure::Skip(op) => {
                    crate::log_op_suppressed!(op, err, property = descriptor.name.as_str());
                }
            },
        }
    }
    Ok(written)
}
