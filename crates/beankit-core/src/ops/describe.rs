//! Property Describer.

use super::observe;
use crate::bean::{strip_synthetic, Describable, DescribeGuard};
use crate::errors::{BeanError, Result};
use crate::model::PropertyBag;

/// Describe an object as an ordered bag of property values.
///
/// The synthetic `"class"` entry is never part of the result.
///
/// # Errors
///
/// `Introspection` when the object's properties cannot be read.
pub fn describe(bean: &dyn Describable) -> Result<PropertyBag> {
    observe("describe", bean.type_name(), || describe_unobserved(bean))
}

pub(crate) fn describe_unobserved(bean: &dyn Describable) -> Result<PropertyBag> {
    let _guard = DescribeGuard::enter(bean);
    bean.describe_properties()
        .map(strip_synthetic)
        .map_err(|err| match err {
            BeanError::Introspection { .. } => err,
            other => BeanError::Introspection {
                type_name: bean.type_name().to_string(),
                reason: other.to_string(),
            },
        })
}
