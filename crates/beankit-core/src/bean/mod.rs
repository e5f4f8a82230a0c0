//! Capability traits through which the toolkit sees an object.
//!
//! A type opts into introspection by implementing [`Describable`]; into merge
//! and property copy by implementing [`Bean`]; into cloning by implementing
//! [`Replicate`]. For plain structs the [`impl_bean!`](crate::impl_bean) and
//! [`impl_replicate!`](crate::impl_replicate) macros generate all three.

pub mod convert;
pub mod macros;

use std::cell::RefCell;
use std::collections::HashSet;

use crate::errors::{BeanError, Result};
use crate::model::{PropertyBag, PropertyKind, PropertyValue, Record};

pub use convert::{convert_property, kind_of, FromProperty, IntoProperty};

/// Name of the synthetic type-identifier property dropped by the describer
pub const SYNTHETIC_TYPE_PROPERTY: &str = "class";

/// Read access to an object's properties
pub trait Describable {
    /// Runtime type name; two objects are of the same type iff these match
    fn type_name(&self) -> &str;

    /// Current property values in a stable, deterministic order.
    ///
    /// # Errors
    ///
    /// Any error an accessor raises while reading a value.
    fn describe_properties(&self) -> Result<PropertyBag>;

    /// Identity of the live object, used to detect cycles.
    ///
    /// Defaults to the object's address. Two distinct objects of the same
    /// type alive at the same time must never report the same identity;
    /// `None` opts out of cycle detection.
    fn identity(&self) -> Option<usize> {
        Some(self as *const Self as *const () as usize)
    }
}

/// Static description of one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: PropertyKind,
    pub readable: bool,
    pub writable: bool,
}

impl PropertyDescriptor {
    pub fn read_write(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            readable: true,
            writable: true,
        }
    }

    pub fn read_only(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            writable: false,
            ..Self::read_write(name, kind)
        }
    }

    /// Whether merge and copy may transfer this property
    pub fn is_transferable(&self) -> bool {
        self.readable && self.writable
    }
}

/// Read and write access to an object's properties
pub trait Bean: Describable {
    fn property_descriptors(&self) -> Vec<PropertyDescriptor>;

    /// Write one property.
    ///
    /// # Errors
    ///
    /// `UnknownProperty` for names the bean does not have, `PropertyAccess`
    /// when the value is rejected.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()>;
}

/// Clone strategies a type supports
///
/// Every method defaults to "unsupported". `None` means the strategy is not
/// available and the cloner moves on without recording a failure.
pub trait Replicate: Sized {
    /// Serialize into an in-memory buffer and read a fresh instance back
    fn serial_round_trip(&self) -> Option<Result<Self>> {
        None
    }

    /// Type-provided copy
    fn native_clone(&self) -> Option<Self> {
        None
    }

    /// Construct a blank instance for property-by-property copy
    fn instantiate() -> Option<Result<Self>> {
        None
    }
}

/// Drop the synthetic type-identifier entry from a freshly described bag
pub(crate) fn strip_synthetic(mut bag: PropertyBag) -> PropertyBag {
    bag.remove(SYNTHETIC_TYPE_PROPERTY);
    bag
}

thread_local! {
    /// `(type name, identity)` of every object whose description is in
    /// progress on this thread
    static DESCRIBING: RefCell<HashSet<(String, usize)>> = RefCell::new(HashSet::new());
}

/// Marks one object as being described until dropped
pub(crate) struct DescribeGuard {
    key: Option<(String, usize)>,
}

impl DescribeGuard {
    /// `None` when the object is already being described further up the
    /// stack, i.e. the object graph has looped back onto it. Objects without
    /// an identity are never tracked.
    pub(crate) fn enter<T: Describable + ?Sized>(bean: &T) -> Option<Self> {
        let Some(identity) = bean.identity() else {
            return Some(Self { key: None });
        };
        let key = (bean.type_name().to_string(), identity);
        let fresh = DESCRIBING.with(|describing| describing.borrow_mut().insert(key.clone()));
        fresh.then(|| Self { key: Some(key) })
    }
}

impl Drop for DescribeGuard {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            let _ = DESCRIBING.try_with(|describing| describing.borrow_mut().remove(&key));
        }
    }
}

/// Snapshot a describable object as a nested record value
///
/// An object reached again while its own description is still in progress
/// is emitted as a back-reference: a record carrying only its type name and
/// identity, with no properties.
///
/// # Errors
///
/// Propagates the object's describe failure.
pub fn record_of<T: Describable + ?Sized>(bean: &T) -> Result<PropertyValue> {
    let record = match DescribeGuard::enter(bean) {
        Some(_guard) => Record::new(
            bean.type_name(),
            strip_synthetic(bean.describe_properties()?),
        ),
        None => Record::new(bean.type_name(), PropertyBag::new()),
    };
    Ok(PropertyValue::Object(record.with_identity(bean.identity())))
}

/// Rebuild a bean from a nested record value
///
/// # Errors
///
/// `InvalidArgument` when the value is not a record of the bean's type, plus
/// any error raised by the bean's setters.
pub fn bean_from_record<T: Bean + Default>(value: PropertyValue) -> Result<T> {
    let mut bean = T::default();
    let record = match value {
        PropertyValue::Object(record) => record,
        other => {
            return Err(BeanError::InvalidArgument {
                op: "bean_from_record".to_string(),
                reason: format!(
                    "expected {} object, found {}",
                    bean.type_name(),
                    other.kind_name()
                ),
            })
        }
    };
    if record.type_name != bean.type_name() {
        return Err(BeanError::TypeMismatch {
            op: "bean_from_record".to_string(),
            source_type: record.type_name,
            compare_type: bean.type_name().to_string(),
        });
    }
    for (name, value) in record.properties {
        bean.set_property(&name, value)?;
    }
    Ok(bean)
}
