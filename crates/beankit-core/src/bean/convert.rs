//! Conversions between field values and [`PropertyValue`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{BeanError, Result};
use crate::model::{PrimitiveKind, PropertyKind, PropertyValue};

/// Field type readable as a property value
pub trait IntoProperty {
    /// Declared kind, which decides default-value suppression during merge
    const KIND: PropertyKind;

    /// # Errors
    ///
    /// Only nested beans can fail, when their own describe fails.
    fn to_property(&self) -> Result<PropertyValue>;
}

/// Field type writable from a property value
pub trait FromProperty: Sized {
    /// # Errors
    ///
    /// `InvalidArgument` when the value has the wrong shape for the field.
    fn from_property(value: PropertyValue) -> Result<Self>;
}

/// Declared kind of a field, inferred from its value
pub fn kind_of<T: IntoProperty>(_field: &T) -> PropertyKind {
    T::KIND
}

/// Convert a value for a named property, attributing failures to it
///
/// # Errors
///
/// `PropertyAccess` naming the bean type and property.
pub fn convert_property<T: FromProperty>(
    type_name: &str,
    property: &str,
    value: PropertyValue,
) -> Result<T> {
    T::from_property(value)
        .map_err(|err| BeanError::property_access(type_name, property, err.to_string()))
}

fn mismatch(expected: &str, found: &PropertyValue) -> BeanError {
    BeanError::InvalidArgument {
        op: "from_property".to_string(),
        reason: format!("expected {}, found {}", expected, found.kind_name()),
    }
}

macro_rules! primitive_property {
    ($($ty:ty => $variant:ident, $kind:ident, $label:literal;)*) => {
        $(
            impl IntoProperty for $ty {
                const KIND: PropertyKind = PropertyKind::Primitive(PrimitiveKind::$kind);

                fn to_property(&self) -> Result<PropertyValue> {
                    Ok(PropertyValue::$variant(*self))
                }
            }

            impl FromProperty for $ty {
                fn from_property(value: PropertyValue) -> Result<Self> {
                    match value {
                        PropertyValue::$variant(v) => Ok(v),
                        other => Err(mismatch($label, &other)),
                    }
                }
            }
        )*
    };
}

primitive_property! {
    bool => Bool, Bool, "bool";
    char => Char, Char, "char";
    i8 => Byte, Byte, "byte";
    i16 => Short, Short, "short";
    i32 => Int, Int, "int";
    i64 => Long, Long, "long";
    f32 => Float, Float, "float";
    f64 => Double, Double, "double";
}

impl IntoProperty for String {
    const KIND: PropertyKind = PropertyKind::Reference;

    fn to_property(&self) -> Result<PropertyValue> {
        Ok(PropertyValue::Text(self.clone()))
    }
}

impl FromProperty for String {
    fn from_property(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::Text(text) => Ok(text),
            other => Err(mismatch("text", &other)),
        }
    }
}

impl<T: IntoProperty> IntoProperty for Option<T> {
    const KIND: PropertyKind = PropertyKind::Reference;

    fn to_property(&self) -> Result<PropertyValue> {
        match self {
            Some(value) => value.to_property(),
            None => Ok(PropertyValue::Null),
        }
    }
}

impl<T: FromProperty> FromProperty for Option<T> {
    fn from_property(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::Null => Ok(None),
            other => T::from_property(other).map(Some),
        }
    }
}

impl<T: IntoProperty> IntoProperty for Box<T> {
    const KIND: PropertyKind = T::KIND;

    fn to_property(&self) -> Result<PropertyValue> {
        (**self).to_property()
    }
}

impl<T: FromProperty> FromProperty for Box<T> {
    fn from_property(value: PropertyValue) -> Result<Self> {
        T::from_property(value).map(Box::new)
    }
}

impl<T: IntoProperty> IntoProperty for Rc<T> {
    const KIND: PropertyKind = T::KIND;

    fn to_property(&self) -> Result<PropertyValue> {
        (**self).to_property()
    }
}

impl<T: FromProperty> FromProperty for Rc<T> {
    fn from_property(value: PropertyValue) -> Result<Self> {
        T::from_property(value).map(Rc::new)
    }
}

impl<T: IntoProperty> IntoProperty for RefCell<T> {
    const KIND: PropertyKind = T::KIND;

    /// # Errors
    ///
    /// `PropertyAccess` while the cell is mutably borrowed.
    fn to_property(&self) -> Result<PropertyValue> {
        self.try_borrow()
            .map_err(|err| BeanError::property_access("RefCell", "value", err.to_string()))?
            .to_property()
    }
}

impl<T: FromProperty> FromProperty for RefCell<T> {
    fn from_property(value: PropertyValue) -> Result<Self> {
        T::from_property(value).map(RefCell::new)
    }
}

impl<T: IntoProperty> IntoProperty for Vec<T> {
    const KIND: PropertyKind = PropertyKind::Reference;

    fn to_property(&self) -> Result<PropertyValue> {
        self.iter()
            .map(IntoProperty::to_property)
            .collect::<Result<Vec<_>>>()
            .map(PropertyValue::List)
    }
}

impl<T: FromProperty> FromProperty for Vec<T> {
    fn from_property(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::List(items) => items.into_iter().map(T::from_property).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}
