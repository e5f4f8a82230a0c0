use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::bag::PropertyBag;

/// The value of a single property
///
/// Primitive variants mirror the fixed-width scalar types a bean field can
/// hold. Everything else is a reference value: text, lists, and nested
/// objects captured as a [`Record`].
///
/// Floats compare by total order, so `NaN` equals itself and `-0.0` differs
/// from `0.0`, consistent with [`natural_cmp`](Self::natural_cmp).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Object(Record),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Short name of the variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Char(_) => "char",
            PropertyValue::Byte(_) => "byte",
            PropertyValue::Short(_) => "short",
            PropertyValue::Int(_) => "int",
            PropertyValue::Long(_) => "long",
            PropertyValue::Float(_) => "float",
            PropertyValue::Double(_) => "double",
            PropertyValue::Text(_) => "text",
            PropertyValue::List(_) => "list",
            PropertyValue::Object(_) => "object",
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            PropertyValue::Object(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this value is the zero value of the given kind.
    ///
    /// Reference kinds have no default value, so this is always false for them.
    /// Only positive zero is the default of a float kind.
    pub fn is_default_for(&self, kind: PropertyKind) -> bool {
        match kind {
            PropertyKind::Primitive(primitive) => *self == primitive.default_value(),
            PropertyKind::Reference => false,
        }
    }

    /// Natural ordering between two non-null values.
    ///
    /// Returns `None` when the values are of different variants or the
    /// variant has no ordering (nested objects, nulls).
    pub fn natural_cmp(&self, other: &PropertyValue) -> Option<Ordering> {
        use PropertyValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Char(a), Char(b)) => Some(a.cmp(b)),
            (Byte(a), Byte(b)) => Some(a.cmp(b)),
            (Short(a), Short(b)) => Some(a.cmp(b)),
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Long(a), Long(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => Some(a.total_cmp(b)),
            (Double(a), Double(b)) => Some(a.total_cmp(b)),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            (List(a), List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    match x.natural_cmp(y)? {
                        Ordering::Equal => continue,
                        unequal => return Some(unequal),
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => None,
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        use PropertyValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a.total_cmp(b).is_eq(),
            (Double(a), Double(b)) => a.total_cmp(b).is_eq(),
            (Text(a), Text(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// Fixed-width scalar kinds subject to default-value suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Bool,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// The zero value of this kind
    pub fn default_value(&self) -> PropertyValue {
        match self {
            PrimitiveKind::Bool => PropertyValue::Bool(false),
            PrimitiveKind::Char => PropertyValue::Char('\0'),
            PrimitiveKind::Byte => PropertyValue::Byte(0),
            PrimitiveKind::Short => PropertyValue::Short(0),
            PrimitiveKind::Int => PropertyValue::Int(0),
            PrimitiveKind::Long => PropertyValue::Long(0),
            PrimitiveKind::Float => PropertyValue::Float(0.0),
            PrimitiveKind::Double => PropertyValue::Double(0.0),
        }
    }
}

/// Declared kind of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Primitive(PrimitiveKind),
    Reference,
}

impl PropertyKind {
    pub fn is_primitive(&self) -> bool {
        matches!(self, PropertyKind::Primitive(_))
    }
}

/// Snapshot of a nested object: its type and its properties
///
/// `identity` optionally carries the address (or any other stable id) of the
/// live object the snapshot was taken from. It takes part in cycle detection
/// only; equality is structural and ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<usize>,
    pub properties: PropertyBag,
}

impl Record {
    pub fn new(type_name: impl Into<String>, properties: PropertyBag) -> Self {
        Self {
            type_name: type_name.into(),
            identity: None,
            properties,
        }
    }

    pub fn with_identity(mut self, identity: Option<usize>) -> Self {
        self.identity = identity;
        self
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.properties == other.properties
    }
}
