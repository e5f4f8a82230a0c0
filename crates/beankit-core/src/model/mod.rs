pub mod bag;
pub mod changed;
pub mod value;

pub use bag::PropertyBag;
pub use changed::{ChangeTrail, ChangedAttribute};
pub use value::{PrimitiveKind, PropertyKind, PropertyValue, Record};
