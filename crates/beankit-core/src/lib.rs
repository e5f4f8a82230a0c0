//! beankit core - bean introspection and comparison toolkit
//!
//! This crate provides:
//! - Capability traits (`Describable`, `Bean`, `Replicate`) and macros that
//!   implement them for plain structs
//! - Property description and natural-order property comparison
//! - Flat and recursive difference collection
//! - Merging of non-default property values
//! - Cloning through serialization, native clone or property copy
//! - Strict (`Result`) entry points with quiet, logging counterparts
//! - Structured error and logging facilities

pub mod bean;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod quiet;

pub use beankit_core_types as core_types;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use bean::{Bean, Describable, PropertyDescriptor, Replicate};
pub use errors::{BeanError, ExError, ExErrorKind, Result};
pub use model::{ChangeTrail, ChangedAttribute, PropertyBag, PropertyValue, Record};
pub use ops::clone::{clone_object, clone_object_quietly};
pub use ops::compare::{compare_all, compare_property, equal_properties};
pub use ops::describe::describe;
pub use ops::diff::{diff, diff_map, diff_quietly, diff_recursive, DiffOptions};
pub use ops::merge::{copy_properties, merge, merge_property, merge_quietly};
pub use quiet::QuietExt;
