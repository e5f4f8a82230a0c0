//! Difference Collector.
//!
//! Two variants with deliberately different failure policies:
//!
//! - [`diff`] / [`diff_map`] compare accessor properties one level deep and
//!   reject operands of different types with `TypeMismatch`.
//! - [`diff_recursive`] descends into nested objects, linking each entry to
//!   the entry that enclosed it. Type-mismatched operands, at the top or at
//!   any depth, end the descent silently and keep what was collected so far.

use std::collections::{BTreeMap, HashSet};

use super::compare::values_differ;
use super::describe::describe_unobserved;
use super::{ensure_same_type, observe};
use crate::bean::Describable;
use crate::errors::{BeanError, Result};
use crate::model::{ChangeTrail, ChangedAttribute, PropertyValue, Record};
use crate::quiet::QuietExt;

/// Options for the recursive diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Deepest nesting level to descend into; `Some(0)` compares only the
    /// top-level fields. `None` descends without limit.
    pub max_depth: Option<usize>,
}

impl DiffOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Collect the properties whose values differ, in description order.
///
/// # Errors
///
/// - `TypeMismatch` when the operands are of different types
/// - `Introspection` when either operand cannot be described
pub fn diff(
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<Vec<ChangedAttribute>> {
    observe("diff", source.type_name(), || collect_changes("diff", source, compare_to))
}

/// Same membership as [`diff`], keyed by attribute name.
///
/// # Errors
///
/// As [`diff`].
pub fn diff_map(
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<BTreeMap<String, ChangedAttribute>> {
    observe("diff_map", source.type_name(), || {
        Ok(collect_changes("diff_map", source, compare_to)?
            .into_iter()
            .map(|change| (change.attribute_name.clone(), change))
            .collect())
    })
}

/// [`diff`] returning an empty list, after logging, on any failure.
pub fn diff_quietly(
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Vec<ChangedAttribute> {
    diff(source, compare_to).quietly_or_default("diff_quietly")
}

fn collect_changes(
    op: &str,
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<Vec<ChangedAttribute>> {
    ensure_same_type(op, source.type_name(), compare_to.type_name())?;
    let source_bag = describe_unobserved(source)?;
    let compare_bag = describe_unobserved(compare_to)?;

    Ok(source_bag
        .iter()
        .filter(|(name, value)| values_differ(name, Some(*value), compare_bag.get(name)))
        .map(|(name, value)| {
            let changed = compare_bag.get(name).cloned().unwrap_or(PropertyValue::Null);
            ChangedAttribute::new(name, value.clone(), changed)
        })
        .collect())
}

/// Recursive diff with default options.
///
/// # Errors
///
/// `Introspection` when either top-level operand cannot be described.
pub fn diff_recursive(
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<ChangeTrail> {
    diff_recursive_with(&DiffOptions::default(), source, compare_to)
}

/// Recursive diff into a fresh trail.
///
/// # Errors
///
/// `Introspection` when either top-level operand cannot be described.
pub fn diff_recursive_with(
    options: &DiffOptions,
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<ChangeTrail> {
    let mut trail = ChangeTrail::new();
    diff_recursive_into(&mut trail, None, options, source, compare_to)?;
    Ok(trail)
}

/// Recursive diff appending to an existing trail under `parent`.
///
/// Entries for the top-level fields are linked to `parent`; deeper entries
/// are linked to the entry of the field that contains them.
///
/// # Errors
///
/// - `InvalidArgument` when `parent` is not an index into `trail`
/// - `Introspection` when either top-level operand cannot be described
pub fn diff_recursive_into(
    trail: &mut ChangeTrail,
    parent: Option<usize>,
    options: &DiffOptions,
    source: &dyn Describable,
    compare_to: &dyn Describable,
) -> Result<()> {
    observe("diff_recursive", source.type_name(), || {
        if let Some(parent) = parent.filter(|&p| p >= trail.len()) {
            return Err(BeanError::InvalidArgument {
                op: "diff_recursive".to_string(),
                reason: format!(
                    "parent index {} out of bounds for trail of {}",
                    parent,
                    trail.len()
                ),
            });
        }
        if source.type_name() != compare_to.type_name() {
            tracing::debug!(
                source_type = source.type_name(),
                compare_type = compare_to.type_name(),
                "type mismatch, nothing to descend into"
            );
            return Ok(());
        }
        let source_record = Record::new(source.type_name(), describe_unobserved(source)?)
            .with_identity(source.identity());
        let compare_record =
            Record::new(compare_to.type_name(), describe_unobserved(compare_to)?)
                .with_identity(compare_to.identity());

        let before = trail.len();
        let mut walker = Walker {
            trail: &mut *trail,
            max_depth: options.max_depth,
            visited: HashSet::new(),
        };
        walker.walk(parent, &source_record, &compare_record, 0);
        tracing::debug!(change_count = trail.len() - before, "recursive diff collected");
        Ok(())
    })
}

static NULL_VALUE: PropertyValue = PropertyValue::Null;

struct Walker<'a> {
    trail: &'a mut ChangeTrail,
    max_depth: Option<usize>,
    /// `(type name, source identity, compare identity)`
    visited: HashSet<(String, usize, usize)>,
}

impl Walker<'_> {
    fn walk(&mut self, parent: Option<usize>, source: &Record, compare_to: &Record, depth: usize) {
        if source.type_name != compare_to.type_name {
            return;
        }
        if let (Some(a), Some(b)) = (source.identity, compare_to.identity) {
            if !self.visited.insert((source.type_name.clone(), a, b)) {
                tracing::trace!(type_name = %source.type_name, "pair already visited");
                return;
            }
        }

        for (name, source_value) in source.properties.iter() {
            let compare_value = compare_to
                .properties
                .get(name)
                .unwrap_or(&NULL_VALUE);
            if !values_differ(name, Some(source_value), Some(compare_value)) {
                continue;
            }

            let index = self.trail.append(
                ChangedAttribute::new(name, source_value.clone(), compare_value.clone())
                    .with_parent(parent),
            );

            if let (PropertyValue::Object(inner_source), PropertyValue::Object(inner_compare)) =
                (source_value, compare_value)
            {
                if self.max_depth.map_or(true, |max| depth < max) {
                    self.walk(Some(index), inner_source, inner_compare, depth + 1);
                }
            }
        }
    }
}
