use serde::{Deserialize, Serialize};

use super::value::PropertyValue;
use crate::errors::{BeanError, Result};

/// One detected difference between two objects' same-named property
///
/// `parent` is the index of the enclosing difference inside the
/// [`ChangeTrail`] that owns this entry; it is always `None` for entries
/// produced by the flat diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedAttribute {
    pub attribute_name: String,
    pub source_attribute: PropertyValue,
    pub changed_attribute: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
}

impl ChangedAttribute {
    pub fn new(
        attribute_name: impl Into<String>,
        source_attribute: PropertyValue,
        changed_attribute: PropertyValue,
    ) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            source_attribute,
            changed_attribute,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<usize>) -> Self {
        self.parent = parent;
        self
    }
}

/// Differences collected by a recursive diff
///
/// Owns every entry; parent links are indices into this trail, so an entry
/// can only point at an entry pushed before it. Deserialization enforces the
/// same rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChangedAttribute>", into = "Vec<ChangedAttribute>")]
pub struct ChangeTrail {
    entries: Vec<ChangedAttribute>,
}

impl ChangeTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its index
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the entry's parent does not refer to an existing
    /// entry. The trail is left unchanged.
    pub fn push(&mut self, entry: ChangedAttribute) -> Result<usize> {
        check_parent("push", self.entries.len(), &entry)?;
        Ok(self.append(entry))
    }

    /// Append an entry whose parent the caller has already checked
    pub(crate) fn append(&mut self, entry: ChangedAttribute) -> usize {
        debug_assert!(entry.parent.map_or(true, |parent| parent < self.entries.len()));
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ChangedAttribute> {
        self.entries.get(index)
    }

    pub fn parent_of(&self, index: usize) -> Option<&ChangedAttribute> {
        self.get(index)
            .and_then(|entry| entry.parent)
            .and_then(|parent| self.get(parent))
    }

    /// Attribute names from the outermost ancestor down to the entry itself
    pub fn path(&self, index: usize) -> Vec<&str> {
        let mut path = Vec::new();
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            match self.entries.get(current) {
                Some(entry) => {
                    path.push(entry.attribute_name.as_str());
                    cursor = entry.parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Index of the first entry whose dotted path equals `dotted`
    pub fn find_path(&self, dotted: &str) -> Option<usize> {
        (0..self.entries.len()).find(|&index| self.path(index).join(".") == dotted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangedAttribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<ChangedAttribute> {
        self.entries
    }
}

fn check_parent(op: &str, index: usize, entry: &ChangedAttribute) -> Result<()> {
    match entry.parent {
        Some(parent) if parent >= index => Err(BeanError::InvalidArgument {
            op: op.to_string(),
            reason: format!(
                "entry {} ({}) has parent {}, which does not precede it",
                index, entry.attribute_name, parent
            ),
        }),
        _ => Ok(()),
    }
}

impl TryFrom<Vec<ChangedAttribute>> for ChangeTrail {
    type Error = BeanError;

    fn try_from(entries: Vec<ChangedAttribute>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            check_parent("deserialize", index, entry)?;
        }
        Ok(Self { entries })
    }
}

impl From<ChangeTrail> for Vec<ChangedAttribute> {
    fn from(trail: ChangeTrail) -> Self {
        trail.entries
    }
}
