//! Field schema: the declared shape of an off-chain record.
//!
//! Callers describe a record as a mixed list of plain names and
//! descriptors ([`FieldSpec`]); construction normalizes it once into
//! [`FieldDescriptor`]s. Order is kept for documentation purposes only —
//! resolution semantics do not depend on it.

use std::collections::HashSet;

use crate::error::{PointerError, PointerResult};

/// Public construction surface for one declared field.
///
/// A plain name declares a terminal field. A descriptor may flag the field
/// as recursive — its resolved value is a URI wrapped in a nested pointer —
/// and carry the child record's own field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// A terminal field named by a plain string.
    Name(String),
    /// A full descriptor.
    Descriptor {
        name: String,
        recursive: bool,
        fields: Vec<FieldSpec>,
    },
}

impl FieldSpec {
    /// A terminal field.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// A recursive field whose value resolves to a nested pointer with the
    /// given child schema.
    pub fn pointer(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self::Descriptor {
            name: name.into(),
            recursive: true,
            fields,
        }
    }

    /// The declared field name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Descriptor { name, .. } => name,
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Normalized field schema, built once at pointer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, matched verbatim against payload keys.
    pub name: String,
    /// Whether the field's value is a URI resolving to a nested pointer.
    pub recursive: bool,
    /// Child schema used when `recursive` is set. May be empty.
    pub sub_fields: Vec<FieldDescriptor>,
}

/// Normalize a mixed spec list, enforcing case-insensitive name uniqueness
/// within each field list at every nesting level.
pub(crate) fn normalize(specs: Vec<FieldSpec>) -> PointerResult<Vec<FieldDescriptor>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(specs.len());
    let mut descriptors = Vec::with_capacity(specs.len());
    for spec in specs {
        let descriptor = match spec {
            FieldSpec::Name(name) => FieldDescriptor {
                name,
                recursive: false,
                sub_fields: Vec::new(),
            },
            FieldSpec::Descriptor {
                name,
                recursive,
                fields,
            } => FieldDescriptor {
                name,
                recursive,
                sub_fields: normalize(fields)?,
            },
        };
        if !seen.insert(descriptor.name.to_lowercase()) {
            return Err(PointerError::FieldNameConflict {
                name: descriptor.name,
            });
        }
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}
