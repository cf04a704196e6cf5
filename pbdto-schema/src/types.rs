//! Wire-schema struct definitions.
//!
//! This module contains the data structures representing the struct
//! definitions extracted from a protoc-generated pb.go file.

/// A named struct definition from the wire schema.
///
/// Immutable once parsed; the source of truth is the pb.go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Struct name as written in the source.
    pub name: String,
    /// Fields in source order.
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    /// Creates a new struct definition with no fields.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the struct.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Returns true if the struct has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A field within a struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Type text exactly as written in the schema, e.g. `[]*Item`.
    pub raw_type: String,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}
