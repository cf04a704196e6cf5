//! Error types for DTO generation.

use thiserror::Error;

/// A field type string whose collection syntax cannot be read.
#[derive(Debug, Error)]
#[error("malformed type '{raw_type}': no matching closing bracket")]
pub struct MalformedType {
    /// The offending type text.
    pub raw_type: String,
}

/// Error type for DTO generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Wire-schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] pbdto_schema::ParseError),

    /// Schema-level error (duplicate definitions).
    #[error("schema error: {0}")]
    Schema(#[from] pbdto_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field's type string could not be classified.
    #[error("field '{field}': {source}")]
    FieldShape {
        /// Qualified field name, `Struct.Field`.
        field: String,
        /// Underlying shape error.
        source: MalformedType,
    },

    /// The walk re-entered a struct that is still being generated.
    #[error("circular struct reference: {path}")]
    CircularReference {
        /// The cycle, rendered as `A -> B -> A`.
        path: String,
    },

    /// An explicitly requested root struct is absent from the schema.
    #[error("struct '{name}' not found in pb.go source")]
    RootNotFound {
        /// Requested struct name.
        name: String,
    },
}

impl CodegenError {
    /// Creates a field shape error for the given struct field.
    pub fn field_shape(
        struct_name: &str,
        field_name: &str,
        source: MalformedType,
    ) -> Self {
        Self::FieldShape {
            field: format!("{struct_name}.{field_name}"),
            source,
        }
    }
}
