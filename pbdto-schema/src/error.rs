//! Error types for wire-schema parsing and registry construction.

use thiserror::Error;

/// Error type for pb.go parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A struct block was opened but never closed.
    #[error("unterminated struct '{name}': reached end of input before closing brace")]
    UnterminatedStruct {
        /// Struct name.
        name: String,
    },

    /// A line inside a struct block could not be read as a field.
    #[error("malformed field line in struct '{struct_name}': '{line}'")]
    MalformedField {
        /// Enclosing struct name.
        struct_name: String,
        /// Offending source line.
        line: String,
    },

    /// The source contained no Go source at all.
    #[error("invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
    },
}

/// Error type for schema-level validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The same struct name was defined twice in the source schema.
    #[error("duplicate struct definition: '{name}'")]
    DuplicateStruct {
        /// Name of the duplicate.
        name: String,
    },
}

impl ParseError {
    /// Creates a malformed field error.
    pub fn malformed_field(struct_name: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedField {
            struct_name: struct_name.into(),
            line: line.into(),
        }
    }
}
