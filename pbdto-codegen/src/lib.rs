//! # pbdto Codegen
//!
//! DTO and gRPC binding generation from protoc-generated pb.go files.
//!
//! This crate provides:
//! - Field type classification
//! - The recursive, duplicate-safe DTO generator
//! - Conversion function synthesis for both directions
//! - Assembly of the final dto file text
//!
//! For every generated struct the output contains a DTO type with identical
//! fields (wire-format bookkeeping fields excluded) and a `FromPB`/`ToPB`
//! function pair. Referenced structs are generated before their referents,
//! each exactly once.

pub mod classify;
pub mod error;
pub mod generator;
pub mod go;

pub use classify::{TypeShape, classify};
pub use error::{CodegenError, MalformedType};
pub use generator::{
    DtoField, FieldShape, GeneratedUnit, Generator, PB_NATIVE_FIELDS, default_excluded_fields,
    select_roots,
};

use pbdto_schema::Registry;
use std::collections::HashSet;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Package name of the emitted dto file.
    pub package_name: String,
    /// Import path of the wire package, emitted under the `pb` alias.
    pub pb_import_path: String,
    /// When set, the only root; otherwise `*Request`/`*Response` structs.
    pub target_struct: Option<String>,
    /// Field names excluded from DTO generation and both conversions.
    pub excluded_fields: HashSet<String>,
}

impl GenerateConfig {
    /// Creates a config with the default exclusion set.
    #[must_use]
    pub fn new(package_name: impl Into<String>, pb_import_path: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            pb_import_path: pb_import_path.into(),
            target_struct: None,
            excluded_fields: default_excluded_fields(),
        }
    }

    /// Sets an explicit target struct.
    #[must_use]
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target_struct = target;
        self
    }
}

/// Generates the dto file text from pb.go source.
///
/// # Arguments
/// * `src` - pb.go file content
/// * `config` - generation configuration
///
/// # Returns
/// The complete dto file text, ready to be written.
///
/// # Errors
/// Returns `CodegenError` if parsing, root selection, or generation fails.
/// There is no partial output: the full text is produced or nothing is.
pub fn generate_from_source(src: &str, config: &GenerateConfig) -> Result<String, CodegenError> {
    let structs = pbdto_schema::parse_pb_go(src)?;
    let registry = Registry::from_structs(structs)?;
    let roots = select_roots(&registry, config.target_struct.as_deref())?;

    let mut generator = Generator::new(registry, config.excluded_fields.clone());
    let units = generator.generate_all(&roots)?;

    Ok(go::assembly::render(&units, config))
}

/// Generates the dto file text from a pb.go file on disk.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GenerateConfig,
) -> Result<String, CodegenError> {
    let src = std::fs::read_to_string(path)?;
    generate_from_source(&src, config)
}
