//! # pbdto Schema
//!
//! pb.go wire-schema parser and struct definitions.
//!
//! This crate provides:
//! - Struct extraction from protoc-generated Go source
//! - Struct and field definitions for the generator
//! - The per-run struct registry with visit tracking

pub mod error;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use parser::parse_pb_go;
pub use registry::{Registry, RegistryEntry, VisitState};
pub use types::{FieldDef, StructDef};
