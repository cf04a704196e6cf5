//! Recursive DTO generation.
//!
//! The generator performs a post-order, depth-first walk over the struct
//! registry: for each root it visits every struct-typed field reference
//! before emitting the struct itself, so every conversion function is
//! defined before the functions that call it. Each struct is emitted
//! exactly once no matter how many fields reference it.

use crate::classify::{TypeShape, classify};
use crate::error::CodegenError;
use crate::go;
use pbdto_schema::{FieldDef, Registry, VisitState};
use std::collections::HashSet;
use tracing::{debug, info};

/// Wire-format bookkeeping fields skipped during DTO generation.
///
/// These are the protoc-go internals present on every message struct. The
/// set is a default; the generator accepts an override at construction.
pub const PB_NATIVE_FIELDS: [&str; 3] = ["state", "sizeCache", "unknownFields"];

/// Returns the default exclusion set as an owned collection.
#[must_use]
pub fn default_excluded_fields() -> HashSet<String> {
    PB_NATIVE_FIELDS.iter().map(|s| (*s).to_string()).collect()
}

/// Registry-resolved shape of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Plain copy; scalars and any collection whose element is not a
    /// registered struct.
    Scalar,
    /// A single reference to a registered struct.
    StructRef(String),
    /// A slice of registered structs.
    Sequence(String),
    /// A map of registered structs under a scalar key.
    Associative {
        /// Key type text.
        key: String,
        /// Referenced struct name.
        elem: String,
    },
}

impl FieldShape {
    /// The referenced struct name, if any.
    #[must_use]
    pub fn struct_ref(&self) -> Option<&str> {
        match self {
            Self::Scalar => None,
            Self::StructRef(name) | Self::Sequence(name) => Some(name),
            Self::Associative { elem, .. } => Some(elem),
        }
    }
}

/// A DTO field ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoField {
    /// Field name, as in the wire struct.
    pub name: String,
    /// Go type text, verbatim from the wire schema.
    pub go_type: String,
    /// Serialization tag, the lower-camel transform of the field name.
    pub json_tag: String,
}

/// The output contract per struct: one DTO definition and one conversion
/// function per direction, emitted in dependency order.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// DTO type name (same as the wire struct name).
    pub type_name: String,
    /// Retained fields in source order.
    pub fields: Vec<DtoField>,
    /// `<Name>FromPB` function source.
    pub from_pb: String,
    /// `<Name>ToPB` function source.
    pub to_pb: String,
}

/// Selects the root structs for a run.
///
/// With an explicit target, only that struct is a root; otherwise every
/// struct whose name ends in `Request` or `Response` qualifies, in source
/// order. An empty result is not an error.
///
/// # Errors
/// Returns `CodegenError::RootNotFound` if an explicitly requested struct
/// is absent from the schema.
pub fn select_roots(
    registry: &Registry,
    target: Option<&str>,
) -> Result<Vec<String>, CodegenError> {
    if let Some(name) = target {
        if !registry.contains(name) {
            return Err(CodegenError::RootNotFound {
                name: name.to_string(),
            });
        }
        info!(struct_name = name, "generating dto for explicit target struct");
        return Ok(vec![name.to_string()]);
    }

    let roots: Vec<String> = registry
        .iter()
        .filter(|entry| {
            let qualifies =
                entry.def.name.ends_with("Request") || entry.def.name.ends_with("Response");
            if !qualifies {
                debug!(name = %entry.def.name, "skipping struct, not a *Request/*Response root");
            }
            qualifies
        })
        .map(|entry| entry.def.name.clone())
        .collect();

    Ok(roots)
}

/// The recursive DTO generator for one run.
pub struct Generator {
    registry: Registry,
    excluded: HashSet<String>,
}

impl Generator {
    /// Creates a generator over a freshly built registry.
    ///
    /// `excluded` is the set of field names left out of DTO generation and
    /// both conversion functions; pass [`default_excluded_fields`] outside
    /// of tests.
    #[must_use]
    pub fn new(registry: Registry, excluded: HashSet<String>) -> Self {
        Self { registry, excluded }
    }

    /// Generates units for every root, dependencies first.
    ///
    /// The returned sequence is a topological order: for every struct-typed
    /// field the referenced unit appears strictly before the referent.
    ///
    /// # Errors
    /// Fails on malformed field types and on circular struct references;
    /// no partial output is returned.
    pub fn generate_all(&mut self, roots: &[String]) -> Result<Vec<GeneratedUnit>, CodegenError> {
        let mut units = Vec::new();
        let mut stack = Vec::new();

        for root in roots {
            self.visit(root, &mut stack, &mut units)?;
        }

        Ok(units)
    }

    /// Post-order visit of one struct.
    ///
    /// Idempotent: a struct already `Done` returns immediately, so a second
    /// visit never produces a second unit. A struct found `InProgress` is a
    /// reference cycle and fails the run.
    fn visit(
        &mut self,
        name: &str,
        stack: &mut Vec<String>,
        units: &mut Vec<GeneratedUnit>,
    ) -> Result<(), CodegenError> {
        match self.registry.state(name) {
            Some(VisitState::Done) => {
                debug!(name, "skipping struct, already generated");
                return Ok(());
            }
            Some(VisitState::InProgress) => {
                let mut path = stack.clone();
                path.push(name.to_string());
                return Err(CodegenError::CircularReference {
                    path: path.join(" -> "),
                });
            }
            Some(VisitState::Unvisited) => {}
            // Only registry-resolved names reach here.
            None => return Ok(()),
        }

        let def = match self.registry.get(name) {
            Some(entry) => entry.def.clone(),
            None => return Ok(()),
        };

        info!(name, "generating dto");
        self.registry.mark_in_progress(name);
        stack.push(name.to_string());

        let mut bound: Vec<(FieldDef, FieldShape)> = Vec::with_capacity(def.fields.len());
        for field in &def.fields {
            if self.excluded.contains(&field.name) {
                debug!(field = %field.name, "skipping wire-format bookkeeping field");
                continue;
            }

            let shape = classify(&field.raw_type)
                .map_err(|source| CodegenError::field_shape(name, &field.name, source))?;
            let resolved = self.resolve(shape);

            if let Some(ref_name) = resolved.struct_ref() {
                let ref_name = ref_name.to_string();
                self.visit(&ref_name, stack, units)?;
            }

            bound.push((field.clone(), resolved));
        }

        let fields: Vec<DtoField> = bound
            .iter()
            .map(|(field, _)| DtoField {
                name: field.name.clone(),
                go_type: field.raw_type.clone(),
                json_tag: go::to_lower_camel(&field.name),
            })
            .collect();

        units.push(GeneratedUnit {
            type_name: def.name.clone(),
            fields,
            from_pb: go::bindings::from_pb(&def.name, &bound),
            to_pb: go::bindings::to_pb(&def.name, &bound),
        });

        stack.pop();
        self.registry.mark_done(name);
        Ok(())
    }

    /// Resolves struct-ness of a classified shape against the registry.
    fn resolve(&self, shape: TypeShape) -> FieldShape {
        match shape {
            TypeShape::Single { elem } if self.registry.contains(&elem) => {
                FieldShape::StructRef(elem)
            }
            TypeShape::Sequence { elem } if self.registry.contains(&elem) => {
                FieldShape::Sequence(elem)
            }
            TypeShape::Associative { key, elem } if self.registry.contains(&elem) => {
                FieldShape::Associative { key, elem }
            }
            _ => FieldShape::Scalar,
        }
    }
}
