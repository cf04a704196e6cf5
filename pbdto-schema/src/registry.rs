//! Per-run struct registry.
//!
//! The registry catalogues every struct definition discovered in the wire
//! schema, tagged with its traversal state. It is rebuilt fresh for each
//! generation run and is never shared between runs.

use crate::error::SchemaError;
use crate::types::StructDef;
use std::collections::HashMap;

/// Traversal state of a registered struct.
///
/// A struct moves `Unvisited -> InProgress -> Done`, each transition exactly
/// once. `InProgress` is entered when the walk starts on the struct, so a
/// reference back into an in-progress struct identifies a cycle. `Done` is
/// entered only after the DTO type and both conversion functions have been
/// fully emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not yet reached by the walk.
    #[default]
    Unvisited,
    /// Walk started, emission not yet complete.
    InProgress,
    /// Fully emitted.
    Done,
}

/// A struct definition together with its traversal state.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// The wrapped definition.
    pub def: StructDef,
    /// Traversal state, owned by the registry for the duration of one run.
    pub state: VisitState,
}

/// Catalogue of every struct definition in the source schema.
///
/// Entries are kept in source order with a name lookup on the side, so root
/// selection iterates deterministically.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry from parsed struct definitions.
    ///
    /// Every struct is registered whether or not it will be emitted; structs
    /// only reachable as field references still need an entry so the
    /// generator can resolve them.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateStruct` if the source schema defines
    /// the same name twice.
    pub fn from_structs(structs: Vec<StructDef>) -> Result<Self, SchemaError> {
        let mut registry = Self {
            entries: Vec::with_capacity(structs.len()),
            index: HashMap::with_capacity(structs.len()),
        };

        for def in structs {
            if registry.index.contains_key(&def.name) {
                return Err(SchemaError::DuplicateStruct { name: def.name });
            }
            registry.index.insert(def.name.clone(), registry.entries.len());
            registry.entries.push(RegistryEntry {
                def,
                state: VisitState::Unvisited,
            });
        }

        Ok(registry)
    }

    /// Looks up an entry by struct name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// Returns true if a struct with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the traversal state for a struct, if registered.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<VisitState> {
        self.get(name).map(|entry| entry.state)
    }

    /// Marks a struct as in progress. Unknown names are ignored.
    pub fn mark_in_progress(&mut self, name: &str) {
        if let Some(&idx) = self.index.get(name) {
            self.entries[idx].state = VisitState::InProgress;
        }
    }

    /// Marks a struct as fully emitted. Unknown names are ignored.
    pub fn mark_done(&mut self, name: &str) {
        if let Some(&idx) = self.index.get(name) {
            self.entries[idx].state = VisitState::Done;
        }
    }

    /// Iterates entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Number of registered structs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no structs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
