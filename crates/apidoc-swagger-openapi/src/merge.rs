//! Merge rules for everything that can be written more than once.

use indexmap::IndexMap;

use crate::types::{ObjectDefinition, Operation, PathItem, Response, Schema};

/// What happens when a key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// The first value stays; later writes are dropped.
    KeepFirst,
    /// The later value replaces the earlier one in place.
    Overwrite,
}

/// Merge policy for the document build.
///
/// Required sets are always unioned. The defaults are:
///
/// - **Properties**: keep first, so duplicate field declarations never clobber a definition.
/// - **Operations**: overwrite, so a second declaration of the same verb on a URL wins.
/// - **Responses**: overwrite, so an error description replaces a success description with
///   the same key. The success schema survives unless the error carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    pub properties: Conflict,
    pub operations: Conflict,
    pub responses: Conflict,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            properties: Conflict::KeepFirst,
            operations: Conflict::Overwrite,
            responses: Conflict::Overwrite,
        }
    }
}

impl MergePolicy {
    /// Add a property to a definition. Returns whether the definition changed.
    pub fn add_property(&self, definition: &mut ObjectDefinition, name: &str, schema: Schema) -> bool {
        insert(self.properties, &mut definition.properties, name, schema)
    }

    /// Add a name to a definition's required set. Returns whether it was new.
    pub fn add_required(&self, definition: &mut ObjectDefinition, name: &str) -> bool {
        if definition.is_required(name) {
            return false;
        }
        definition.required.push(name.to_string());
        true
    }

    /// Add an operation to a path item under `verb`.
    pub fn add_operation(&self, item: &mut PathItem, verb: &str, operation: Operation) -> bool {
        insert(self.operations, item, verb, operation)
    }

    /// Merge `from` into `into`, key by key.
    ///
    /// Overwrite works field by field: the incoming description replaces the
    /// existing one, and an existing schema is only replaced by another schema.
    pub fn merge_responses(
        &self,
        into: &mut IndexMap<String, Response>,
        from: IndexMap<String, Response>,
    ) {
        for (code, response) in from {
            match (self.responses, into.get_mut(&code)) {
                (Conflict::KeepFirst, Some(_)) => {}
                (Conflict::Overwrite, Some(existing)) => {
                    existing.description = response.description;
                    if response.schema.is_some() {
                        existing.schema = response.schema;
                    }
                }
                (_, None) => {
                    into.insert(code, response);
                }
            }
        }
    }
}

fn insert<V>(conflict: Conflict, map: &mut IndexMap<String, V>, key: &str, value: V) -> bool {
    match (conflict, map.get_mut(key)) {
        (Conflict::KeepFirst, Some(_)) => false,
        (Conflict::Overwrite, Some(slot)) => {
            *slot = value;
            true
        }
        (_, None) => {
            map.insert(key.to_string(), value);
            true
        }
    }
}
