//! Struct discovery over the type feed.
//!
//! Walks every package in feed order and projects each exported struct-shaped
//! type exactly once. A name is claimed by its first occurrence, even when the
//! filter then rejects it, so a later package redeclaring the same name is
//! never reprocessed.

use std::collections::HashSet;

use crate::{
    feed::{SourceField, SourcePackage, TypeDef},
    project::project_field,
    schema::{SchemaDocument, SchemaMessage},
};

/// Discover messages in `packages`, keeping only type names that contain
/// `filter` (case-insensitive). An empty filter keeps everything.
///
/// The result is in discovery order; see [`assemble`] for render order.
pub fn discover(packages: &[SourcePackage], filter: &str) -> Vec<SchemaMessage> {
    let filter = filter.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for def in packages.iter().flat_map(|p| p.types.iter()) {
        if !def.exported || seen.contains(def.name.as_str()) {
            continue;
        }
        let Some(fields) = def.struct_fields() else {
            continue;
        };
        seen.insert(&def.name);
        if matches_filter(def, &filter) {
            out.push(struct_to_message(&def.name, fields));
        }
    }
    out
}

/// Sort discovered messages into a [`SchemaDocument`].
pub fn assemble(messages: Vec<SchemaMessage>) -> SchemaDocument {
    SchemaDocument::assemble(messages)
}

fn matches_filter(def: &TypeDef, filter: &str) -> bool {
    filter.is_empty() || def.name.to_lowercase().contains(filter)
}

fn struct_to_message(name: &str, fields: &[SourceField]) -> SchemaMessage {
    let mut order = 1;
    let mut projected = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(f) = project_field(field, order) {
            projected.push(f);
            order += 1;
        }
    }
    SchemaMessage::new(name, projected)
}
