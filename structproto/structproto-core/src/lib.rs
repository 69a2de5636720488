//! Core projection pipeline for `structproto`.
//!
//! ```text
//! TypeFeed::load          – packages of normalized type definitions
//!   └─ discover           – exported structs, deduplicated, filtered
//!       └─ project_field  – per-field name casing, numbering, classify
//!           └─ assemble   – messages sorted by name → SchemaDocument
//!               └─ render_proto – proto3 text
//! ```

mod classify;
mod discover;
mod error;
mod feed;
mod project;
mod schema;

pub use classify::{classify, normalize_primitive};
pub use discover::{assemble, discover};
pub use error::{FeedError, PackageFailure, RenderError};
pub use feed::{SourceField, SourcePackage, TypeDef, TypeFeed, TypeKind, TypeShape};
pub use project::{project_field, schema_field_name};
pub use schema::{
    SchemaDocument, SchemaField, SchemaMessage, TAGGER_IMPORT, render_proto, write_proto_file,
};
