//! Proto schema model and its text rendering.

mod render;
mod types;

pub use render::{TAGGER_IMPORT, render_proto, write_proto_file};
pub use types::{SchemaDocument, SchemaField, SchemaMessage};
