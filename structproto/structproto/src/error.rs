//! Error types for the generator.

use std::path::PathBuf;

use structproto_core::{FeedError, RenderError};

/// Errors produced by [`ProtoGenerator`](crate::ProtoGenerator).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The type feed could not be loaded; no schema is produced.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// The schema could not be rendered or written.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The output directory does not exist.
    #[error("output directory {} does not exist", .path.display())]
    OutputDirMissing { path: PathBuf },

    /// No feed was configured on the builder.
    #[error("no type feed configured")]
    NoFeed,
}
