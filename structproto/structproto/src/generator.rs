//! Schema generation from a pluggable type feed.

use std::path::{Path, PathBuf};

use structproto_core::{
    RenderError, SchemaDocument, TypeFeed, assemble, discover, render_proto, write_proto_file,
};
use tracing::{debug, info};

use crate::error::GenerateError;

/// File name of the generated schema inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "output.proto";

/// Options consumed by the projection pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Case-insensitive substring matched against type names; empty keeps all.
    pub filter: String,
    /// Emit struct tags as `(tagger.tags)` options.
    pub annotations: bool,
}

/// Turns the types of a [`TypeFeed`] into a proto3 schema.
pub struct ProtoGenerator {
    feed: Box<dyn TypeFeed>,
    options: GenerateOptions,
}

/// Builder for configuring [`ProtoGenerator`].
#[derive(Default)]
pub struct ProtoGeneratorBuilder {
    feed: Option<Box<dyn TypeFeed>>,
    options: GenerateOptions,
}

impl ProtoGeneratorBuilder {
    /// Set the type feed to read packages from.
    pub fn with_feed(mut self, feed: impl TypeFeed + 'static) -> Self {
        self.feed = Some(Box::new(feed));
        self
    }

    /// Read Go packages from source directories, relative to `base_dir`.
    #[cfg(feature = "gosrc")]
    pub fn with_go_packages(self, base_dir: impl Into<PathBuf>, packages: Vec<String>) -> Self {
        self.with_feed(structproto_gosrc::GoSourceFeed::new(base_dir, packages))
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.filter = filter.into();
        self
    }

    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.options.annotations = enabled;
        self
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<ProtoGenerator, GenerateError> {
        let feed = self.feed.ok_or(GenerateError::NoFeed)?;
        Ok(ProtoGenerator {
            feed,
            options: self.options,
        })
    }
}

impl ProtoGenerator {
    /// Create a builder for [`ProtoGenerator`].
    pub fn builder() -> ProtoGeneratorBuilder {
        ProtoGeneratorBuilder::default()
    }

    /// Load the feed and build the sorted schema document.
    pub fn document(&self) -> Result<SchemaDocument, GenerateError> {
        let packages = self.feed.load()?;
        debug!(packages = packages.len(), "type feed loaded");

        let messages = discover(&packages, &self.options.filter);
        debug!(
            messages = messages.len(),
            filter = %self.options.filter,
            "structs discovered"
        );
        Ok(assemble(messages))
    }

    /// Render the schema as proto3 text.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let document = self.document()?;
        let text = render_proto(&document, self.options.annotations).map_err(RenderError::from)?;
        Ok(text)
    }

    /// Render the schema into `dir/output.proto` and return the written path.
    ///
    /// Nothing is written unless the feed loads cleanly.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, GenerateError> {
        if !dir.is_dir() {
            return Err(GenerateError::OutputDirMissing {
                path: dir.to_path_buf(),
            });
        }
        let document = self.document()?;
        let path = dir.join(OUTPUT_FILE_NAME);
        write_proto_file(&document, self.options.annotations, &path)?;
        info!(path = %path.display(), messages = document.len(), "schema written");
        Ok(path)
    }
}
