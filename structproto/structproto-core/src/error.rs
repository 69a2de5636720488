//! Error types for the feed and rendering layers.

use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};

/// Load failure of a single package, with every message reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFailure {
    pub package: String,
    pub messages: Vec<String>,
}

impl PackageFailure {
    pub fn new(package: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            package: package.into(),
            messages,
        }
    }
}

impl Display for PackageFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error fetching package {}: {}",
            self.package,
            self.messages.join(", ")
        )
    }
}

/// Error returned by [`TypeFeed`](crate::TypeFeed) implementations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// One or more packages failed to load. All failures are listed.
    #[error("{}", format_failures(.failures))]
    PackageLoad { failures: Vec<PackageFailure> },
}

fn format_failures(failures: &[PackageFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned when the schema text cannot be produced or persisted.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format schema text")]
    Format(#[from] std::fmt::Error),
    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
