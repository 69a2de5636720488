//! Go source [`TypeFeed`](structproto_core::TypeFeed) for `structproto`.
//!
//! # Pipeline
//!
//! ```text
//! package directory
//!   └─ GoSourceFeed::load   – read *.go files (tests excluded), file-name order
//!       └─ parse_go_file    – nom-based declaration parser → GoFile
//!           └─ resolve_package – underlying-type classification → SourcePackage
//! ```

pub mod ast;
mod error;
mod lex;
mod loader;
mod parser;
mod resolver;

pub use error::GoSourceError;
pub use loader::GoSourceFeed;
pub use parser::parse_go_file;
pub use resolver::resolve_package;
