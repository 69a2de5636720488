mod error;
mod generator;

pub use error::GenerateError;
pub use generator::{GenerateOptions, OUTPUT_FILE_NAME, ProtoGenerator, ProtoGeneratorBuilder};
pub use structproto_core as core;
#[cfg(feature = "gosrc")]
pub use structproto_gosrc as gosrc;
