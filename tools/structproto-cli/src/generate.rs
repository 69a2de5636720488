use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use structproto::{GenerateOptions, ProtoGenerator};
use tracing::info;

#[derive(Args)]
pub struct GenerateArgs {
    /// Package directories to analyse. Relative paths ("./example/in") are allowed.
    #[arg(short = 'p', long = "package", value_name = "PATH", required = true)]
    packages: Vec<String>,

    /// Directory the output.proto file is written to
    #[arg(short = 'f', long = "folder", value_name = "DIR", default_value = ".")]
    folder: PathBuf,

    /// Filter by struct names. Case insensitive.
    #[arg(long, default_value = "")]
    filter: String,

    /// Emit struct tags as (tagger.tags) field options
    #[arg(long)]
    tags: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let pwd = env::current_dir().context("error getting working directory")?;
        let folder = if self.folder.is_absolute() {
            self.folder
        } else {
            pwd.join(&self.folder)
        };

        let generator = ProtoGenerator::builder()
            .with_go_packages(&pwd, self.packages)
            .with_options(GenerateOptions {
                filter: self.filter,
                annotations: self.tags,
            })
            .build()?;

        let path = generator
            .write_to_dir(&folder)
            .context("error generating schema")?;
        info!("output file written to {}", path.display());
        Ok(())
    }
}
