mod generate;

use anyhow::Result;
use clap::Parser;
use generate::GenerateArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "structproto",
    version,
    about = "Generate a proto3 schema from the exported structs of Go packages"
)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.generate.run()
}
