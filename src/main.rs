use clap::Parser;
use tracing_subscriber::EnvFilter;
use unicodec::cli::{run, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    run(Cli::parse(), &mut std::io::stdout().lock())
}
