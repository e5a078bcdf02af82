use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod host;

use cli::BuildRunner;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = BuildRunner::parse();
    app.command.execute()
}
