//! Lair - command line entry point

// Force linkme registration of the repository backends
extern crate lair_providers;

use clap::Parser;
use lair::{Cli, execute, load_config};
use lair::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    let output = execute(&cli.command, &config).await?;
    println!("{output}");
    Ok(())
}
