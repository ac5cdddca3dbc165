//! Command line front end
//!
//! Each subcommand runs against a freshly bootstrapped injector and returns
//! the text to print.

use clap::{Parser, Subcommand};
use lair_domain::error::Result;
use lair_infrastructure::config::{AppConfig, ConfigLoader};
use lair_infrastructure::di::{build_injector, list_available_repositories};
use lair_ui::{DragonComponent, DragonFormData};
use std::path::PathBuf;
use tracing::debug;

/// Command line arguments for the lair binary
#[derive(Parser, Debug, Clone)]
#[command(name = "lair")]
#[command(about = "Lair - create and view dragons")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the creation form and print the resulting view
    Create {
        /// Dragon name
        #[arg(long)]
        name: String,

        /// Dragon type (fire, water, earth, air)
        #[arg(long = "type")]
        dragon_type: String,

        /// Dragon age in years
        #[arg(long)]
        age: String,
    },

    /// Print the empty creation form
    Render,

    /// List registered repository backends
    Providers,
}

/// Load configuration, honouring `--config` when given
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run a subcommand and return its output
pub async fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Create {
            name,
            dragon_type,
            age,
        } => {
            let injector = build_injector(config)?;
            let component = DragonComponent::new()?;
            let form = DragonFormData::new(name.as_str(), dragon_type.as_str(), age.as_str());

            let dragon = component.create_listeners(&injector).on_submit(&form).await?;
            debug!(id = %dragon.id, "Rendering created dragon");
            component.create_ui(Some(&dragon))
        }
        Command::Render => DragonComponent::new()?.create_ui(None),
        Command::Providers => Ok(list_available_repositories().to_string()),
    }
}
