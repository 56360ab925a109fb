use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

mod commands;
mod config;
mod output;

use crate::commands::catalog::CatalogCommand;
use crate::commands::image::ImageCommand;
use crate::config::get_config;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Product Search Catalog Client - catalog and reference image management", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Manage reference images
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("catalog_client_core", log::LevelFilter::Debug)
            .filter_module("catalog_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Commands::Catalog { command } => {
            let config = get_config().context("Failed to load configuration")?;
            commands::catalog::execute(config, command).await?;
        }
        Commands::Image { command } => {
            let config = get_config().context("Failed to load configuration")?;
            commands::image::execute(config, command).await?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
