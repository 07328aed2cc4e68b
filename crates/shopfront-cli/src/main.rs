mod cart;
mod products;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::products::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Browse the product catalog and manage the cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog and render it as product cards
    Products {
        /// Walk every page of the catalog instead of only the first
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the output to a file instead of stdout
        #[arg(long, short)]
        output: Option<std::path::PathBuf>,
    },
    /// Add products to, or show, the cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shopfront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Products {
            all,
            format,
            output,
        } => products::run_products(&config, all, format, output.as_deref()).await,
        Commands::Cart { command } => cart::run_cart(&config, command).await,
    }
}
