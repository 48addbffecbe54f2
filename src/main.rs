//! adlens CLI - dashboard for the Facebook Marketing Graph API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Init => cli::init::run(cli.config.as_deref()),
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("adlens version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Campaigns => {
            cli::campaigns::run(
                cli.format,
                cli.show_sensitive,
                cli.config.as_deref(),
                cli.graph_host.clone(),
            )
            .await
        }
        Commands::Account => {
            cli::account::run(
                cli.format,
                cli.show_sensitive,
                cli.config.as_deref(),
                cli.graph_host.clone(),
            )
            .await
        }
    }
}
