//! Account metadata command implementation

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::campaigns::{masking_notice, report_unexpected_payload};
use crate::client::{GraphApi, GraphClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{json, table};

/// Run the account metadata command
pub async fn run(
    format: OutputFormat,
    show_sensitive: bool,
    config_path: Option<&str>,
    graph_host: Option<String>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let creds = config.credentials()?;

    let client = GraphClient::with_host(graph_host)?;
    let payload = match client.account_metadata(&creds).await {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{} Failed to fetch account metadata.", "✗".red());
            return Err(Error::Fetch(err));
        }
    };

    if payload.get("error").is_some() {
        report_unexpected_payload(&payload);
        return Ok(());
    }

    let hide_sensitive = !show_sensitive;

    println!("{} Loaded account metadata", "✓".green());

    match format {
        OutputFormat::Table => {
            println!();
            println!(
                "{}",
                table::render(&payload, "Account Metadata", hide_sensitive)
            );

            if hide_sensitive {
                println!();
                println!("{}", masking_notice());
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_payload(payload, hide_sensitive)?);
        }
    }

    Ok(())
}
