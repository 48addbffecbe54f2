//! Campaigns command implementation

use colored::Colorize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::client::{ErrorSummary, GraphApi, GraphClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{json, table};

/// Run the campaigns command
pub async fn run(
    format: OutputFormat,
    show_sensitive: bool,
    config_path: Option<&str>,
    graph_host: Option<String>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let creds = config.credentials()?;

    let client = GraphClient::with_host(graph_host)?;
    let payload = match client.list_ad_accounts(&creds).await {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{} Failed to fetch campaigns.", "✗".red());
            return Err(Error::Fetch(err));
        }
    };

    let hide_sensitive = !show_sensitive;

    let Some(data) = payload.get("data") else {
        // 2xx response without the expected list: show the redacted
        // summary, never the body
        report_unexpected_payload(&payload);
        return Ok(());
    };

    let count = data.as_array().map(|rows| rows.len()).unwrap_or(0);
    println!("{} Loaded {} campaigns", "✓".green(), count);

    match format {
        OutputFormat::Table => {
            println!();
            println!("{}", table::render(data, "Campaigns", hide_sensitive));

            if let Some(paging) = payload.get("paging") {
                println!();
                println!("{}", table::render(paging, "Paging", false));
            }

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

/// Static notice that masking is in effect
pub fn masking_notice() -> String {
    "Note: sensitive fields are masked. Use --show-sensitive to display them."
        .dimmed()
        .to_string()
}

/// Report a decodable payload that lacks the expected shape
pub fn report_unexpected_payload(payload: &Value) {
    eprintln!("{} No campaign data found or an error occurred.", "✗".red());
    eprintln!("{}", ErrorSummary::from_payload(payload));
}
