//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::config::Config;
use crate::error::Result;

/// Run the init command.
///
/// Credentials are not verified against the API here; the first fetch
/// surfaces any authentication problem as an error summary.
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to adlens!".bold().green());
    println!("Let's set up your Facebook Marketing API credentials.\n");

    let access_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your Facebook access token")
        .interact()?;

    let ad_account_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your ad account ID (e.g. act_1234567890)")
        .interact_text()?;

    let config = Config {
        fb_access_token: Some(access_token),
        ad_account_id: Some(ad_account_id),
    };
    config.save(config_path)?;

    let path = Config::resolve_path(config_path)?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List your ad accounts", "adlens campaigns".cyan());
    println!("  {} - Show ad account metadata", "adlens account".cyan());

    Ok(())
}
