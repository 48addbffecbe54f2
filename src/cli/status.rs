//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "adlens Configuration Status".bold());

    let path = Config::resolve_path(config_path)?;
    println!("Config file: {}", path.display().to_string().cyan());
    println!();

    let config = Config::load(config_path)?;

    report_credential(
        "Access token",
        config.fb_access_token.is_some(),
        "FB_ACCESS_TOKEN",
    );
    report_credential(
        "Ad account ID",
        config.ad_account_id.is_some(),
        "AD_ACCOUNT_ID",
    );

    println!();
    println!(
        "{}",
        "Sensitive fields are masked in output. Use --show-sensitive to display them.".dimmed()
    );

    Ok(())
}

fn report_credential(label: &str, in_config: bool, env_name: &str) {
    if in_config {
        println!("{} {} configured", "✓".green(), label);
    } else if std::env::var(env_name).is_ok() {
        println!(
            "{} {} provided via {} environment variable",
            "✓".green(),
            label,
            env_name
        );
    } else {
        println!("{} {} not configured", "✗".red(), label);
        println!("  → Run 'adlens init' or export {}", env_name);
    }
}
