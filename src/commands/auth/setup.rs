use anyhow::Result;
use colored::*;
use log::info;

use crate::config::Config;
use crate::ui::{prompt_confirmation, prompt_text};

pub async fn setup_command(url: Option<String>, anon_key: Option<String>) -> Result<()> {
    info!("Starting backend setup");

    let mut config = Config::load()?;

    if config.is_configured() && url.is_none() {
        let overwrite = prompt_confirmation(
            &format!("Backend '{}' is already configured. Replace it?", config.backend.url),
            false,
        )?;
        if !overwrite {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    let url = prompt_text(url, "Backend URL (e.g., https://yourproject.supabase.co)", None)?;
    let anon_key = prompt_text(anon_key, "Project anon key", None)?;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Backend URL must start with http:// or https://, got '{}'", url);
    }

    config.set_backend(url.trim_end_matches('/').to_string(), anon_key)?;
    println!("{} Backend '{}' configured", "✓".bright_green().bold(), config.backend.url.cyan());
    println!("Run 'oasis-admin auth login' to sign in.");

    Ok(())
}
