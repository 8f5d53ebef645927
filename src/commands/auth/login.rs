use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::{prompt_password, prompt_text};

pub async fn login_command(email: Option<String>) -> Result<()> {
    info!("Executing auth login command");

    let context = AppContext::load().await?;
    let email = prompt_text(email, "Email address", None)?;
    let password = prompt_password()?;

    let session = context.session().login(&email, &password).await?;
    context.persist_session().await?;

    let name = session
        .user
        .user_metadata
        .full_name
        .clone()
        .unwrap_or_else(|| email.clone());
    println!("{} Signed in as {}", "✓".bright_green().bold(), name.bright_green().bold());

    Ok(())
}
