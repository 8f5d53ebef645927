use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;

pub async fn whoami_command() -> Result<()> {
    info!("Executing auth whoami command");

    let context = AppContext::load().await?;

    println!("Backend: {}", context.config.backend.url.cyan());
    match context.session().get_current_user().await? {
        Some(user) => {
            println!("  Email: {}", user.email.as_deref().unwrap_or("-"));
            println!("  Name: {}", user.user_metadata.full_name.as_deref().unwrap_or("-"));
            if let Some(avatar) = user.user_metadata.avatar.as_deref().filter(|a| !a.is_empty()) {
                println!("  Avatar: {}", avatar);
            }
            if let Some(role) = &user.role {
                println!("  Role: {}", role);
            }
        }
        None => {
            println!("  {}", "Not signed in".bright_yellow().bold());
            println!("  {}", "Run 'oasis-admin auth login' to sign in.".dimmed());
        }
    }

    Ok(())
}
