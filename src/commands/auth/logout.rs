use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;

pub async fn logout_command() -> Result<()> {
    info!("Executing auth logout command");

    let context = AppContext::load().await?;
    context.session().logout().await?;
    context.persist_session().await?;

    println!("{} Signed out", "✓".bright_green().bold());
    Ok(())
}
