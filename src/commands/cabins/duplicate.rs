use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;

pub async fn duplicate_command(id: i64) -> Result<()> {
    info!("Duplicating cabin #{}", id);

    let context = AppContext::load().await?;
    let copy = context.cabins().duplicate_cabin(id).await?;
    println!(
        "{} Created {} (#{})",
        "✓".bright_green().bold(),
        copy.name.bright_green().bold(),
        copy.id
    );

    Ok(())
}
