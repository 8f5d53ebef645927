use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::prompt_delete_confirmation;

pub async fn delete_command(id: i64, force: bool) -> Result<()> {
    info!("Deleting cabin #{}", id);

    let confirm = if force {
        true
    } else {
        prompt_delete_confirmation(&format!("cabin #{}", id))?
    };

    if !confirm {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let context = AppContext::load().await?;
    context.cabins().delete_cabin(id).await?;
    println!("{} Cabin #{} deleted", "✓".bright_green().bold(), id);

    Ok(())
}
