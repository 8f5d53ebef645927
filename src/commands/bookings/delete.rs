use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::prompt_delete_confirmation;

pub async fn delete_command(id: i64, force: bool) -> Result<()> {
    info!("Deleting booking #{}", id);

    let confirm = if force {
        true
    } else {
        prompt_delete_confirmation(&format!("booking #{}", id))?
    };

    if !confirm {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let context = AppContext::load().await?;
    let deleted = context.bookings().delete_booking(id).await?;

    if deleted.is_empty() {
        println!("{} Nothing deleted; booking #{} does not exist or is protected", "⚠".bright_yellow().bold(), id);
    } else {
        println!("{} Booking #{} deleted", "✓".bright_green().bold(), id);
    }

    Ok(())
}
