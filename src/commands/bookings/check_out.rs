use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::workflows::StayWorkflow;

pub async fn check_out_command(id: i64) -> Result<()> {
    info!("Checking out booking #{}", id);

    let context = AppContext::load().await?;
    let bookings = context.bookings();
    let updated = StayWorkflow::new(&bookings).check_out(id).await?;

    println!("{} Booking #{} checked out", "✓".bright_green().bold(), updated.id);
    Ok(())
}
