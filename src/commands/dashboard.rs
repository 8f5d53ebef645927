use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::dashboard::summarize;
use crate::dates::SystemClock;
use crate::ui::format_currency;

pub async fn dashboard_command(days: Option<u32>) -> Result<()> {
    let context = AppContext::load().await?;
    let days = days.unwrap_or(context.config.settings.recent_days);
    if days == 0 {
        anyhow::bail!("--days must be at least 1");
    }
    info!("Building dashboard for the last {} days", days);

    let summary = summarize(&context.bookings(), &context.cabins(), &SystemClock, days).await?;

    println!();
    println!("  {}", format!("Last {} days", days).bright_white().bold());
    println!("  Bookings      {}", summary.num_bookings.to_string().bright_blue().bold());
    println!("  Sales         {}", format_currency(Some(summary.sales)).bright_green().bold());
    println!("  Extras        {}", format_currency(Some(summary.extras_sales)).dimmed());
    println!("  Check ins     {}", summary.check_ins.to_string().cyan().bold());
    println!(
        "  Occupancy     {}",
        format!("{:.0}%", summary.occupancy_rate * 100.0).bright_yellow().bold()
    );
    println!();

    Ok(())
}
