use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::format_currency;

pub async fn show_command() -> Result<()> {
    info!("Showing hotel settings");

    let context = AppContext::load().await?;
    let settings = context.settings().get_settings().await?;

    let show = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());

    println!();
    println!("  {}", "Hotel settings".bright_white().bold());
    println!("  min-nights       {}", show(settings.min_booking_length).cyan());
    println!("  max-nights       {}", show(settings.max_booking_length).cyan());
    println!("  max-guests       {}", show(settings.max_guests_per_booking).cyan());
    println!("  breakfast-price  {}", format_currency(settings.breakfast_price).cyan());
    println!();
    println!("  {}", "Local settings".bright_white().bold());
    println!("  page size        {}", context.config.settings.page_size);
    println!("  recent days      {}", context.config.settings.recent_days);
    println!();

    Ok(())
}
