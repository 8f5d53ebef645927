use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::format_currency;

pub async fn list_command() -> Result<()> {
    info!("Listing cabins");

    let context = AppContext::load().await?;
    let cabins = context.cabins().list_cabins().await?;

    if cabins.is_empty() {
        println!("  {}", "No cabins yet".bright_yellow().bold());
        println!("  {}", "Run 'oasis-admin cabins create' to add one.".dimmed());
        return Ok(());
    }

    println!();
    println!("  {}", "Cabins:".bright_white().bold());
    for cabin in &cabins {
        let discount = match cabin.discount {
            Some(d) if d > 0.0 => format_currency(Some(d)).bright_green(),
            _ => "-".dimmed(),
        };
        println!(
            "  {:>4}  {:<8} fits up to {:>2} guests  {:>10}  {}",
            format!("#{}", cabin.id),
            cabin.name.cyan().bold(),
            cabin.max_capacity.unwrap_or(0),
            format_currency(cabin.regular_price),
            discount
        );
    }
    println!();

    Ok(())
}
