use anyhow::Result;
use chrono::Utc;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::models::BookingStatus;

pub async fn today_command() -> Result<()> {
    info!("Showing today's activity");

    let context = AppContext::load().await?;
    let activity = context.bookings().get_today_activity().await?;

    println!();
    println!("  {} {}", "Today".bright_white().bold(), Utc::now().format("%a, %b %d %Y").to_string().dimmed());

    if activity.is_empty() {
        println!("  {}", "No activity today...".dimmed());
        println!();
        return Ok(());
    }

    for booking in &activity {
        let (label, action) = match booking.status {
            Some(BookingStatus::Unconfirmed) => ("Arriving".bright_green().bold(), "check-in"),
            _ => ("Departing".bright_blue().bold(), "check-out"),
        };
        let guest = booking.guest.as_ref();
        println!(
            "  {:<10} {} {:<24} {} nights   oasis-admin bookings {} {}",
            label,
            guest.and_then(|g| g.country_flag.as_deref()).unwrap_or(" "),
            guest.and_then(|g| g.full_name.as_deref()).unwrap_or("-"),
            booking.num_nights.unwrap_or(0),
            action,
            booking.id
        );
    }
    println!();

    Ok(())
}
