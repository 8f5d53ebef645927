use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::{format_currency, format_date, format_status};

pub async fn show_command(id: i64) -> Result<()> {
    info!("Showing booking #{}", id);

    let context = AppContext::load().await?;
    let booking = context.bookings().get_booking(id).await?;

    println!();
    println!("  {} {}", format!("Booking #{}", booking.id).bright_white().bold(), format_status(booking.status));

    let cabin = booking.cabin.as_ref().and_then(|c| c.name.as_deref()).unwrap_or("-");
    println!(
        "  {} nights in cabin {}: {} → {}",
        booking.num_nights.unwrap_or(0),
        cabin.cyan(),
        format_date(booking.start_date),
        format_date(booking.end_date)
    );

    if let Some(guest) = &booking.guest {
        let others = booking.num_guests.unwrap_or(1) - 1;
        let party = if others > 0 {
            format!(" + {} guest(s)", others)
        } else {
            String::new()
        };
        println!(
            "  {} {}{} · {} · National ID {}",
            guest.country_flag.as_deref().unwrap_or(""),
            guest.full_name.as_deref().unwrap_or("-"),
            party,
            guest.email.as_deref().unwrap_or("-"),
            guest.national_id.as_deref().unwrap_or("-")
        );
    }

    if let Some(observations) = booking.observations.as_deref().filter(|o| !o.is_empty()) {
        println!("  Observations: {}", observations);
    }
    println!(
        "  Breakfast included? {}",
        if booking.has_breakfast.unwrap_or(false) { "Yes" } else { "No" }
    );

    let paid = if booking.is_paid.unwrap_or(false) {
        "Paid".bright_green().bold()
    } else {
        "Will pay at property".bright_yellow().bold()
    };
    println!(
        "  Total price {} ({} cabin + {} breakfast)  {}",
        format_currency(booking.total_price),
        format_currency(booking.cabin_price),
        format_currency(booking.extras_price),
        paid
    );
    println!("  Booked {}", format_date(booking.created_at).dimmed());
    println!();

    Ok(())
}
