use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::{format_currency, prompt_confirmation};
use crate::workflows::{BreakfastAddOn, StayWorkflow};

pub async fn check_in_command(id: i64, breakfast: bool, confirm_paid: bool) -> Result<()> {
    info!("Checking in booking #{} (breakfast: {})", id, breakfast);

    let context = AppContext::load().await?;
    let bookings = context.bookings();
    let booking = bookings.get_booking(id).await?;

    let addon = if breakfast && !booking.has_breakfast.unwrap_or(false) {
        let settings = context.settings().get_settings().await?;
        Some(BreakfastAddOn {
            breakfast_price: settings.breakfast_price.unwrap_or(0.0),
        })
    } else {
        None
    };

    let confirm_paid = if confirm_paid || booking.is_paid.unwrap_or(false) {
        true
    } else {
        let guest = booking
            .guest
            .as_ref()
            .and_then(|g| g.full_name.clone())
            .unwrap_or_else(|| "the guest".to_string());
        let total = match &addon {
            Some(addon) => {
                let extras = addon.extras_price(&booking);
                booking.cabin_price.or(booking.total_price).map(|price| price + extras)
            }
            None => booking.total_price,
        };
        prompt_confirmation(
            &format!("Has {} paid the total amount of {}?", guest, format_currency(total)),
            false,
        )?
    };

    let updated = StayWorkflow::new(&bookings).check_in(id, confirm_paid, addon).await?;
    println!(
        "{} Booking #{} checked in ({})",
        "✓".bright_green().bold(),
        updated.id,
        format_currency(updated.total_price)
    );

    Ok(())
}
