use anyhow::Result;
use colored::*;
use log::info;

use crate::api::{FilterDirective, QueryOptions, SortDirective};
use crate::commands::AppContext;
use crate::models::BookingStatus;
use crate::ui::{format_currency, format_date, format_status};

pub async fn list_command(status: Option<String>, sort: Option<String>, page: u32) -> Result<()> {
    info!("Listing bookings: status={:?} sort={:?} page={}", status, sort, page);

    if page == 0 {
        anyhow::bail!("Pages start at 1");
    }

    let mut options = QueryOptions::new().page(page);
    if let Some(status) = status {
        let status: BookingStatus = status.parse()?;
        options = options.filter(FilterDirective::new("status", status.as_str()));
    }
    if let Some(sort) = sort {
        options = options.sort_by(sort.parse::<SortDirective>()?);
    }

    let context = AppContext::load().await?;
    let repository = context.bookings();
    let result = repository.list_bookings(&options).await?;

    if result.bookings.is_empty() {
        println!("  {}", "No bookings found".bright_yellow().bold());
        return Ok(());
    }

    println!();
    for booking in &result.bookings {
        let cabin = booking
            .cabin
            .as_ref()
            .and_then(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string());
        let (guest, email) = booking
            .guest
            .as_ref()
            .map(|g| (g.full_name.clone().unwrap_or_default(), g.email.clone().unwrap_or_default()))
            .unwrap_or_default();

        println!(
            "  {:>5}  {:<6} {:<24} {} → {} ({} nights)  {:<12} {}",
            format!("#{}", booking.id).bright_white().bold(),
            cabin.cyan(),
            guest,
            format_date(booking.start_date),
            format_date(booking.end_date),
            booking.num_nights.unwrap_or(0),
            format_status(booking.status),
            format_currency(booking.total_price),
        );
        if !email.is_empty() {
            println!("         {}", email.dimmed());
        }
    }

    let page_size = repository.page_size() as u64;
    let pages = result.count.div_ceil(page_size).max(1);
    let from = (page as u64 - 1) * page_size + 1;
    let to = (from + result.bookings.len() as u64).saturating_sub(1);
    println!();
    println!(
        "  Showing {} to {} of {} results (page {} of {})",
        from, to, result.count, page, pages
    );

    Ok(())
}
