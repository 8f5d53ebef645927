//! Summary figures over a trailing window of days

use crate::dates::{self, Clock};
use crate::error::Result;
use crate::models::{Booking, BookingSales, BookingStatus};
use crate::repository::{BookingRepository, CabinRepository};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub days: u32,
    pub num_bookings: usize,
    pub sales: f64,
    pub extras_sales: f64,
    /// Stays in the window that were checked in or already checked out
    pub confirmed_stays: usize,
    /// Stays in the window whose guests are still checked in
    pub check_ins: usize,
    /// Booked nights of confirmed stays over available cabin nights, 0..=1
    pub occupancy_rate: f64,
}

impl DashboardSummary {
    pub fn compute(days: u32, bookings: &[BookingSales], stays: &[Booking], cabin_count: usize) -> Self {
        let confirmed: Vec<&Booking> = stays
            .iter()
            .filter(|stay| {
                matches!(
                    stay.status,
                    Some(BookingStatus::CheckedIn) | Some(BookingStatus::CheckedOut)
                )
            })
            .collect();

        let nights: i64 = confirmed.iter().map(|stay| stay.num_nights.unwrap_or(0)).sum();
        let available = days as f64 * cabin_count as f64;
        let occupancy_rate = if available > 0.0 { nights as f64 / available } else { 0.0 };

        Self {
            days,
            num_bookings: bookings.len(),
            sales: bookings.iter().filter_map(|b| b.total_price).sum(),
            extras_sales: bookings.iter().filter_map(|b| b.extras_price).sum(),
            confirmed_stays: confirmed.len(),
            check_ins: confirmed
                .iter()
                .filter(|stay| stay.status == Some(BookingStatus::CheckedIn))
                .count(),
            occupancy_rate,
        }
    }
}

/// Load the bookings, stays and cabins of the last `days` days and summarize them
pub async fn summarize(
    bookings: &BookingRepository,
    cabins: &CabinRepository,
    clock: &dyn Clock,
    days: u32,
) -> Result<DashboardSummary> {
    let since = dates::days_ago(clock.now(), days as i64);
    debug!("Dashboard window starts {}", dates::to_store_string(since));

    let recent = bookings.get_bookings_created_after(since).await?;
    let stays = bookings.get_stays_starting_after(since).await?;
    let cabin_count = cabins.list_cabins().await?.len();

    Ok(DashboardSummary::compute(days, &recent, &stays, cabin_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stay(status: &str, nights: i64) -> Booking {
        serde_json::from_value(json!({ "id": nights, "status": status, "numNights": nights })).unwrap()
    }

    #[test]
    fn test_summary_figures() {
        let sales = vec![
            BookingSales {
                created_at: None,
                total_price: Some(500.0),
                extras_price: Some(50.0),
            },
            BookingSales {
                created_at: None,
                total_price: Some(300.0),
                extras_price: None,
            },
        ];
        let stays = vec![stay("checked-in", 3), stay("checked-out", 4), stay("unconfirmed", 5)];

        let summary = DashboardSummary::compute(7, &sales, &stays, 2);

        assert_eq!(summary.num_bookings, 2);
        assert_eq!(summary.sales, 800.0);
        assert_eq!(summary.extras_sales, 50.0);
        assert_eq!(summary.confirmed_stays, 2);
        assert_eq!(summary.check_ins, 1);
        assert_eq!(summary.occupancy_rate, 0.5);
    }

    #[test]
    fn test_no_cabins_means_no_occupancy() {
        let summary = DashboardSummary::compute(30, &[], &[stay("checked-in", 2)], 0);
        assert_eq!(summary.occupancy_rate, 0.0);
    }
}
