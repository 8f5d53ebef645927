//! Check-in and check-out of stays

use crate::error::{DashboardError, Result};
use crate::models::{Booking, BookingPatch, BookingStatus};
use crate::repository::BookingRepository;
use log::info;

/// Breakfast added at check-in, priced per guest and night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakfastAddOn {
    pub breakfast_price: f64,
}

impl BreakfastAddOn {
    pub fn extras_price(&self, booking: &Booking) -> f64 {
        self.breakfast_price * booking.num_nights.unwrap_or(0) as f64 * booking.num_guests.unwrap_or(0) as f64
    }
}

pub struct StayWorkflow<'a> {
    bookings: &'a BookingRepository,
}

impl<'a> StayWorkflow<'a> {
    pub fn new(bookings: &'a BookingRepository) -> Self {
        Self { bookings }
    }

    /// Check a guest in. An unpaid booking needs `confirm_paid`; checking in
    /// always records the booking as paid.
    pub async fn check_in(&self, id: i64, confirm_paid: bool, breakfast: Option<BreakfastAddOn>) -> Result<Booking> {
        let booking = self.bookings.get_booking(id).await?;
        let patch = check_in_patch(&booking, confirm_paid, breakfast)?;

        let updated = self.bookings.update_booking(id, &patch).await?;
        info!("Booking #{} checked in", id);
        Ok(updated)
    }

    pub async fn check_out(&self, id: i64) -> Result<Booking> {
        let booking = self.bookings.get_booking(id).await?;
        require_transition(&booking, BookingStatus::CheckedOut)?;

        let updated = self
            .bookings
            .update_booking(id, &BookingPatch::status(BookingStatus::CheckedOut))
            .await?;
        info!("Booking #{} checked out", id);
        Ok(updated)
    }
}

fn require_transition(booking: &Booking, next: BookingStatus) -> Result<()> {
    match booking.status {
        Some(current) if current.can_transition_to(next) => Ok(()),
        Some(current) => Err(DashboardError::InvalidTransition(format!(
            "Booking #{} is {} and cannot become {}",
            booking.id, current, next
        ))),
        None => Err(DashboardError::InvalidTransition(format!(
            "Booking #{} has no status",
            booking.id
        ))),
    }
}

fn check_in_patch(booking: &Booking, confirm_paid: bool, breakfast: Option<BreakfastAddOn>) -> Result<BookingPatch> {
    require_transition(booking, BookingStatus::CheckedIn)?;

    if !booking.is_paid.unwrap_or(false) && !confirm_paid {
        return Err(DashboardError::InvalidTransition(format!(
            "Booking #{} is not paid yet; confirm the payment to check in",
            booking.id
        )));
    }

    let mut patch = BookingPatch {
        status: Some(BookingStatus::CheckedIn),
        is_paid: Some(true),
        ..BookingPatch::default()
    };

    // A booking that already includes breakfast keeps its prices
    if let Some(addon) = breakfast.filter(|_| !booking.has_breakfast.unwrap_or(false)) {
        let extras = addon.extras_price(booking);
        let cabin_price = booking.cabin_price.or(booking.total_price).unwrap_or(0.0);
        patch.has_breakfast = Some(true);
        patch.extras_price = Some(extras);
        patch.total_price = Some(cabin_price + extras);
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(status: &str, is_paid: bool) -> Booking {
        serde_json::from_value(json!({
            "id": 7,
            "status": status,
            "isPaid": is_paid,
            "hasBreakfast": false,
            "numNights": 3,
            "numGuests": 2,
            "cabinPrice": 750.0,
            "extrasPrice": 0.0,
            "totalPrice": 750.0
        }))
        .unwrap()
    }

    #[test]
    fn test_check_in_paid_booking() {
        let patch = check_in_patch(&booking("unconfirmed", true), false, None).unwrap();
        assert_eq!(patch.status, Some(BookingStatus::CheckedIn));
        assert_eq!(patch.is_paid, Some(true));
        assert_eq!(patch.has_breakfast, None);
    }

    #[test]
    fn test_unpaid_booking_needs_confirmation() {
        let err = check_in_patch(&booking("unconfirmed", false), false, None).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidTransition(_)));

        let patch = check_in_patch(&booking("unconfirmed", false), true, None).unwrap();
        assert_eq!(patch.is_paid, Some(true));
    }

    #[test]
    fn test_breakfast_prices() {
        let addon = BreakfastAddOn { breakfast_price: 15.0 };
        let patch = check_in_patch(&booking("unconfirmed", true), false, Some(addon)).unwrap();

        assert_eq!(patch.has_breakfast, Some(true));
        assert_eq!(patch.extras_price, Some(90.0));
        assert_eq!(patch.total_price, Some(840.0));
    }

    #[test]
    fn test_no_second_check_in() {
        let err = check_in_patch(&booking("checked-in", true), false, None).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidTransition("Booking #7 is checked-in and cannot become checked-in".to_string())
        );
    }

    #[test]
    fn test_check_out_only_from_checked_in() {
        assert!(require_transition(&booking("checked-in", true), BookingStatus::CheckedOut).is_ok());
        assert!(require_transition(&booking("unconfirmed", true), BookingStatus::CheckedOut).is_err());
        assert!(require_transition(&booking("checked-out", true), BookingStatus::CheckedOut).is_err());
    }
}
