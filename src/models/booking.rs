use crate::dates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::guest::Guest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Unconfirmed,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "unconfirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
        }
    }

    /// Stays only move forward: unconfirmed -> checked-in -> checked-out
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Unconfirmed, BookingStatus::CheckedIn)
                | (BookingStatus::CheckedIn, BookingStatus::CheckedOut)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "unconfirmed" => Ok(BookingStatus::Unconfirmed),
            "checked-in" => Ok(BookingStatus::CheckedIn),
            "checked-out" => Ok(BookingStatus::CheckedOut),
            other => anyhow::bail!(
                "Unknown booking status '{}', expected unconfirmed, checked-in or checked-out",
                other
            ),
        }
    }
}

/// Cabin fields embedded in a booking through a join
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookedCabin {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub max_capacity: Option<i64>,
    pub regular_price: Option<f64>,
    pub discount: Option<f64>,
    pub image: Option<String>,
}

/// A booking in application naming. Apart from `id`, every field depends on
/// the projection of the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default, with = "dates::flexible")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "dates::flexible")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "dates::flexible")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_nights: Option<i64>,
    #[serde(default)]
    pub num_guests: Option<i64>,
    #[serde(default)]
    pub cabin_price: Option<f64>,
    #[serde(default)]
    pub extras_price: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub has_breakfast: Option<bool>,
    #[serde(default)]
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub cabin_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default, rename = "cabins")]
    pub cabin: Option<BookedCabin>,
    #[serde(default, rename = "guests")]
    pub guest: Option<Guest>,
}

/// Sales figures of a booking, as loaded for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSales {
    #[serde(default, with = "dates::flexible")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub extras_price: Option<f64>,
}

/// Partial update of a booking, in application naming
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_breakfast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl BookingPatch {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_value(BookingStatus::CheckedIn).unwrap(), json!("checked-in"));
        let status: BookingStatus = serde_json::from_value(json!("checked-out")).unwrap();
        assert_eq!(status, BookingStatus::CheckedOut);
        assert_eq!("unconfirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Unconfirmed);
        assert!("cancelled".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_transitions_only_move_forward() {
        use BookingStatus::*;
        assert!(Unconfirmed.can_transition_to(CheckedIn));
        assert!(CheckedIn.can_transition_to(CheckedOut));
        assert!(!CheckedIn.can_transition_to(Unconfirmed));
        assert!(!Unconfirmed.can_transition_to(CheckedOut));
        assert!(!CheckedOut.can_transition_to(CheckedIn));
    }

    #[test]
    fn test_booking_from_list_projection() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 3,
            "createdAt": "2024-04-20T09:12:00.123+00:00",
            "startDate": "2024-05-01T00:00:00",
            "endDate": "2024-05-03T00:00:00",
            "numNights": 2,
            "numGuests": 1,
            "status": "unconfirmed",
            "totalPrice": 500,
            "cabins": {"name": "002"},
            "guests": {"fullName": "Jonas Schmedtmann", "email": "jonas@example.com"}
        }))
        .unwrap();

        assert_eq!(booking.num_nights, Some(2));
        assert_eq!(booking.status, Some(BookingStatus::Unconfirmed));
        assert_eq!(booking.cabin.as_ref().and_then(|c| c.name.as_deref()), Some("002"));
        assert_eq!(booking.guest.as_ref().and_then(|g| g.email.as_deref()), Some("jonas@example.com"));
        assert!(booking.is_paid.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = BookingPatch {
            status: Some(BookingStatus::CheckedIn),
            is_paid: Some(true),
            ..BookingPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"status": "checked-in", "isPaid": true})
        );
        assert!(BookingPatch::default().is_empty());
    }
}
