use serde::{Deserialize, Serialize};

/// Hotel-wide booking rules, stored as a single row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub id: Option<i64>,
    pub min_booking_length: Option<i64>,
    pub max_booking_length: Option<i64>,
    pub max_guests_per_booking: Option<i64>,
    pub breakfast_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_booking_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_booking_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests_per_booking: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast_price: Option<f64>,
}
