//! Typed data access over the backend capabilities
//!
//! Every repository takes its backend handles at construction. Rows come
//! back in persistence naming, go through the field maps, and are decoded
//! into the records in `crate::models`.

pub mod bookings;
pub mod cabin_write;
pub mod cabins;
pub mod session;
pub mod settings;

pub use bookings::{BookingPage, BookingRepository};
pub use cabin_write::{CabinWrite, CabinWriteState, ImagePlan};
pub use cabins::CabinRepository;
pub use session::{ProfileUpdate, SessionGateway};
pub use settings::SettingsRepository;

use crate::mapping::FieldMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Translate rows to local naming and decode them
pub(crate) fn decode_rows<T: DeserializeOwned>(map: &FieldMap, rows: Vec<Value>) -> anyhow::Result<Vec<T>> {
    rows.into_iter().map(|row| decode_row(map, row)).collect()
}

pub(crate) fn decode_row<T: DeserializeOwned>(map: &FieldMap, row: Value) -> anyhow::Result<T> {
    Ok(serde_json::from_value(map.to_local(&row))?)
}

/// Serialize a local-naming payload into persistence naming
pub(crate) fn encode_payload<T: serde::Serialize>(map: &FieldMap, payload: &T) -> anyhow::Result<Value> {
    Ok(map.to_remote(&serde_json::to_value(payload)?))
}
