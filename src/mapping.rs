//! Field name translation between the store and the application
//!
//! The store names columns in snake_case, the application in camelCase.
//! Each table has a static list of `(remote, local)` pairs; joined child
//! rows are translated with their own table's list. Keys not in a list pass
//! through untouched, so translating an already translated record is a no-op.

use serde_json::{Map, Value};

/// Static mapping table for one collection
#[derive(Debug)]
pub struct FieldMap {
    /// `(remote, local)` column name pairs
    pub fields: &'static [(&'static str, &'static str)],
    /// Embedded join keys and the map for their rows
    pub joins: &'static [(&'static str, &'static FieldMap)],
}

pub static GUEST_FIELDS: FieldMap = FieldMap {
    fields: &[
        ("created_at", "createdAt"),
        ("full_name", "fullName"),
        ("country_flag", "countryFlag"),
        ("national_id", "nationalID"),
    ],
    joins: &[],
};

pub static CABIN_FIELDS: FieldMap = FieldMap {
    fields: &[
        ("created_at", "createdAt"),
        ("max_capacity", "maxCapacity"),
        ("regular_price", "regularPrice"),
    ],
    joins: &[],
};

pub static BOOKING_FIELDS: FieldMap = FieldMap {
    fields: &[
        ("created_at", "createdAt"),
        ("start_date", "startDate"),
        ("end_date", "endDate"),
        ("num_nights", "numNights"),
        ("num_guests", "numGuests"),
        ("cabin_price", "cabinPrice"),
        ("extras_price", "extrasPrice"),
        ("total_price", "totalPrice"),
        ("has_breakfast", "hasBreakfast"),
        ("is_paid", "isPaid"),
        ("cabin_id", "cabinId"),
        ("guest_id", "guestId"),
    ],
    joins: &[("cabins", &CABIN_FIELDS), ("guests", &GUEST_FIELDS)],
};

pub static SETTINGS_FIELDS: FieldMap = FieldMap {
    fields: &[
        ("created_at", "createdAt"),
        ("min_booking_length", "minBookingLength"),
        ("max_booking_length", "maxBookingLength"),
        ("max_guests_per_booking", "maxGuestsPerBooking"),
        ("breakfast_price", "breakfastPrice"),
    ],
    joins: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    ToLocal,
    ToRemote,
}

impl FieldMap {
    /// Translate a record, or every record of an array, into local naming
    pub fn to_local(&self, value: &Value) -> Value {
        self.translate(value, Direction::ToLocal)
    }

    /// Translate a record into persistence naming, for write payloads
    pub fn to_remote(&self, value: &Value) -> Value {
        self.translate(value, Direction::ToRemote)
    }

    /// Persistence name for a field given in either convention
    pub fn remote_name<'a>(&self, field: &'a str) -> &'a str {
        self.fields
            .iter()
            .find(|(_, local)| *local == field)
            .map(|(remote, _)| *remote)
            .unwrap_or(field)
    }

    fn translate(&self, value: &Value, direction: Direction) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|item| self.translate(item, direction)).collect()),
            Value::Object(record) => Value::Object(self.translate_record(record, direction)),
            other => other.clone(),
        }
    }

    fn translate_record(&self, record: &Map<String, Value>, direction: Direction) -> Map<String, Value> {
        let mut passthrough = Map::new();
        let mut renamed = Map::new();

        for (key, value) in record {
            if let Some((_, nested)) = self.joins.iter().find(|(join, _)| join == key) {
                renamed.insert(key.clone(), nested.translate(value, direction));
            } else if let Some(target) = self.target_name(key, direction) {
                renamed.insert(target.to_string(), value.clone());
            } else {
                passthrough.insert(key.clone(), value.clone());
            }
        }

        // A renamed key wins over a same-named key that was already present
        passthrough.extend(renamed);
        passthrough
    }

    fn target_name(&self, key: &str, direction: Direction) -> Option<&'static str> {
        self.fields.iter().find_map(|(remote, local)| match direction {
            Direction::ToLocal if *remote == key => Some(*local),
            Direction::ToRemote if *local == key => Some(*remote),
            _ => None,
        })
    }
}
