use crate::dates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Guest profile, only ever read through a booking join
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guest {
    pub id: Option<i64>,
    #[serde(with = "dates::flexible")]
    pub created_at: Option<DateTime<Utc>>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
    #[serde(rename = "nationalID")]
    pub national_id: Option<String>,
}
