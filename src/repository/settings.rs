//! Hotel settings, a single row

use super::{decode_row, encode_payload};
use crate::api::constants::tables;
use crate::api::{Operation, QueryBuilder, Tables};
use crate::error::{logged, DashboardError, Result};
use crate::mapping::SETTINGS_FIELDS;
use crate::models::{Settings, SettingsPatch};
use log::info;
use std::sync::Arc;

const SETTINGS_ROW: i64 = 1;

const LOAD_FAILED: &str = "Settings could not be loaded";
const UPDATE_FAILED: &str = "Settings could not be updated";

pub struct SettingsRepository {
    tables: Arc<dyn Tables>,
}

impl SettingsRepository {
    pub fn new(tables: Arc<dyn Tables>) -> Self {
        Self { tables }
    }

    pub async fn get_settings(&self) -> Result<Settings> {
        let result = QueryBuilder::new(tables::SETTINGS)
            .select("*")
            .single()
            .execute(self.tables.as_ref())
            .await
            .map_err(logged(DashboardError::Fetch, LOAD_FAILED))?;
        let row = result
            .into_rows()
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::Fetch(LOAD_FAILED.to_string()))?;

        decode_row(&SETTINGS_FIELDS, row).map_err(logged(DashboardError::Fetch, LOAD_FAILED))
    }

    pub async fn update_setting(&self, patch: &SettingsPatch) -> Result<Settings> {
        let data = encode_payload(&SETTINGS_FIELDS, patch).map_err(logged(DashboardError::Update, UPDATE_FAILED))?;

        let row = self
            .tables
            .execute(&Operation::update_by_id(tables::SETTINGS, SETTINGS_ROW, data))
            .await
            .and_then(|result| result.single_row())
            .map_err(logged(DashboardError::Update, UPDATE_FAILED))?;

        info!("Updated settings");
        decode_row(&SETTINGS_FIELDS, row).map_err(logged(DashboardError::Update, UPDATE_FAILED))
    }
}
