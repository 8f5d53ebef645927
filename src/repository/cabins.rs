//! Cabin data access

use super::{decode_row, decode_rows, CabinWrite};
use crate::api::constants::tables;
use crate::api::{Operation, OrderBy, QueryBuilder, Storage, Tables};
use crate::error::{logged, DashboardError, Result};
use crate::mapping::CABIN_FIELDS;
use crate::models::{Cabin, CabinDraft};
use log::info;
use std::sync::Arc;

const LOAD_FAILED: &str = "Cabins could not be loaded";
const DELETE_FAILED: &str = "Cabin could not be deleted";
const NOT_FOUND: &str = "Cabin not found";

pub struct CabinRepository {
    tables: Arc<dyn Tables>,
    storage: Arc<dyn Storage>,
}

impl CabinRepository {
    pub fn new(tables: Arc<dyn Tables>, storage: Arc<dyn Storage>) -> Self {
        Self { tables, storage }
    }

    pub async fn list_cabins(&self) -> Result<Vec<Cabin>> {
        let result = QueryBuilder::new(tables::CABINS)
            .select("*")
            .orderby(OrderBy::asc("name"))
            .execute(self.tables.as_ref())
            .await
            .map_err(logged(DashboardError::Fetch, LOAD_FAILED))?;

        decode_rows(&CABIN_FIELDS, result.into_rows()).map_err(logged(DashboardError::Fetch, LOAD_FAILED))
    }

    pub async fn get_cabin(&self, id: i64) -> Result<Cabin> {
        let result = QueryBuilder::new(tables::CABINS)
            .select("*")
            .by_id(id)
            .single()
            .execute(self.tables.as_ref())
            .await
            .map_err(logged(DashboardError::NotFound, NOT_FOUND))?;
        let row = result
            .into_rows()
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::NotFound(NOT_FOUND.to_string()))?;

        decode_row(&CABIN_FIELDS, row).map_err(logged(DashboardError::NotFound, NOT_FOUND))
    }

    /// Insert a cabin (`id` absent) or update one, uploading a new image if
    /// the draft carries a file. See [`CabinWrite`] for the failure handling.
    pub async fn create_or_edit_cabin(&self, draft: CabinDraft, id: Option<i64>) -> Result<Cabin> {
        let mut write = CabinWrite::plan(draft, id, self.storage.as_ref());
        let cabin = write.run(self.tables.as_ref(), self.storage.as_ref()).await?;

        match id {
            Some(id) => info!("Updated cabin #{} '{}'", id, cabin.name),
            None => info!("Created cabin #{} '{}'", cabin.id, cabin.name),
        }
        Ok(cabin)
    }

    /// Create a copy named `Copy of <name>` that shares the stored image
    pub async fn duplicate_cabin(&self, id: i64) -> Result<Cabin> {
        let original = self.get_cabin(id).await?;
        self.create_or_edit_cabin(CabinDraft::copy_of(&original), None).await
    }

    pub async fn delete_cabin(&self, id: i64) -> Result<()> {
        let result = self
            .tables
            .execute(&Operation::delete_by_id(tables::CABINS, id))
            .await
            .map_err(logged(DashboardError::Delete, DELETE_FAILED))?;

        info!("Deleted cabin #{} ({} row(s))", id, result.rows.len());
        Ok(())
    }
}
