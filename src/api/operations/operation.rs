//! Core Operation types for table mutations

use crate::api::query::Filter;
use serde_json::Value;

/// A single write that can be executed against a table
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Insert a new row
    Insert {
        /// Table name (e.g., "cabins")
        table: String,
        /// Row data as JSON, in persistence naming
        data: Value,
    },
    /// Partially update every row matching the filter
    Update {
        table: String,
        filter: Filter,
        data: Value,
    },
    /// Delete every row matching the filter
    Delete {
        table: String,
        filter: Filter,
    },
}

/// Result of executing an Operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    /// The operation that was executed
    pub operation: Operation,
    /// Rows written or removed, as returned by the store
    pub rows: Vec<Value>,
    /// HTTP status code from the response, when there was one
    pub status_code: Option<u16>,
}

impl Operation {
    pub fn insert(table: impl Into<String>, data: Value) -> Self {
        Self::Insert {
            table: table.into(),
            data,
        }
    }

    pub fn update(table: impl Into<String>, filter: Filter, data: Value) -> Self {
        Self::Update {
            table: table.into(),
            filter,
            data,
        }
    }

    pub fn delete(table: impl Into<String>, filter: Filter) -> Self {
        Self::Delete {
            table: table.into(),
            filter,
        }
    }

    /// Update the row with the given identity
    pub fn update_by_id(table: impl Into<String>, id: i64, data: Value) -> Self {
        Self::update(table, Filter::eq("id", id), data)
    }

    /// Delete the row with the given identity
    pub fn delete_by_id(table: impl Into<String>, id: i64) -> Self {
        Self::delete(table, Filter::eq("id", id))
    }

    /// Get the table name for this operation
    pub fn table(&self) -> &str {
        match self {
            Self::Insert { table, .. } => table,
            Self::Update { table, .. } => table,
            Self::Delete { table, .. } => table,
        }
    }

    /// Get the operation type as a string
    pub fn operation_type(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

impl OperationResult {
    pub fn new(operation: Operation, rows: Vec<Value>, status_code: Option<u16>) -> Self {
        Self {
            operation,
            rows,
            status_code,
        }
    }

    /// The written row, failing unless exactly one row was affected
    pub fn single_row(self) -> anyhow::Result<Value> {
        match self.rows.len() {
            1 => Ok(self.rows.into_iter().next().unwrap_or_default()),
            n => anyhow::bail!(
                "Expected exactly one row from {} on {}, got {}",
                self.operation.operation_type(),
                self.operation.table(),
                n
            ),
        }
    }
}
