//! Query result handling
//!
//! Holds the rows returned by a table read and the total count when one was
//! requested

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Value>,
    pub count: Option<u64>,
}

impl QueryResult {
    pub fn new(rows: Vec<Value>, count: Option<u64>) -> Self {
        Self { rows, count }
    }

    /// Build from a response body, accepting either an array of rows or a
    /// single object (exactly-one reads)
    pub fn from_json(json: Value, count: Option<u64>) -> anyhow::Result<Self> {
        let rows = match json {
            Value::Array(rows) => rows,
            Value::Object(_) => vec![json],
            Value::Null => Vec::new(),
            other => anyhow::bail!("Unexpected response body: {}", other),
        };
        Ok(Self { rows, count })
    }

    /// Get the records from the response
    pub fn records(&self) -> &[Value] {
        &self.rows
    }

    /// Total number of matching rows, if an exact count was requested
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// Get number of records returned
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no records were returned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the first record (convenience method)
    pub fn first(&self) -> Option<&Value> {
        self.rows.first()
    }

    pub fn into_rows(self) -> Vec<Value> {
        self.rows
    }
}

/// Total from a `Content-Range` header such as `0-9/42` or `*/0`
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.rsplit_once('/')?;
    total.trim().parse().ok()
}
