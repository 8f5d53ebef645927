//! PostgREST ordering
//!
//! Provides type-safe ordering construction for table queries

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderBy {
    Asc(String),
    Desc(String),
}

/// Sort direction of a caller-supplied sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => anyhow::bail!("Unknown sort direction '{}', expected asc or desc", other),
        }
    }
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self::Asc(field.into())
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::Desc(field.into())
    }

    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc(field.into()),
            SortDirection::Desc => Self::Desc(field.into()),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            OrderBy::Asc(field) | OrderBy::Desc(field) => field,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, OrderBy::Asc(_))
    }

    /// Convert to a PostgREST order term
    pub fn to_param_string(&self) -> String {
        match self {
            OrderBy::Asc(field) => format!("{}.asc", field),
            OrderBy::Desc(field) => format!("{}.desc", field),
        }
    }
}

/// Helper to combine multiple OrderBy clauses
#[derive(Debug, Clone, Default)]
pub struct OrderByClause {
    clauses: Vec<OrderBy>,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    pub fn add(mut self, order: OrderBy) -> Self {
        self.clauses.push(order);
        self
    }

    pub fn clauses(&self) -> &[OrderBy] {
        &self.clauses
    }

    pub fn to_param_string(&self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            let order_strings: Vec<String> = self.clauses.iter().map(|o| o.to_param_string()).collect();
            Some(order_strings.join(","))
        }
    }
}
