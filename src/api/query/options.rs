//! Caller-facing query directives
//!
//! The shape a list screen asks for: one optional filter, one optional sort
//! and an optional 1-based page number.

use super::filters::{FilterMethod, FilterValue};
use super::orderby::SortDirection;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDirective {
    pub field: String,
    pub value: FilterValue,
    pub method: FilterMethod,
}

impl FilterDirective {
    pub fn new(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            method: FilterMethod::Eq,
        }
    }

    pub fn with_method(mut self, method: FilterMethod) -> Self {
        self.method = method;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortDirective {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Parses the `field-direction` form used in URLs and on the command line,
/// e.g. `start_date-desc` or `total_price-asc`
impl FromStr for SortDirective {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (field, direction) = s
            .rsplit_once('-')
            .ok_or_else(|| anyhow::anyhow!("Sort must look like <field>-<asc|desc>, got '{}'", s))?;
        if field.is_empty() {
            anyhow::bail!("Sort field is empty in '{}'", s);
        }
        Ok(Self::new(field, direction.parse()?))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub filter: Option<FilterDirective>,
    pub sort_by: Option<SortDirective>,
    pub page: Option<u32>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: FilterDirective) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort_by(mut self, sort: SortDirective) -> Self {
        self.sort_by = Some(sort);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
