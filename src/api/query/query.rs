//! Reusable Query object
//!
//! Represents a complete table read that can be executed multiple times

use super::filters::Filter;
use super::orderby::OrderByClause;
use crate::api::constants;

/// Inclusive, zero-indexed row window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: u64,
    pub to: u64,
}

impl PageWindow {
    /// Window for a 1-based page number. Page 0 has no window.
    pub fn for_page(page: u32, page_size: u32) -> Option<Self> {
        if page == 0 || page_size == 0 {
            return None;
        }
        let from = (page as u64 - 1) * page_size as u64;
        Some(Self {
            from,
            to: from + page_size as u64 - 1,
        })
    }

    pub fn offset(&self) -> u64 {
        self.from
    }

    pub fn limit(&self) -> u64 {
        self.to - self.from + 1
    }
}

#[derive(Debug, Clone)]
pub struct Query {
    pub table: String,
    pub select: Option<String>,
    pub filter: Option<Filter>,
    pub orderby: OrderByClause,
    pub range: Option<PageWindow>,
    pub count: bool,
    pub single: bool,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: None,
            filter: None,
            orderby: OrderByClause::new(),
            range: None,
            count: false,
            single: false,
        }
    }

    /// Clone and modify - useful for creating variations of base queries
    pub fn with_range(mut self, range: PageWindow) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Projection with whitespace removed, defaulting to every column
    pub fn projection(&self) -> String {
        match &self.select {
            Some(select) => select.chars().filter(|c| !c.is_whitespace()).collect(),
            None => "*".to_string(),
        }
    }

    /// Query parameters in the order they are sent
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.projection())];

        if let Some(filter) = &self.filter {
            params.extend(filter.to_query_pairs());
        }

        if let Some(order) = self.orderby.to_param_string() {
            params.push(("order".to_string(), order));
        }

        if let Some(range) = &self.range {
            params.push(("offset".to_string(), range.offset().to_string()));
            params.push(("limit".to_string(), range.limit().to_string()));
        }

        params
    }

    /// Generate the full request URL
    pub fn to_url(&self, base_url: &str) -> String {
        let params: Vec<String> = self
            .to_query_params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect();

        format!("{}?{}", constants::table_endpoint(base_url, &self.table), params.join("&"))
    }
}
