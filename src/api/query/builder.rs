//! QueryBuilder for fluent query construction
//!
//! Provides a fluent API that builds Query objects for execution

use super::filters::Filter;
use super::options::QueryOptions;
use super::orderby::OrderBy;
use super::query::{PageWindow, Query};
use super::result::QueryResult;
use crate::api::backend::Tables;

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            query: Query::new(table),
        }
    }

    /// Build a list query from caller directives: the fixed projection, then at
    /// most one filter, at most one sort and an optional page window. Any
    /// directive left out is skipped.
    pub fn from_options(
        table: impl Into<String>,
        projection: &str,
        options: &QueryOptions,
        page_size: u32,
    ) -> Self {
        let mut builder = Self::new(table).select(projection);

        if let Some(filter) = &options.filter {
            builder = builder.filter(Filter::compare(
                filter.method,
                filter.field.clone(),
                filter.value.clone(),
            ));
        }

        if let Some(sort) = &options.sort_by {
            builder = builder.orderby(OrderBy::new(sort.field.clone(), sort.direction));
        }

        if let Some(page) = options.page {
            builder = builder.page(page, page_size);
        }

        builder
    }

    /// Projection, including joined child collections, e.g. `*, guests(full_name)`
    pub fn select(mut self, projection: &str) -> Self {
        self.query.select = Some(projection.to_string());
        self
    }

    /// Set the filter condition
    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Add ordering
    pub fn orderby(mut self, order: OrderBy) -> Self {
        self.query.orderby = self.query.orderby.add(order);
        self
    }

    /// Restrict to an explicit row window
    pub fn range(mut self, from: u64, to: u64) -> Self {
        self.query.range = Some(PageWindow { from, to });
        self
    }

    /// Restrict to a 1-based page
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.query.range = PageWindow::for_page(page, page_size);
        self
    }

    /// Include exact count in response
    pub fn count(mut self) -> Self {
        self.query.count = true;
        self
    }

    /// Request exactly one row
    pub fn single(mut self) -> Self {
        self.query.single = true;
        self
    }

    /// Build the final Query object (reusable)
    pub fn build(self) -> Query {
        self.query
    }

    /// Build and execute immediately
    pub async fn execute(self, tables: &dyn Tables) -> anyhow::Result<QueryResult> {
        let query = self.build();
        tables.select(&query).await
    }
}

// Convenience methods for common patterns
impl QueryBuilder {
    /// Order by creation date (newest first)
    pub fn newest_first(self) -> Self {
        self.orderby(OrderBy::desc("created_at"))
    }

    /// Order by creation date (oldest first)
    pub fn oldest_first(self) -> Self {
        self.orderby(OrderBy::asc("created_at"))
    }

    /// Match a single row by its identity column
    pub fn by_id(self, id: i64) -> Self {
        self.filter(Filter::eq("id", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::filters::FilterMethod;
    use crate::api::query::options::{FilterDirective, SortDirective};
    use crate::api::query::orderby::SortDirection;

    #[test]
    fn test_basic_query_builder() {
        let query = QueryBuilder::new("bookings")
            .select("id, status")
            .filter(Filter::eq("status", "unconfirmed"))
            .newest_first()
            .range(0, 9)
            .count()
            .build();

        assert_eq!(query.table, "bookings");
        assert_eq!(query.projection(), "id,status");
        assert!(query.filter.is_some());
        assert_eq!(query.range, Some(PageWindow { from: 0, to: 9 }));
        assert!(query.count);
        assert!(!query.single);
    }

    #[test]
    fn test_status_filter_issues_equality() {
        let options = QueryOptions::new().filter(FilterDirective::new("status", "checked-in"));
        let query = QueryBuilder::from_options("bookings", "*", &options, 10).build();

        assert_eq!(query.filter, Some(Filter::eq("status", "checked-in")));
        assert!(query.orderby.to_param_string().is_none());
        assert!(query.range.is_none());
    }

    #[test]
    fn test_options_compose_all_stages() {
        let options = QueryOptions::new()
            .filter(FilterDirective::new("total_price", 5000).with_method(FilterMethod::Gte))
            .sort_by(SortDirective::new("start_date", SortDirection::Desc))
            .page(2);
        let query = QueryBuilder::from_options("bookings", "*", &options, 10).build();

        assert_eq!(query.filter, Some(Filter::gte("total_price", 5000)));
        assert_eq!(query.orderby.to_param_string(), Some("start_date.desc".to_string()));
        assert_eq!(query.range, Some(PageWindow { from: 10, to: 19 }));
    }

    #[test]
    fn test_empty_options_are_noops() {
        let query = QueryBuilder::from_options("bookings", "*", &QueryOptions::default(), 10).build();

        assert!(query.filter.is_none());
        assert!(query.orderby.clauses().is_empty());
        assert!(query.range.is_none());
    }

    #[test]
    fn test_single_by_id() {
        let query = QueryBuilder::new("bookings").by_id(42).single().build();

        assert!(query.single);
        assert_eq!(query.filter, Some(Filter::eq("id", 42)));
    }
}
