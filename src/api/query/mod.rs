//! PostgREST Query Builder Module
//!
//! Provides fluent API for building and executing table reads against the backend.
//! Follows the same pattern as operations with Query (reusable) and QueryBuilder (fluent).

pub mod builder;
pub mod filters;
pub mod options;
pub mod orderby;
pub mod query;
pub mod result;

pub use builder::QueryBuilder;
pub use filters::{Filter, FilterMethod, FilterValue};
pub use options::{FilterDirective, QueryOptions, SortDirective};
pub use orderby::{OrderBy, OrderByClause, SortDirection};
pub use query::{PageWindow, Query};
pub use result::QueryResult;
