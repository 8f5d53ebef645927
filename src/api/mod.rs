//! Hosted backend API module
//!
//! Capability traits for tables, auth and storage, the query builder, and
//! the reqwest-based client that talks to the real service.

pub mod auth;
pub mod backend;
pub mod client;
pub mod constants;
pub mod logging;
pub mod models;
pub mod operations;
pub mod query;
pub mod storage;
pub mod tables;

pub use backend::{Auth, FileUpload, Storage, Tables};
pub use client::{BackendClient, BackendError};
pub use logging::{ApiLogger, LogLevel, MonitoringConfig};
pub use models::{Session, Signup, User, UserAttributes, UserMetadata};
pub use operations::{Operation, OperationResult};
pub use query::{
    Filter, FilterDirective, FilterMethod, FilterValue, OrderBy, PageWindow, Query, QueryBuilder, QueryOptions,
    QueryResult, SortDirection, SortDirective,
};
