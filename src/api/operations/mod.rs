//! Table write operations
//!
//! Inserts, updates and deletes described as values, so they can be logged,
//! replayed as compensation, or checked by a fake backend in tests.

pub mod operation;

pub use operation::{Operation, OperationResult};
