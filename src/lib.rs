pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod mapping;
pub mod models;
pub mod repository;
pub mod ui;
pub mod workflows;

pub use error::{DashboardError, Result};
