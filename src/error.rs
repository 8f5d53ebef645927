//! Failure taxonomy surfaced to callers
//!
//! Each variant carries only a human-readable message. The underlying backend
//! error is logged where it happens and not propagated.

use crate::api::BackendError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Update(String),
    #[error("{0}")]
    Delete(String),
    #[error("{0}")]
    Upload(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    InvalidTransition(String),
}

impl DashboardError {
    pub fn message(&self) -> &str {
        match self {
            DashboardError::Fetch(m)
            | DashboardError::NotFound(m)
            | DashboardError::Update(m)
            | DashboardError::Delete(m)
            | DashboardError::Upload(m)
            | DashboardError::Auth(m)
            | DashboardError::InvalidTransition(m) => m,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Log a backend failure and replace it with a fixed message
pub(crate) fn logged(
    make: fn(String) -> DashboardError,
    message: &str,
) -> impl FnOnce(anyhow::Error) -> DashboardError + '_ {
    move |error| {
        log::error!("{}: {:#}", message, error);
        make(message.to_string())
    }
}

/// Log a backend failure and surface the provider's own message
pub(crate) fn provider(make: fn(String) -> DashboardError) -> impl FnOnce(anyhow::Error) -> DashboardError {
    move |error| {
        log::error!("{:#}", error);
        let message = match error.downcast_ref::<BackendError>() {
            Some(backend) => backend.message.clone(),
            None => error.to_string(),
        };
        make(message)
    }
}
