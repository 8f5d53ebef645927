//! Wiring from config to repositories for one CLI run

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::api::BackendClient;
use crate::config::{Config, SessionStore};
use crate::dates::SystemClock;
use crate::repository::{BookingRepository, CabinRepository, SessionGateway, SettingsRepository};

pub struct AppContext {
    pub config: Config,
    pub client: Arc<BackendClient>,
    sessions: SessionStore,
}

impl AppContext {
    /// Load config, connect, and restore the stored session if there is one
    pub async fn load() -> Result<Self> {
        let config = Config::load()?;
        if !config.is_configured() {
            anyhow::bail!("No backend configured. Run 'oasis-admin auth setup' first.");
        }

        let client = BackendClient::with_monitoring(
            config.backend.url.clone(),
            config.backend.anon_key.clone(),
            config.monitoring.clone(),
        )
        .context("Failed to create backend client")?;

        let sessions = SessionStore::default_location()?;
        if let Some(session) = sessions.load()? {
            debug!("Restored session for user {}", session.user.id);
            client.set_session(Some(session)).await;
        }

        Ok(Self {
            config,
            client: Arc::new(client),
            sessions,
        })
    }

    pub fn bookings(&self) -> BookingRepository {
        BookingRepository::new(self.client.clone())
            .with_clock(Arc::new(SystemClock))
            .with_page_size(self.config.settings.page_size)
    }

    pub fn cabins(&self) -> CabinRepository {
        CabinRepository::new(self.client.clone(), self.client.clone())
    }

    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.client.clone())
    }

    pub fn session(&self) -> SessionGateway {
        SessionGateway::new(self.client.clone(), self.client.clone())
    }

    /// Write the client's current session to disk, or remove it after sign-out
    pub async fn persist_session(&self) -> Result<()> {
        match self.client.session().await {
            Some(session) => self.sessions.save(&session),
            None => self.sessions.clear(),
        }
    }
}
