use crate::api::{MonitoringConfig, Session};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_URL: &str = "OASIS_URL";
pub const ENV_ANON_KEY: &str = "OASIS_ANON_KEY";
pub const ENV_PAGE_SIZE: &str = "OASIS_PAGE_SIZE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,
}

fn default_page_size() -> u32 {
    crate::api::constants::PAGE_SIZE
}

fn default_recent_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_days: default_recent_days(),
        }
    }
}

/// Per-user directory holding config, session and log file
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = if cfg!(target_os = "linux") {
        // Use XDG config directory on Linux
        dirs::config_dir()
            .context("Failed to get XDG config directory")?
            .join("oasis-admin")
    } else {
        // Use home directory with dot prefix on Windows/Mac
        dirs::home_dir()
            .context("Failed to get home directory")?
            .join(".oasis-admin")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
        info!("Created config directory: {:?}", config_dir);
    }

    Ok(config_dir)
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load the config file, then apply environment overrides (`.env` included)
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::load_from(&Self::get_config_path()?)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        if config.settings.page_size == 0 {
            warn!(
                "Ignoring page_size = 0 in {:?}, using {}",
                config_path,
                default_page_size()
            );
            config.settings.page_size = default_page_size();
        }

        debug!("Loaded config for backend {}", config.backend.url);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Environment values win over the file
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_URL) {
            self.backend.url = url;
        }
        if let Some(key) = lookup(ENV_ANON_KEY) {
            self.backend.anon_key = key;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.parse::<u32>() {
                Ok(size) if size > 0 => self.settings.page_size = size,
                _ => warn!("Ignoring {}={}: not a positive number", ENV_PAGE_SIZE, raw),
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.backend.url.is_empty() && !self.backend.anon_key.is_empty()
    }

    pub fn set_backend(&mut self, url: String, anon_key: String) -> Result<()> {
        info!("Setting backend to: {}", url);
        self.backend = BackendConfig { url, anon_key };
        self.save()
    }
}

/// Provider session persisted between CLI runs
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(config_dir()?.join("session.json")))
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {:?}", self.path))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", self.path))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        fs::write(&self.path, content).with_context(|| format!("Failed to write session file: {:?}", self.path))?;
        debug!("Session stored at {:?}", self.path);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file: {:?}", self.path))?;
        }
        Ok(())
    }
}
