//! # Configuration Module
//!
//! Data directory discovery and the optional runtime configuration file.
//!
//! ## Locations
//!
//! - catalog database: `<data dir>/retailtunes/catalog.db`
//!   (`~/.local/share/retailtunes/catalog.db` on Linux)
//! - configuration: `<config dir>/retailtunes/config.json`
//!   (`~/.config/retailtunes/config.json` on Linux)
//!
//! Every field of the configuration file is optional:
//!
//! ```json
//! {
//!   "catalog_path": "/srv/store/catalog.db",
//!   "playlist_minutes": 90,
//!   "recommendation_count": 8,
//!   "scoring": { "confidence": { "weather_match": 4.0 } }
//! }
//! ```

use crate::algorithm::ScoringContext;
use crate::engine::{DEFAULT_PLAYLIST_MINUTES, DEFAULT_RECOMMENDATIONS};
use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "retailtunes";

/// Returns the platform-appropriate data directory, creating it if needed.
///
/// # Errors
///
/// Fails if the system data directory is unknown or cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!("Could not determine system data directory. Please ensure your platform supports standard data directories.")
    })?;

    let app_dir = data_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create data directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir)
}

/// Default location of the catalog database.
///
/// # Errors
///
/// See [`get_data_dir`].
pub fn get_catalog_db_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("catalog.db"))
}

/// Default location of the catalog database, without creating any directory.
fn default_catalog_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|data_dir| data_dir.join(APP_DIR).join("catalog.db"))
}

/// Location of the configuration file. The file itself may not exist.
///
/// # Errors
///
/// Fails if the system configuration directory is unknown.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine system configuration directory."))?;
    Ok(config_dir.join(APP_DIR).join("config.json"))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Catalog to load; SQLite unless the extension is `.json`.
    pub catalog_path: Option<PathBuf>,
    pub playlist_minutes: u32,
    pub recommendation_count: usize,
    pub scoring: ScoringContext,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            playlist_minutes: DEFAULT_PLAYLIST_MINUTES,
            recommendation_count: DEFAULT_RECOMMENDATIONS,
            scoring: ScoringContext::default(),
        }
    }
}

impl RuntimeConfig {
    /// Reads `path`, or returns the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed, or holds
    /// scoring weights that fail [`ScoringContext::validate`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config
            .scoring
            .validate()
            .with_context(|| format!("Invalid scoring weights in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reads the configuration from its default location.
    ///
    /// # Errors
    ///
    /// See [`RuntimeConfig::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Overrides the catalog location.
    #[must_use]
    pub fn with_catalog_path(self, catalog_path: Option<PathBuf>) -> Self {
        match catalog_path {
            Some(path) => Self { catalog_path: Some(path), ..self },
            None => self,
        }
    }

    /// The catalog to load, made absolute.
    ///
    /// Falls back to the default catalog database when nothing is configured
    /// and that database exists. `None` means the built-in sample catalog.
    ///
    /// # Errors
    ///
    /// Fails if a relative path cannot be resolved against the working directory.
    pub fn resolve_catalog_path(&self) -> Result<Option<PathBuf>> {
        let configured = match &self.catalog_path {
            Some(path) => Some(path.clone()),
            None => match default_catalog_db_path() {
                Some(path) => Some(path).filter(|path| path.exists()),
                None => {
                    warn!("Could not determine system data directory, skipping the default catalog database");
                    None
                }
            },
        };

        configured
            .map(|path| {
                path.absolutize()
                    .map(|absolute| absolute.into_owned())
                    .with_context(|| format!("Failed to resolve catalog path {}", path.display()))
            })
            .transpose()
    }
}
