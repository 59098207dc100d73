//! Application settings loaded from `config.toml` and the environment.
//!
//! Every field has a default, so the file is optional. Environment variables
//! (typically provided through `.env`) override whatever the file says.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_VAR: &str = "LEGALDESK_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Runtime settings for the HTTP server and its storage
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// `SeaORM` connection string
    pub database_url: String,
    /// Directory holding uploaded document bytes
    pub uploads_dir: PathBuf,
    /// Allowed CORS origins; `"*"` allows any origin
    pub cors_origins: Vec<String>,
    /// Largest accepted request body for document uploads
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            uploads_dir: PathBuf::from("uploads"),
            cors_origins: vec!["*".to_string()],
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl Settings {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Applies overrides from a variable lookup (the process environment in production).
    ///
    /// Recognised variables: `APP_HOST`, `APP_PORT`, `DATABASE_URL`, `UPLOADS_DIR`,
    /// `CORS_ORIGINS` (comma separated) and `MAX_UPLOAD_BYTES`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("APP_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.port = port.trim().parse().map_err(|e| Error::Config {
                message: format!("APP_PORT must be a valid port number: {e}"),
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(dir) = lookup("UPLOADS_DIR") {
            self.uploads_dir = PathBuf::from(dir);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        if let Some(limit) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = limit.trim().parse().map_err(|e| Error::Config {
                message: format!("MAX_UPLOAD_BYTES must be a byte count: {e}"),
            })?;
        }
        Ok(self)
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for [`Settings`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.as_ref().display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Loads the settings the server runs with.
///
/// Reads the file named by `LEGALDESK_CONFIG` (or `./config.toml`) when it exists,
/// falls back to defaults otherwise, then applies environment overrides.
pub fn load_settings() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let settings = if Path::new(&path).exists() {
        tracing::debug!("Loading settings from {path}");
        load_config(&path)?
    } else {
        tracing::debug!("No settings file at {path}, using defaults");
        Settings::default()
    };

    settings.apply_overrides(|key| std::env::var(key).ok())
}
