//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Variables inherited from the
//! legacy front-end build (`VITE_*`) are honoured as fallbacks.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Password used until the administrator sets their own
pub const FALLBACK_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `content.json`
    pub data_dir: PathBuf,

    /// Factory-default admin password (configured or fallback)
    pub default_admin_password: String,

    /// Comma-separated list of allowed CORS origins (`CORS_ALLOWED_ORIGINS`).
    ///
    /// When unset any origin may call the API, but without credentials: a
    /// browser will not send the `isAuthenticated` cookie cross-origin, so an
    /// admin UI served from another origin must be listed here.
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let default_admin_password = env_or_legacy("ADMIN_PASSWORD", "VITE_ADMIN_PASSWORD")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| FALLBACK_ADMIN_PASSWORD.to_string());

        let config = Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            default_admin_password,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
        };

        Ok(config)
    }

    /// Path of the persisted content document
    pub fn content_file(&self) -> PathBuf {
        self.data_dir.join("content.json")
    }
}

/// Read `name`, falling back to its legacy `VITE_`-prefixed spelling
pub fn env_or_legacy(name: &str, legacy: &str) -> Option<String> {
    env::var(name).or_else(|_| env::var(legacy)).ok()
}
