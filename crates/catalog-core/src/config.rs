//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! server, database, and image storage settings. Every section defaults
//! sensibly so a completely empty `{}` file is valid. The config is built once
//! at startup and passed explicitly to each component.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

/// Environment variable naming the front-end origin allowed by CORS.
pub const FRONT_URL_ENV: &str = "FRONT_URL";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub images: ImageConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_front_url(std::env::var(FRONT_URL_ENV).ok());
    }

    /// Replace the CORS origins with a single front-end URL, if one is given.
    pub fn apply_front_url(&mut self, front_url: Option<String>) {
        if let Some(url) = front_url.filter(|u| !u.trim().is_empty()) {
            self.server.cors_origins = vec![url];
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if self.server.cors_origins.is_empty() {
            warnings.push("server.cors_origins is empty; browsers will be refused".into());
        }

        if self.database.pool_size == 0 {
            warnings.push("database.pool_size is 0; it will be raised to 1".into());
        }

        if self.images.max_upload_bytes == 0 {
            warnings.push("images.max_upload_bytes is 0; every upload will be refused".into());
        }

        if !self.images.default_image.ends_with(".jpg") {
            warnings.push(format!(
                "images.default_image '{}' does not end with .jpg and can never be requested directly",
                self.images.default_image
            ));
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 9000,
            db_path: PathBuf::from("./data/catalog.db"),
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

/// Connection pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { pool_size: 4 }
    }
}

/// How stored image filenames are derived from an upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// SHA-256 of the uploaded filename's stem.
    #[default]
    Filename,
    /// SHA-256 of the uploaded bytes.
    Content,
}

/// Image storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub storage_dir: PathBuf,
    /// Filename (inside `storage_dir`) served when a requested image is missing.
    pub default_image: String,
    pub naming: NamingScheme,
    /// Largest accepted request body for an upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./data/images"),
            default_image: "default.jpg".into(),
            naming: NamingScheme::Filename,
            max_upload_bytes: 32 * 1024 * 1024,
        }
    }
}
