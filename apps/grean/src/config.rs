//! # Configuration
//!
//! Site configuration, loaded from a TOML file. Every field has a default, so
//! an empty file (or no file at all) yields the standard page.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [timing]
//! tick_interval_ms = 200
//! progress_step = 5
//!
//! [hero]
//! phone = "(+251) 913 330000"
//! ```
//!
//! CORS and rate limiting are configured through environment variables, see
//! [`crate::api`].

use grean_core::{GreanError, HeroContent, RevealTiming};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum accepted config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub timing: RevealTiming,
    pub hero: HeroContent,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, GreanError> {
        let config: AppConfig = toml::from_str(source)
            .map_err(|e| GreanError::SerializationError(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, GreanError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            GreanError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(GreanError::InvalidConfig(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            GreanError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, GreanError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), GreanError> {
        self.timing.validate()?;
        if self.hero.visualization_url.trim().is_empty() {
            return Err(GreanError::InvalidConfig(
                "hero.visualization_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
