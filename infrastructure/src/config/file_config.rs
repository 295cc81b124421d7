//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:5000"
//! endpoint = "/generate"
//! cookie = "session=..."
//!
//! [tui]
//! mouse = true
//! show_help_on_start = false
//!
//! [log]
//! file = "/tmp/tripchat.log"
//! ```

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("server.base_url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("server.endpoint must start with '/', got {0:?}")]
    InvalidEndpoint(String),
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Scheme, host and port of the itinerary server
    pub base_url: String,
    /// Path of the generate endpoint
    pub endpoint: String,
    /// Value for the `Cookie` header (the server keys logins off a session cookie)
    pub cookie: Option<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint: "/generate".to_string(),
            cookie: None,
        }
    }
}

impl FileServerConfig {
    /// Full URL of the generate endpoint
    pub fn endpoint_url(&self) -> Result<Url, ConfigValidationError> {
        if !self.endpoint.starts_with('/') {
            return Err(ConfigValidationError::InvalidEndpoint(self.endpoint.clone()));
        }

        let base = Url::parse(&self.base_url)
            .map_err(|e| ConfigValidationError::InvalidBaseUrl(format!("{} ({})", self.base_url, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigValidationError::UnsupportedScheme(base.scheme().to_string()));
        }

        // Keep any path prefix on the base URL ("http://host/app" + "/generate")
        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), self.endpoint);
        Url::parse(&joined).map_err(|e| ConfigValidationError::InvalidBaseUrl(format!("{} ({})", joined, e)))
    }
}

/// Raw TUI configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Capture the mouse (send button clicks, wheel scrolling)
    pub mouse: bool,
    /// Open the help overlay on startup
    pub show_help_on_start: bool,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            show_help_on_start: false,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Log file for TUI sessions (defaults to the platform data dir)
    pub file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub tui: FileTuiConfig,
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.endpoint_url().map(|_| ())
    }

    /// Render the configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
