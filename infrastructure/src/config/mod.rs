//! Configuration file loading for tripchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIPCHAT_*` environment variables (`TRIPCHAT_SERVER__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tripchat.toml` or `./.tripchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tripchat/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLogConfig, FileServerConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
