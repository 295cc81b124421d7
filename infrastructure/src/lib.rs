//! Infrastructure layer for tripchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLogConfig, FileServerConfig,
    FileTuiConfig,
};
pub use http::{error::HttpGatewayError, gateway::HttpItineraryGateway};
