//! Error types for the HTTP gateway

use thiserror::Error;
use tripchat_application::GatewayError;

/// Errors that can occur when talking to the itinerary server
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode reply (status {status}): {error}\nRaw body: {body}")]
    Decode {
        status: u16,
        error: String,
        body: String,
    },
}

impl From<HttpGatewayError> for GatewayError {
    fn from(err: HttpGatewayError) -> Self {
        match err {
            HttpGatewayError::Transport(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            HttpGatewayError::Transport(e) => GatewayError::RequestFailed(e.to_string()),
            decode @ HttpGatewayError::Decode { .. } => {
                GatewayError::InvalidResponse(decode.to_string())
            }
        }
    }
}
