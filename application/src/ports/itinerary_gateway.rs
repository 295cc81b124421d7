//! Itinerary Gateway port
//!
//! Defines the interface for talking to the itinerary-generation server.

use async_trait::async_trait;
use thiserror::Error;
use tripchat_domain::{GenerateReply, GenerateRequest};

/// Errors that can occur during gateway operations.
///
/// Every variant is a transport failure from the chat's point of view: the
/// placeholder shows the connection error text.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to the itinerary endpoint
///
/// One call per submission; implementations must not retry.
#[async_trait]
pub trait ItineraryGateway: Send + Sync {
    /// Send the user's text and return the parsed reply body.
    ///
    /// A reply that parses as JSON is `Ok` whatever its shape or HTTP status;
    /// interpretation of `response` happens in the domain.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, GatewayError>;
}
