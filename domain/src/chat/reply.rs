//! Request/reply shapes for the itinerary endpoint and their interpretation

use super::value_objects::SubmissionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when the server answered without a usable `response` field
pub const SERVER_FAILURE_TEXT: &str = "❌ Failed to get response from server.";

/// Shown when the request could not complete or the reply was not JSON
pub const TRANSPORT_FAILURE_TEXT: &str = "❌ Error connecting to server.";

/// Body of `POST /generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub message: String,
}

impl GenerateRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parsed reply body.
///
/// Deserializes from any JSON value. `response` is kept only when it is a
/// non-empty string; every other shape counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct GenerateReply {
    pub response: Option<String>,
}

impl GenerateReply {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<Value> for GenerateReply {
    fn from(value: Value) -> Self {
        let response = value
            .get("response")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { response }
    }
}

/// Terminal outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The server's `response` text
    Itinerary(String),
    /// Reply received but without a usable `response`
    ServerFailure,
    /// Request failed or reply could not be parsed
    TransportFailure,
}

impl ReplyOutcome {
    pub fn from_reply(reply: GenerateReply) -> Self {
        match reply.response {
            Some(text) => ReplyOutcome::Itinerary(text),
            None => ReplyOutcome::ServerFailure,
        }
    }

    /// Text that replaces the placeholder
    pub fn display_text(&self) -> &str {
        match self {
            ReplyOutcome::Itinerary(text) => text,
            ReplyOutcome::ServerFailure => SERVER_FAILURE_TEXT,
            ReplyOutcome::TransportFailure => TRANSPORT_FAILURE_TEXT,
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, ReplyOutcome::Itinerary(_))
    }
}

/// Outcome of one submission, addressed to its placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub submission: SubmissionId,
    pub outcome: ReplyOutcome,
}

impl Resolution {
    pub fn new(submission: SubmissionId, outcome: ReplyOutcome) -> Self {
        Self {
            submission,
            outcome,
        }
    }
}
