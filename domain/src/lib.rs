//! Domain layer for tripchat
//!
//! This crate contains the core chat entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: the ordered, append-only history of messages
//! - **Placeholder**: the bot message shown while a submission waits for
//!   its reply, tagged with the submission's [`SubmissionId`]
//! - **Submission**: one send action: a user message, a placeholder and a
//!   single request to the itinerary endpoint

pub mod chat;
pub mod core;

// Re-export commonly used types
pub use chat::{
    entities::{Message, PLACEHOLDER_TEXT, Sender, Submission},
    input::InputField,
    reply::{
        GenerateReply, GenerateRequest, ReplyOutcome, Resolution, SERVER_FAILURE_TEXT,
        TRANSPORT_FAILURE_TEXT,
    },
    state::ChatState,
    transcript::Transcript,
    value_objects::{MessageId, SubmissionId},
};
pub use core::{error::DomainError, string::preview};
