//! Chat input handler.
//!
//! Mediates between the input field and the transcript: `submit` performs the
//! optimistic local render (user message + placeholder), `resolve` replaces
//! the placeholder once the reply for that submission is known.

use tracing::debug;
use tripchat_domain::{
    ChatState, DomainError, InputField, MessageId, Resolution, Submission, SubmissionId, preview,
};

/// Owns the chat UI state and is the only code that mutates it.
#[derive(Debug)]
pub struct ChatInputHandler {
    state: ChatState,
    next_submission: SubmissionId,
}

impl Default for ChatInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatInputHandler {
    pub fn new() -> Self {
        Self {
            state: ChatState::new(),
            next_submission: SubmissionId::new(1),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Mutable access to the input field for editing keystrokes
    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.state.input
    }

    /// Submit whatever is currently in the input field
    pub fn submit_input(&mut self) -> Option<Submission> {
        let raw = self.state.input.value().to_string();
        self.submit(&raw)
    }

    /// Submit `text`.
    ///
    /// Returns `None` without touching any state when `text` is empty after
    /// trimming. Otherwise appends the user message, clears the input field,
    /// appends a placeholder tagged with a fresh [`SubmissionId`] and returns
    /// the submission to dispatch.
    pub fn submit(&mut self, text: &str) -> Option<Submission> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_submission;
        self.next_submission = id.next();

        self.state.transcript.push_user(text);
        self.state.input.clear();
        self.state.transcript.push_placeholder(id);

        debug!(submission = %id, text = %preview(text, 60), "Submitted message");

        Some(Submission {
            id,
            text: text.to_string(),
        })
    }

    /// Replace the placeholder of `resolution.submission` with the outcome text
    pub fn resolve(&mut self, resolution: &Resolution) -> Result<MessageId, DomainError> {
        let message_id = self
            .state
            .transcript
            .settle_placeholder(resolution.submission, &resolution.outcome)?;
        debug!(
            submission = %resolution.submission,
            message = %message_id,
            failure = resolution.outcome.is_failure(),
            "Resolved placeholder"
        );
        Ok(message_id)
    }
}
