//! Append-only transcript of the conversation

use super::entities::{Message, PLACEHOLDER_TEXT, Sender};
use super::reply::ReplyOutcome;
use super::value_objects::{MessageId, SubmissionId};
use crate::core::error::DomainError;

/// Ordered message history (Aggregate)
///
/// Messages are only ever appended. The one permitted mutation is settling a
/// pending placeholder, which is addressed by [`SubmissionId`] rather than by
/// position so concurrent submissions cannot overwrite each other's reply.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Sender::User, text.into(), None)
    }

    /// Append the waiting placeholder for `submission`
    pub fn push_placeholder(&mut self, submission: SubmissionId) -> MessageId {
        self.push(Sender::Bot, PLACEHOLDER_TEXT.to_string(), Some(submission))
    }

    /// Replace the pending placeholder for `submission` with the outcome text.
    ///
    /// Fails if no such placeholder exists or it has already been settled.
    pub fn settle_placeholder(
        &mut self,
        submission: SubmissionId,
        outcome: &ReplyOutcome,
    ) -> Result<MessageId, DomainError> {
        let message = self
            .messages
            .iter_mut()
            .rev()
            .find(|m| m.is_pending() && m.submission() == Some(submission))
            .ok_or(DomainError::UnknownSubmission(submission))?;
        message.settle(outcome.display_text(), outcome.is_failure());
        Ok(message.id())
    }

    fn push(&mut self, sender: Sender, text: String, submission: Option<SubmissionId>) -> MessageId {
        let id = MessageId::new(self.messages.len() as u64);
        self.messages.push(Message::new(id, sender, text, submission));
        id
    }
}
