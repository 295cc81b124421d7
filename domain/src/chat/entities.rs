//! Chat domain entities

use super::value_objects::{MessageId, SubmissionId};

/// Text shown in a bot message while its submission is in flight
pub const PLACEHOLDER_TEXT: &str = "Generating itinerary... please wait ⏳";

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label shown above the message text
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Planner",
        }
    }
}

/// A message in the transcript (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    text: String,
    /// Set on bot placeholders; ties the message to its request
    submission: Option<SubmissionId>,
    /// True while the placeholder still waits for its reply
    pending: bool,
    /// Set when the placeholder was settled with a failure outcome
    failed: bool,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        sender: Sender,
        text: impl Into<String>,
        submission: Option<SubmissionId>,
    ) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            pending: submission.is_some(),
            submission,
            failed: false,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn submission(&self) -> Option<SubmissionId> {
        self.submission
    }

    /// Whether this is a placeholder that has not been resolved yet
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether this placeholder was settled with a failure outcome
    pub fn is_failure(&self) -> bool {
        self.failed
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub(crate) fn settle(&mut self, text: impl Into<String>, failed: bool) {
        self.text = text.into();
        self.pending = false;
        self.failed = failed;
    }
}

/// One user-initiated send action, ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    /// Trimmed user text, sent verbatim to the server
    pub text: String,
}
