//! UI-state object owned by the chat input handler

use super::input::InputField;
use super::transcript::Transcript;

/// Everything the chat surface displays: the transcript and the input field.
///
/// Created once at startup and mutated only through the input handler.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub transcript: Transcript,
    pub input: InputField,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }
}
