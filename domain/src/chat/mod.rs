//! Chat domain.
//!
//! - [`entities::Message`]: one rendered message, user or bot
//! - [`transcript::Transcript`]: append-only message history
//! - [`input::InputField`]: the editable text field
//! - [`state::ChatState`]: transcript + input, owned by the handler
//! - [`reply`]: `/generate` request/reply shapes and outcome texts

pub mod entities;
pub mod input;
pub mod reply;
pub mod state;
pub mod transcript;
pub mod value_objects;
