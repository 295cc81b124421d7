//! One-shot chat
//!
//! Sends a single message through the chat controller without the TUI.

mod oneshot;

pub use oneshot::OneShotChat;
