//! Interactive terminal chat
//!
//! Ratatui front end over [`tripchat_application::ChatController`]: a
//! scrolling transcript, a message field with a send button and a status bar.

pub mod app;
pub mod keymap;
pub mod state;
pub mod widgets;

pub use app::{TuiApp, TuiOptions};
pub use state::TuiState;
