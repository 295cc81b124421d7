//! Presentation layer for tripchat
//!
//! This crate contains the CLI definition, the terminal chat UI, the
//! one-shot console mode and its output formatting.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use chat::OneShotChat;
pub use cli::commands::Cli;
pub use output::console::TranscriptFormatter;
pub use progress::reporter::WaitingSpinner;
pub use tui::TuiApp;
