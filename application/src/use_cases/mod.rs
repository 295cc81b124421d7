//! Use cases (application services)
//!
//! - [`submit_message`]: the chat input handler: submit and resolve
//! - [`request_itinerary`]: one request to the itinerary endpoint
//! - [`chat_controller`]: dispatches submissions as cancellable tasks

pub mod chat_controller;
pub mod request_itinerary;
pub mod submit_message;
