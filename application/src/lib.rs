//! Application layer for tripchat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::itinerary_gateway::{GatewayError, ItineraryGateway};
pub use use_cases::chat_controller::ChatController;
pub use use_cases::request_itinerary::RequestItineraryUseCase;
pub use use_cases::submit_message::ChatInputHandler;
