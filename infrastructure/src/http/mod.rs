//! HTTP adapter for the itinerary endpoint.
//!
//! - [`gateway::HttpItineraryGateway`]: `POST /generate` over reqwest
//! - [`error::HttpGatewayError`]: adapter errors, mapped onto the port's
//!   [`GatewayError`](tripchat_application::GatewayError)

pub mod error;
pub mod gateway;
