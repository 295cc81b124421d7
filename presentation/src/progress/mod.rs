//! Progress display for one-shot mode

pub mod reporter;
