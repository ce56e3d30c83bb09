//! Infrastructure layer: configuration, logging, document handling, HTTP
//! surface, and application wiring.

pub mod config;
pub mod documents;
pub mod http;
pub mod logging;
pub mod setup;
