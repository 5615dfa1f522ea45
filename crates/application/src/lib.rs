//! Application layer - Use cases and orchestration
//!
//! Contains location resolution, the forecast orchestrator and the services
//! built around it, plus the port definitions that infrastructure adapters
//! implement.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
