//! Cache implementations
//!
//! - `MokaSessionCache`: process-scoped in-memory session cache

mod moka_session_cache;

pub use moka_session_cache::MokaSessionCache;
