//! Request generations for last-request-wins
//!
//! Each new request takes a ticket; a result is applied only while its
//! ticket is still the latest one issued.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Monotonic request counter shared by one consumer
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Create a counter with no requests issued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    #[must_use]
    pub fn begin(&self) -> GenerationTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationTicket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Supersede every outstanding ticket without starting a request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// The latest generation issued
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// Proof of one request's place in its generation sequence
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl GenerationTicket {
    /// Generation number of this ticket
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Whether no newer request has started since this ticket was issued
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}
