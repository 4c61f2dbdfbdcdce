use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Hands out strictly increasing internal payment ids.
///
/// Safe to share between concurrent orchestrations; no two calls on the same
/// generator ever return the same id.
#[derive(Debug)]
pub struct InternalIdGenerator {
    next: AtomicU64,
}

impl InternalIdGenerator {
    /// Seeds the counter from the current wall-clock time in microseconds.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_micros() as u64)
            .unwrap_or(1);
        Self::starting_at(seed)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for InternalIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
