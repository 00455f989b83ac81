//! Per-run scan context.

use std::sync::atomic::{AtomicU64, Ordering};

/// Context threaded through the catalog fetcher, tree collector and content cache.
///
/// Only used for operator-facing progress reporting; nothing in the pipeline
/// branches on these counters.
#[derive(Debug, Default)]
pub struct Session {
    requests: AtomicU64,
    skipped: AtomicU64,
}

impl Session {
    /// Creates a session with a zeroed request counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one upstream API request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of upstream requests made so far.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Records one repository left out of the catalog.
    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of repositories left out of the catalog.
    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_requests() {
        let session = Session::new();
        session.record_request();
        session.record_request();
        assert_eq!(session.requests(), 2);
    }
}
