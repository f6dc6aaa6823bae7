//! Per-user call history tracking.

use std::time::Instant;

/// The recorded timestamps of a single user's recent calls.
///
/// Entries are appended at check time, so the vector stays ordered oldest to
/// newest as long as the clock source is monotonic.
#[derive(Debug, Default)]
pub struct CallHistory {
    timestamps: Vec<Instant>,
}

impl CallHistory {
    /// Drop every timestamp at or before `cutoff`.
    ///
    /// Expired entries are permanently forgotten; there is no decay counting
    /// or partial credit.
    pub fn prune(&mut self, cutoff: Instant) {
        self.timestamps.retain(|t| *t > cutoff);
    }

    /// Record a call at the given instant.
    pub fn record(&mut self, at: Instant) {
        self.timestamps.push(at);
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the history holds no calls.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// The most recent recorded call, if any.
    pub fn newest(&self) -> Option<Instant> {
        self.timestamps.last().copied()
    }

    /// The oldest recorded call, if any.
    pub fn oldest(&self) -> Option<Instant> {
        self.timestamps.first().copied()
    }
}
