//! Core flood control limiter implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use super::history::CallHistory;
use crate::error::Result;

/// Admission control interface for flood checks.
///
/// Abstracts over limiter implementations so a host can swap in a
/// storage-backed variant without touching call sites. Implementations must
/// surface backend failures through the error side rather than masking them
/// as an allow or deny decision.
#[async_trait]
pub trait FloodControl: Send + Sync {
    /// Record an attempt for `user_id` now and report whether it is within
    /// the allowed rate.
    ///
    /// `Ok(false)` means the limit is reached. It is an expected outcome
    /// signaling "try again later", not a failure.
    async fn check(&self, user_id: i64) -> Result<bool>;
}

/// A per-user sliding-window rate limiter.
///
/// Tracks the timestamps of each user's recent calls and admits a call only
/// while the count within the trailing window stays at or below `max_calls`.
/// Every call is recorded whether admitted or not; a rejected caller keeps
/// pressing against its own window.
///
/// All state sits behind a single mutex, so the read-prune-append sequence
/// for any user is atomic with respect to every concurrent call. State is
/// memory-resident only and lost on restart.
pub struct SlidingWindowLimiter<C: Clock = SystemClock> {
    /// Call timestamps per user id
    history: Mutex<HashMap<i64, CallHistory>>,
    /// Trailing window defining "recent"
    window: Duration,
    /// Maximum admissible calls within the window
    max_calls: u64,
    /// Time source for check timestamps
    clock: C,
}

impl SlidingWindowLimiter<SystemClock> {
    /// Create a limiter using the system clock.
    pub fn new(window: Duration, max_calls: u64) -> Self {
        Self::with_clock(window, max_calls, SystemClock)
    }
}

impl<C: Clock> SlidingWindowLimiter<C> {
    /// Create a limiter with an injected time source.
    pub fn with_clock(window: Duration, max_calls: u64, clock: C) -> Self {
        Self {
            history: Mutex::new(HashMap::new()),
            window,
            max_calls,
            clock,
        }
    }

    /// Stored history length for a user.
    ///
    /// Returns `None` if the user has never been checked.
    pub fn history_len(&self, user_id: i64) -> Option<usize> {
        let history = self.history.lock();
        history.get(&user_id).map(|h| h.len())
    }

    /// Number of users with tracked history.
    pub fn tracked_users(&self) -> usize {
        let history = self.history.lock();
        history.len()
    }

    /// Clear all tracked history.
    ///
    /// This is primarily useful for testing.
    pub fn clear(&self) {
        let mut history = self.history.lock();
        history.clear();
    }

    /// Remove users whose entire history has fallen out of the window.
    ///
    /// The map otherwise grows by one entry per distinct user ever seen.
    /// Hosts with unbounded identity cardinality should call this
    /// periodically; checks themselves never drop map entries.
    pub fn purge_expired(&self) {
        let mut history = self.history.lock();
        let now = self.clock.now();
        let Some(cutoff) = now.checked_sub(self.window) else {
            return;
        };

        let before = history.len();
        history.retain(|_, h| matches!(h.newest(), Some(t) if t > cutoff));

        debug!(
            purged = before - history.len(),
            remaining = history.len(),
            "Purged expired users"
        );
    }
}

#[async_trait]
impl<C: Clock> FloodControl for SlidingWindowLimiter<C> {
    async fn check(&self, user_id: i64) -> Result<bool> {
        trace!(user_id, "Checking flood control");

        let allowed = {
            let mut history = self.history.lock();
            // The clock is read under the lock so per-user history order
            // matches lock acquisition order and stays chronological.
            let now = self.clock.now();

            let user_history = history.entry(user_id).or_insert_with(|| {
                debug!(user_id, "Tracking new user");
                CallHistory::default()
            });

            // checked_sub: process uptime may be shorter than the window, in
            // which case nothing can have expired yet.
            if let Some(cutoff) = now.checked_sub(self.window) {
                user_history.prune(cutoff);
            }
            user_history.record(now);

            user_history.len() as u64 <= self.max_calls
        };

        if !allowed {
            debug!(user_id, "Flood limit reached");
        }

        Ok(allowed)
    }
}
