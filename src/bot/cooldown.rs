//! Per-command, per-user cooldown tracking.
//!
//! Each successful dispatch of a command records an expiry timestamp for the
//! invoking user; until it passes, further dispatches of the same command by the
//! same user are denied. Entries are evicted by a deferred timer task; eviction
//! is advisory only, since a stale entry is also superseded the next time the
//! check allows the user through.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Fixed cooldown window applied to every command.
const COOLDOWN_WINDOW_MS: i64 = 3000;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownGate {
    /// The dispatch may proceed; a new cooldown window was recorded.
    Allowed,
    /// The user is still cooling down; no state was mutated.
    Denied {
        /// When the user's current window expires.
        retry_at: DateTime<Utc>,
    },
}

/// Tracks cooldown windows per command and user.
///
/// The map is the only mutable state shared across concurrent dispatches. The
/// check-and-record step holds the lock for its whole critical section and never
/// awaits inside it, so a read-check and its write-record cannot interleave with
/// another dispatch for the same key.
pub struct CooldownTracker {
    entries: Arc<Mutex<HashMap<String, HashMap<u64, DateTime<Utc>>>>>,
    window: Duration,
}

impl CooldownTracker {
    /// Creates a tracker with the fixed 3-second window.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            window: Duration::milliseconds(COOLDOWN_WINDOW_MS),
        }
    }

    /// Checks whether a user may dispatch a command, recording a new window if so.
    ///
    /// If the user has an unexpired entry for this command the call returns
    /// `Denied` with the existing expiry and mutates nothing. Otherwise the entry
    /// is replaced with `now + window`, its removal is scheduled, and the call
    /// returns `Allowed`.
    ///
    /// # Arguments
    /// - `command` - Name of the command being dispatched
    /// - `user_id` - Discord user ID of the invoker
    /// - `now` - Current time, passed in so tests can control the clock
    pub fn check_and_record(&self, command: &str, user_id: u64, now: DateTime<Utc>) -> CooldownGate {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let timestamps = entries.entry(command.to_string()).or_default();

        if let Some(&expires_at) = timestamps.get(&user_id) {
            if now < expires_at {
                return CooldownGate::Denied {
                    retry_at: expires_at,
                };
            }
        }

        timestamps.insert(user_id, now + self.window);
        drop(entries);

        self.schedule_eviction(command.to_string(), user_id);

        CooldownGate::Allowed
    }

    /// Schedules the advisory removal of an entry once its window has passed.
    ///
    /// The removal re-checks the stored expiry so a newer window recorded in the
    /// meantime survives its predecessor's timer.
    fn schedule_eviction(&self, command: String, user_id: u64) {
        let entries = Arc::clone(&self.entries);
        let sleep = std::time::Duration::from_millis(COOLDOWN_WINDOW_MS as u64);

        tokio::spawn(async move {
            tokio::time::sleep(sleep).await;

            let mut entries = entries.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(timestamps) = entries.get_mut(&command) {
                if timestamps
                    .get(&user_id)
                    .is_some_and(|&expires_at| expires_at <= Utc::now())
                {
                    timestamps.remove(&user_id);
                }
            }
        });
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new()
    }
}
