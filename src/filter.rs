//! The unique-key latest-value filter.
//!
//! Sits between the append-only [`FrameLog`](crate::log::FrameLog) and a
//! display layer and answers, per row, "is this the freshest frame for
//! its `(id, direction)` key?" without touching the log itself.
//!
//! The predicate compares a row's timestamp against the recorded maximum
//! for its key rather than looking at row order, so it stays O(1) per
//! row and gives the same answer regardless of the order in which the
//! display layer re-scans rows.

use std::collections::HashMap;

use crate::frame::FrameKey;

/// Latest-value filter state: per-key maximum timestamp plus an on/off flag.
///
/// All operations are infallible. Single-threaded by design: callers on
/// the thread owning the view interleave [`update`](Self::update) and
/// [`is_visible`](Self::is_visible) freely.
#[derive(Debug, Clone, Default)]
pub struct UniqueFrameFilter {
    /// Maximum timestamp seen per key since the last clear.
    latest: HashMap<FrameKey, f64>,
    /// Whether filtering is currently enforced.
    active: bool,
}

impl UniqueFrameFilter {
    /// Create an inactive filter with no recorded keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation of `key` at `timestamp`.
    ///
    /// Inserts unknown keys; for known keys the stored timestamp is
    /// replaced when `timestamp >= stored`, so of two observations with
    /// an identical timestamp the later `update` call wins. Out-of-order
    /// timestamps are tolerated: the map keeps the maximum seen.
    pub fn update(&mut self, key: FrameKey, timestamp: f64) {
        match self.latest.get_mut(&key) {
            Some(stored) => {
                if timestamp >= *stored {
                    *stored = timestamp;
                }
            }
            None => {
                self.latest.insert(key, timestamp);
            }
        }
    }

    /// Whether the row carrying `(key, timestamp)` should be displayed.
    ///
    /// Always `true` while the filter is inactive. Otherwise `true` iff
    /// `timestamp` equals the recorded maximum for `key`; an unrecorded
    /// key is not visible (fail-closed) rather than an error.
    pub fn is_visible(&self, key: FrameKey, timestamp: f64) -> bool {
        if !self.active {
            return true;
        }
        match self.latest.get(&key) {
            Some(stored) => *stored == timestamp,
            None => false,
        }
    }

    /// Forget all recorded keys. Leaves the active flag untouched.
    pub fn clear(&mut self) {
        self.latest.clear();
    }

    /// Turn filtering on or off. Recorded keys are kept either way; the
    /// display layer should run a full re-filter pass afterwards.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flip the active flag.
    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Whether filtering is currently enforced.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of distinct keys recorded since the last clear.
    pub fn tracked_keys(&self) -> usize {
        self.latest.len()
    }

    /// The recorded maximum timestamp for `key`, if any.
    pub fn latest_for(&self, key: FrameKey) -> Option<f64> {
        self.latest.get(&key).copied()
    }
}

// tests live in `tests/unique_filter.rs`
