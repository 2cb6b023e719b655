//! The ordered, append-only log of observed frames.
//!
//! Owned and populated by the capture/send pipeline; the filter never
//! writes to it. Rows are numbered densely from zero and timestamps are
//! elapsed seconds since the session start. Restarting a session empties
//! the log and records a new wall-clock start.

use chrono::{DateTime, Local};

use crate::frame::Frame;

/// One row of the log: a frame plus its position and observation time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Ordinal position in the log, assigned on append.
    pub row: usize,
    /// Elapsed seconds since session start.
    pub time: f64,
    pub frame: Frame,
}

/// Append-only sequence of [`FrameRecord`]s for one capture session.
#[derive(Debug, Clone)]
pub struct FrameLog {
    records: Vec<FrameRecord>,
    session_start: DateTime<Local>,
}

impl Default for FrameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLog {
    /// Create an empty log with the session start set to now.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            session_start: Local::now(),
        }
    }

    /// Append a frame observed at `time` (elapsed seconds). Returns the
    /// row index it was assigned.
    pub fn append(&mut self, frame: Frame, time: f64) -> usize {
        let row = self.records.len();
        self.records.push(FrameRecord { row, time, frame });
        row
    }

    pub fn get(&self, row: usize) -> Option<&FrameRecord> {
        self.records.get(row)
    }

    pub fn last(&self) -> Option<&FrameRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all rows in log order.
    pub fn iter(&self) -> impl Iterator<Item = &FrameRecord> {
        self.records.iter()
    }

    /// Wall-clock time at which the current session started. Record
    /// timestamps are relative to this instant.
    pub fn session_start(&self) -> DateTime<Local> {
        self.session_start
    }

    /// Empty the log for a new capture/simulation session and record a
    /// new session start.
    pub fn restart(&mut self) {
        self.records.clear();
        self.session_start = Local::now();
    }
}
