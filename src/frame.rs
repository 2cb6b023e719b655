//! Frame identifiers, transfer direction, and the dedup key type.
//!
//! The payload is opaque to this crate: nothing here interprets the
//! bytes, a display layer may render them with [`Frame::payload_hex`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a frame on the bus (11-bit or 29-bit ID).
pub type FrameId = u32;

/// Whether a frame was sent by this node or received from the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Received from the bus.
    Rx,
    /// Sent by this node.
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rx => write!(f, "RX"),
            Direction::Tx => write!(f, "TX"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "RX" | "rx" | "Rx" => Ok(Direction::Rx),
            "TX" | "tx" | "Tx" => Ok(Direction::Tx),
            other => Err(format!("Unknown direction: {:?}", other)),
        }
    }
}

/// The `(id, direction)` pair that groups frames for deduplication.
///
/// A single value type with structural equality and hashing, so the map
/// container enforces key uniqueness itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameKey {
    pub id: FrameId,
    pub direction: Direction,
}

impl FrameKey {
    pub fn new(id: FrameId, direction: Direction) -> Self {
        Self { id, direction }
    }
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}/{}", self.id, self.direction)
    }
}

/// One raw frame as observed on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: FrameId,
    pub direction: Direction,
    /// Raw data bytes. Opaque to this crate.
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(id: FrameId, direction: Direction, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            direction,
            payload: payload.into(),
        }
    }

    /// The dedup key of this frame.
    pub fn key(&self) -> FrameKey {
        FrameKey::new(self.id, self.direction)
    }

    /// Payload length in bytes (the DLC column of a raw view).
    pub fn dlc(&self) -> usize {
        self.payload.len()
    }

    /// Render the payload as space-separated uppercase hex, e.g. `"DE AD BE EF"`.
    pub fn payload_hex(&self) -> String {
        let mut out = String::with_capacity(self.payload.len() * 3);
        for (i, b) in self.payload.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:02X}", b));
        }
        out
    }
}

/// Ordered list of the columns a raw view displays, in display order.
///
/// Replaces the enum-range iteration trick some UI toolkits need; a
/// display layer iterates this slice directly.
pub const RAW_VIEW_COLUMNS: &[&str] = &["Row", "Time", "ID", "Dir", "DLC", "Data"];
