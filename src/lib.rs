//! canview crate root: re-exports and module wiring.
//!
//! This crate provides the data layer of a raw CAN frame viewer:
//! - `frame`: frame identifiers, directions, and the dedup key type
//! - `log`: the ordered, append-only log of observed frames
//! - `filter`: the unique-key latest-value filter over that log
//! - `view`: the view model combining log and filter for a display layer
//! - `sink`: channels to feed frames in from a capture or send pipeline
//! - `events`: subscriber notifications for display layers
//! - `time_format`: timestamp rendering helpers
//! - `config`: shared view configuration
//! - `persistence`: save/load of view settings
//!
//! Rendering is deliberately absent: a display layer (table widget, TUI,
//! test harness) owns a [`view::FrameView`] and asks it, row by row,
//! whether that row carries the freshest frame for its key.

pub mod config;
pub mod events;
pub mod filter;
pub mod frame;
pub mod log;
pub mod persistence;
pub mod sink;
pub mod time_format;
pub mod view;

// Public re-exports for a compact external API
pub use config::ViewConfig;
pub use events::{EventController, EventFilter, EventKind, ViewEvent};
pub use filter::UniqueFrameFilter;
pub use frame::{Direction, Frame, FrameId, FrameKey};
pub use log::{FrameLog, FrameRecord};
pub use sink::{channel_frames, FrameCommand, FrameSink};
pub use time_format::{ElapsedFormatter, TimeFormat, TimeResolution, WallClockFormatter};
pub use view::FrameView;
