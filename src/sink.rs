//! Channel types for feeding frames into a view.
//!
//! The capture or send pipeline holds a cloneable [`FrameSink`] and
//! pushes commands over a `std::sync::mpsc` channel; the thread owning
//! the [`FrameView`](crate::view::FrameView) drains the receiver. All
//! state mutation happens on the owning thread, so the view itself
//! needs no locking.

use std::sync::mpsc::{Receiver, Sender};

use crate::frame::Frame;

/// Messages sent over the channel to drive the view.
#[derive(Debug)]
pub enum FrameCommand {
    /// Append one observed frame with its elapsed timestamp.
    Frame { frame: Frame, time: f64 },
    /// Switch the unique-key filter on or off.
    SetFilterActive(bool),
    /// Flip the unique-key filter.
    ToggleFilter,
    /// Forget the filter's recorded keys.
    ClearFilter,
    /// Restart the capture session: empty the log, clear the filter.
    RestartSession,
}

/// Convenience sender for feeding frames into a view.
#[derive(Clone)]
pub struct FrameSink {
    tx: Sender<FrameCommand>,
}

impl FrameSink {
    /// Send a single observed frame.
    pub fn send_frame(
        &self,
        frame: Frame,
        time: f64,
    ) -> Result<(), std::sync::mpsc::SendError<FrameCommand>> {
        self.tx.send(FrameCommand::Frame { frame, time })
    }

    /// Send a batch of observed frames (more efficient than one call per
    /// frame only in that it avoids repeated `Result` handling; each
    /// frame still travels as its own command).
    pub fn send_frames<I>(&self, frames: I) -> Result<(), std::sync::mpsc::SendError<FrameCommand>>
    where
        I: IntoIterator<Item = (Frame, f64)>,
    {
        for (frame, time) in frames {
            self.tx.send(FrameCommand::Frame { frame, time })?;
        }
        Ok(())
    }

    /// Switch the unique-key filter on or off.
    #[inline]
    pub fn set_filter_active(
        &self,
        active: bool,
    ) -> Result<(), std::sync::mpsc::SendError<FrameCommand>> {
        self.tx.send(FrameCommand::SetFilterActive(active))
    }

    /// Flip the unique-key filter.
    #[inline]
    pub fn toggle_filter(&self) -> Result<(), std::sync::mpsc::SendError<FrameCommand>> {
        self.tx.send(FrameCommand::ToggleFilter)
    }

    /// Forget the filter's recorded keys.
    #[inline]
    pub fn clear_filter(&self) -> Result<(), std::sync::mpsc::SendError<FrameCommand>> {
        self.tx.send(FrameCommand::ClearFilter)
    }

    /// Restart the capture session.
    #[inline]
    pub fn restart_session(&self) -> Result<(), std::sync::mpsc::SendError<FrameCommand>> {
        self.tx.send(FrameCommand::RestartSession)
    }
}

/// Create a new channel pair: `(FrameSink, Receiver<FrameCommand>)`.
///
/// Hand the receiver to [`FrameView::drain`](crate::view::FrameView::drain)
/// on the owning thread.
pub fn channel_frames() -> (FrameSink, Receiver<FrameCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (FrameSink { tx }, rx)
}
