//! The view model: an append-only frame log plus the unique-key filter.
//!
//! A display layer owns a [`FrameView`], feeds it via [`push`] (or a
//! [`FrameSink`](crate::sink::FrameSink) drained with [`drain`]) and
//! asks [`row_visible`] per row. Control flow is one-directional:
//! log → filter → display; the filter never mutates the log, and row
//! visibility is re-evaluated lazily whenever the display layer asks.
//!
//! [`push`]: FrameView::push
//! [`drain`]: FrameView::drain
//! [`row_visible`]: FrameView::row_visible

use std::sync::mpsc::Receiver;

use crate::config::ViewConfig;
use crate::events::{EventKind, FrameMeta, ViewEvent};
use crate::filter::UniqueFrameFilter;
use crate::frame::Frame;
use crate::log::{FrameLog, FrameRecord};
use crate::sink::FrameCommand;

/// Raw-view state for one display session.
///
/// Created once alongside the display surface and kept for its
/// lifetime; [`restart_session`](Self::restart_session) resets the data
/// without replacing the object.
pub struct FrameView {
    log: FrameLog,
    filter: UniqueFrameFilter,
    config: ViewConfig,
}

impl Default for FrameView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl FrameView {
    pub fn new(config: ViewConfig) -> Self {
        let mut filter = UniqueFrameFilter::new();
        filter.set_active(config.filter_active_on_start);
        Self {
            log: FrameLog::new(),
            filter,
            config,
        }
    }

    // ── Feeding ──────────────────────────────────────────────────────────────

    /// Append one observed frame and update the filter with its key and
    /// timestamp. Returns the row the frame was assigned.
    pub fn push(&mut self, frame: Frame, time: f64) -> usize {
        let key = frame.key();
        let row = self.log.append(frame, time);
        self.filter.update(key, time);
        self.emit(ViewEvent::new(EventKind::FRAME_APPENDED).with_frame(FrameMeta {
            row,
            key,
            time,
        }));
        row
    }

    /// Apply all commands currently pending on `rx`. Call on the thread
    /// owning the view; never blocks.
    pub fn drain(&mut self, rx: &Receiver<FrameCommand>) {
        while let Ok(cmd) = rx.try_recv() {
            self.apply(cmd);
        }
    }

    /// Apply a single command.
    pub fn apply(&mut self, cmd: FrameCommand) {
        match cmd {
            FrameCommand::Frame { frame, time } => {
                self.push(frame, time);
            }
            FrameCommand::SetFilterActive(active) => self.set_filter_active(active),
            FrameCommand::ToggleFilter => self.toggle_filter(),
            FrameCommand::ClearFilter => self.clear_filter(),
            FrameCommand::RestartSession => self.restart_session(),
        }
    }

    // ── Row visibility ───────────────────────────────────────────────────────

    /// Whether the given row should be displayed: `true` when the filter
    /// is inactive or the row carries the freshest timestamp recorded
    /// for its key. Rows outside the log are not visible.
    pub fn row_visible(&self, row: usize) -> bool {
        match self.log.get(row) {
            Some(rec) => self.filter.is_visible(rec.frame.key(), rec.time),
            None => false,
        }
    }

    /// Full re-filter pass: the indices of all visible rows, in log
    /// order. The answer does not depend on scan order, so display
    /// layers may equally re-scan subsets after a structural change.
    pub fn visible_rows(&self) -> Vec<usize> {
        self.log
            .iter()
            .filter(|rec| self.filter.is_visible(rec.frame.key(), rec.time))
            .map(|rec| rec.row)
            .collect()
    }

    // ── Filter control ───────────────────────────────────────────────────────

    /// Switch the filter on or off. Emits a re-filter notification when
    /// the flag actually changes.
    pub fn set_filter_active(&mut self, active: bool) {
        if active == self.filter.is_active() {
            return;
        }
        self.filter.set_active(active);
        let kind = if active {
            EventKind::FILTER_ENABLED
        } else {
            EventKind::FILTER_DISABLED
        };
        self.emit(ViewEvent::new(kind));
    }

    /// Flip the filter on/off.
    pub fn toggle_filter(&mut self) {
        let now_active = !self.filter.is_active();
        self.set_filter_active(now_active);
    }

    /// Whether the filter is currently enforced.
    pub fn filter_active(&self) -> bool {
        self.filter.is_active()
    }

    /// Forget the filter's recorded keys, leaving its active flag and
    /// the log untouched.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.emit(ViewEvent::new(EventKind::FILTER_CLEARED));
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    /// Restart the capture/simulation session: empty the log, clear the
    /// filter's keys. The filter's active flag survives the restart.
    pub fn restart_session(&mut self) {
        self.log.restart();
        self.filter.clear();
        self.emit(ViewEvent::new(EventKind::SESSION_RESTARTED));
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn log(&self) -> &FrameLog {
        &self.log
    }

    pub fn filter(&self) -> &UniqueFrameFilter {
        &self.filter
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Render the Time column for a row using the configured format.
    pub fn format_row_time(&self, rec: &FrameRecord) -> String {
        self.config
            .time_format
            .format(self.log.session_start(), rec.time)
    }

    fn emit(&self, event: ViewEvent) {
        if let Some(events) = &self.config.events {
            events.emit(event);
        }
    }
}
