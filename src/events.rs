//! Event notifications for display layers.
//!
//! A display layer subscribes via [`EventController`] to learn when it
//! must run a full re-filter pass (filter toggled or cleared, session
//! restarted) or may append a single row (frame appended). Each event
//! carries a set of [`EventKind`] flags (bitflags-style) and is matched
//! against the subscriber's [`EventFilter`] OR-mask: an event is
//! delivered when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::frame::FrameKey;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A frame was appended to the log (incremental row insert).
    pub const FRAME_APPENDED: Self = Self(1 << 0);
    /// The unique filter was switched on. Requires a full re-filter pass.
    pub const FILTER_ENABLED: Self = Self(1 << 1);
    /// The unique filter was switched off. Requires a full re-filter pass.
    pub const FILTER_DISABLED: Self = Self(1 << 2);
    /// The filter's recorded keys were cleared. Requires a full re-filter pass.
    pub const FILTER_CLEARED: Self = Self(1 << 3);
    /// The capture session restarted: log emptied, filter keys cleared.
    pub const SESSION_RESTARTED: Self = Self(1 << 4);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::FRAME_APPENDED, "FRAME_APPENDED"),
            (EventKind::FILTER_ENABLED, "FILTER_ENABLED"),
            (EventKind::FILTER_DISABLED, "FILTER_DISABLED"),
            (EventKind::FILTER_CLEARED, "FILTER_CLEARED"),
            (EventKind::SESSION_RESTARTED, "SESSION_RESTARTED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u32 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata attached to frame-append events.
#[derive(Debug, Clone, Copy)]
pub struct FrameMeta {
    /// Row index the frame was assigned in the log.
    pub row: usize,
    /// Dedup key of the frame.
    pub key: FrameKey,
    /// Elapsed seconds since session start.
    pub time: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the view model.
///
/// `kinds` is a bitflag set of [`EventKind`] categories; `frame` carries
/// metadata when `FRAME_APPENDED` is set.
#[derive(Debug, Clone)]
pub struct ViewEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,
    pub frame: Option<FrameMeta>,
}

impl ViewEvent {
    /// Create a new event with the given kinds; the timestamp is filled
    /// in by the controller on emit.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            frame: None,
        }
    }

    /// Attach frame metadata.
    pub fn with_frame(mut self, meta: FrameMeta) -> Self {
        self.frame = Some(meta);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// Selects which event categories a subscriber receives.
///
/// The filter is an OR-mask: an event is delivered when
/// `event.kinds.intersects(filter.mask)`.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &ViewEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ViewEvent>,
}

/// Collects and distributes view events to subscribers.
///
/// Attach it to [`ViewConfig`](crate::config::ViewConfig) before
/// constructing the view, then call [`subscribe`](Self::subscribe) to
/// receive events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    /// Create a new event controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ViewEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<ViewEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all subscribers whose filter matches.
    ///
    /// Called by [`FrameView`](crate::view::FrameView); public so that
    /// embedding code can inject synthetic events. Subscribers whose
    /// receiver was dropped are pruned.
    pub fn emit(&self, mut event: ViewEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Direction;

    #[test]
    fn event_kind_union_and_intersection() {
        let appended = EventKind::FRAME_APPENDED;
        let cleared = EventKind::FILTER_CLEARED;
        let combined = appended | cleared;
        assert!(combined.contains(appended));
        assert!(combined.contains(cleared));
        assert!(combined.intersects(appended));
        assert!(!EventKind::SESSION_RESTARTED.intersects(appended));
    }

    #[test]
    fn event_kind_all_matches_everything() {
        assert!(EventKind::ALL.contains(EventKind::FRAME_APPENDED));
        assert!(EventKind::ALL.contains(EventKind::FILTER_ENABLED));
        assert!(EventKind::ALL.contains(EventKind::SESSION_RESTARTED));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::FILTER_ENABLED | EventKind::FILTER_DISABLED);
        let evt = ViewEvent::new(EventKind::FILTER_ENABLED);
        assert!(filter.matches(&evt));

        let evt2 = ViewEvent::new(EventKind::FRAME_APPENDED);
        assert!(!filter.matches(&evt2));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_frames = ctrl.subscribe(EventFilter::only(EventKind::FRAME_APPENDED));
        let rx_restart = ctrl.subscribe(EventFilter::only(EventKind::SESSION_RESTARTED));

        let evt = ViewEvent::new(EventKind::FRAME_APPENDED).with_frame(FrameMeta {
            row: 0,
            key: FrameKey::new(0x100, Direction::Rx),
            time: 0.5,
        });
        ctrl.emit(evt);

        assert!(rx_all.try_recv().is_ok());
        let frame_evt = rx_frames.try_recv().unwrap();
        assert_eq!(frame_evt.frame.unwrap().row, 0);
        assert!(rx_restart.try_recv().is_err());
    }

    #[test]
    fn event_controller_timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();

        std::thread::sleep(std::time::Duration::from_millis(10));
        ctrl.emit(ViewEvent::new(EventKind::FILTER_CLEARED));

        let evt = rx.try_recv().unwrap();
        assert!(evt.timestamp > 0.0);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::FRAME_APPENDED), "FRAME_APPENDED");
        let combo = EventKind::FILTER_ENABLED | EventKind::FILTER_CLEARED;
        assert_eq!(format!("{}", combo), "FILTER_ENABLED|FILTER_CLEARED");
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        let unknown = EventKind(1 << 31);
        assert!(format!("{}", unknown).starts_with("0x"));
    }

    #[test]
    fn dropped_receiver_is_cleaned_up() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();

        drop(rx1);

        ctrl.emit(ViewEvent::new(EventKind::FRAME_APPENDED));
        assert!(rx2.try_recv().is_ok());

        ctrl.emit(ViewEvent::new(EventKind::FILTER_CLEARED));
        assert!(rx2.try_recv().is_ok());
    }
}
