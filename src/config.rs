//! Configuration shared across view instances.

use crate::events::EventController;
use crate::time_format::TimeFormat;

/// Top-level configuration for a [`FrameView`](crate::view::FrameView).
#[derive(Clone, Default)]
pub struct ViewConfig {
    /// Whether the unique-key filter starts enforced.
    pub filter_active_on_start: bool,
    /// How the Time column is rendered.
    pub time_format: TimeFormat,
    /// Optional event controller; display layers subscribe to it for
    /// re-filter notifications.
    pub events: Option<EventController>,
}

impl ViewConfig {
    /// Attach an event controller (builder style).
    pub fn with_events(mut self, events: EventController) -> Self {
        self.events = Some(events);
        self
    }
}
