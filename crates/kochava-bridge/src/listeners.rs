// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// At-most-one listener registration per platform event.

use kochava_core::constants::{ATTRIBUTION_EVENT_TYPE, CONSENT_STATUS_CHANGE_EVENT_TYPE};
use tracing::debug;

use crate::traits::{EventListener, EventSource, ListenerId};

/// Platform-originated events the bridge lets callers listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerEvent {
    /// Attribution results arrived from the attribution backend.
    Attribution,
    ConsentStatusChange,
}

impl TrackerEvent {
    pub const ALL: [TrackerEvent; 2] = [TrackerEvent::Attribution, TrackerEvent::ConsentStatusChange];

    /// Event name used on the platform event source.
    pub fn event_name(self) -> &'static str {
        match self {
            TrackerEvent::Attribution => ATTRIBUTION_EVENT_TYPE,
            TrackerEvent::ConsentStatusChange => CONSENT_STATUS_CHANGE_EVENT_TYPE,
        }
    }
}

/// One registration slot per [`TrackerEvent`].
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    attribution: Option<ListenerId>,
    consent_status_change: Option<ListenerId>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, event: TrackerEvent) -> &mut Option<ListenerId> {
        match event {
            TrackerEvent::Attribution => &mut self.attribution,
            TrackerEvent::ConsentStatusChange => &mut self.consent_status_change,
        }
    }

    /// Replace the listener for `event`. `None` only clears it.
    ///
    /// The previous registration is always removed from `source` before the
    /// new one is added, so the source never holds two live listeners for
    /// the same event on our behalf.
    pub fn set<S: EventSource + ?Sized>(
        &mut self,
        event: TrackerEvent,
        listener: Option<EventListener>,
        source: &S,
    ) {
        let name = event.event_name();
        let slot = self.slot(event);

        if let Some(previous) = slot.take() {
            source.remove_listener(name, previous);
            debug!(event = name, id = previous.0, "listener deregistered");
        }

        if let Some(listener) = listener {
            let id = source.add_listener(name, listener);
            *slot = Some(id);
            debug!(event = name, id = id.0, "listener registered");
        }
    }

    /// Empty the slot for `event`, returning the id that was in it.
    pub fn take(&mut self, event: TrackerEvent) -> Option<ListenerId> {
        self.slot(event).take()
    }

    /// Store `id` for `event`, returning any id it displaced.
    pub fn put(&mut self, event: TrackerEvent, id: ListenerId) -> Option<ListenerId> {
        self.slot(event).replace(id)
    }

    pub fn is_registered(&self, event: TrackerEvent) -> bool {
        match event {
            TrackerEvent::Attribution => self.attribution.is_some(),
            TrackerEvent::ConsentStatusChange => self.consent_status_change.is_some(),
        }
    }

    /// Deregister every slot; used at teardown.
    pub fn clear_all<S: EventSource + ?Sized>(&mut self, source: &S) {
        for event in TrackerEvent::ALL {
            self.set(event, None, source);
        }
    }
}
