// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-process event source.
//
// Hosts that receive native notifications themselves (e.g. from a JNI or
// Objective-C callback) forward them into an `EventHub` with `emit`. Like a
// DOM event target it does not de-duplicate listeners.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tracing::{debug, trace};

use crate::traits::{EventListener, EventSource, ListenerId};

/// Named-event dispatcher backed by a listener table.
#[derive(Default)]
pub struct EventHub {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<String, Vec<(ListenerId, EventListener)>>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    // A listener that panicked on another thread must not lose registrations.
    fn table(&self) -> MutexGuard<'_, HashMap<String, Vec<(ListenerId, EventListener)>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deliver `payload` to every listener of `event`, in registration order.
    ///
    /// Listeners run outside the table lock, so they may add or remove
    /// listeners themselves. Returns the number of listeners invoked.
    pub fn emit(&self, event: &str, payload: &Value) -> usize {
        let snapshot: Vec<EventListener> = self
            .table()
            .get(event)
            .map(|entries| entries.iter().map(|(_, l)| EventListener::clone(l)).collect())
            .unwrap_or_default();

        trace!(event, listeners = snapshot.len(), "emitting platform event");
        for listener in &snapshot {
            listener(payload);
        }
        snapshot.len()
    }

    /// Number of live listeners for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.table().get(event).map_or(0, Vec::len)
    }
}

impl EventSource for EventHub {
    fn add_listener(&self, event: &str, listener: EventListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.table()
            .entry(event.to_owned())
            .or_default()
            .push((id, listener));
        debug!(event, id = id.0, "listener added");
        id
    }

    fn remove_listener(&self, event: &str, id: ListenerId) {
        let mut table = self.table();
        if let Some(entries) = table.get_mut(event) {
            entries.retain(|(existing, _)| *existing != id);
            if entries.is_empty() {
                table.remove(event);
            }
            debug!(event, id = id.0, "listener removed");
        }
    }
}
