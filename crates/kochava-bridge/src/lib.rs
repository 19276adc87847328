// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Kochava tracker — command bridge between a host application shell and the
//! native iOS/Android tracker SDKs.
//!
//! The bridge exposes a strongly-named API ([`KochavaTracker`]), turns each
//! call into a `(command name, argument list)` pair, and submits it on an
//! opaque [`CallChannel`] owned by the host. Platform notifications
//! (attribution, consent changes) reach callers through an [`EventSource`],
//! with at most one registered listener per event.

pub mod events;
pub mod listeners;
pub mod stub;
pub mod tracker;
pub mod traits;

#[cfg(test)]
mod testing;

pub use events::EventHub;
pub use listeners::{ListenerRegistry, TrackerEvent};
pub use tracker::KochavaTracker;
pub use traits::{CallChannel, EventListener, EventSource, FailureObserver, ListenerId};

/// Channel used when the host has not wired one up.
///
/// Mobile hosts pass their own [`CallChannel`] (JNI or Objective-C glue) to
/// [`KochavaTracker::new`]; on every other target this is the stub, which
/// answers each command with `PlatformUnavailable`.
pub fn platform_channel() -> Box<dyn CallChannel + Send + Sync> {
    tracing::debug!("using stub call channel");
    Box::new(stub::StubChannel)
}

/// A tracker on the default channel with an in-process event hub.
pub fn default_tracker() -> KochavaTracker<Box<dyn CallChannel + Send + Sync>, EventHub> {
    KochavaTracker::new(platform_channel(), EventHub::new())
}
