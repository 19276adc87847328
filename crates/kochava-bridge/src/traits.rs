// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seams between the command bridge and the host runtime.
//
// The call channel and the event source are both owned by the host shell; the
// bridge only ever talks to them through these traits.

use std::sync::Arc;

use kochava_core::{ArgValue, Command, TrackerError};
use serde_json::Value;

/// Continuation invoked with the native-side result of a command.
pub type SuccessFn = Box<dyn FnOnce(ArgValue) + Send + 'static>;

/// Continuation invoked with a native-side or transport error message.
pub type ErrorFn = Box<dyn FnOnce(String) + Send + 'static>;

/// Listener attached to a platform-originated event.
pub type EventListener = Arc<dyn Fn(&Value) + Send + Sync + 'static>;

/// Hook that sees failures the bridge would otherwise discard.
pub type FailureObserver = Arc<dyn Fn(&TrackerError) + Send + Sync + 'static>;

/// Handle returned by [`EventSource::add_listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Opaque cross-boundary call substrate.
///
/// Implementations submit the command and return immediately. At most one of
/// the two continuations may fire, at most once, possibly on another thread
/// and possibly never.
pub trait CallChannel {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;

    fn exec(&self, service: &str, command: Command, on_success: SuccessFn, on_error: ErrorFn);
}

/// Subscription primitive for named platform events.
///
/// Implementations are not required to de-duplicate: adding the same
/// listener twice may deliver every event twice. A source may deliver a
/// buffered event to a listener before `add_listener` returns, and that
/// listener may re-enter the tracker's listener setters.
pub trait EventSource {
    fn add_listener(&self, event: &str, listener: EventListener) -> ListenerId;

    /// Removing an id that is not registered is a no-op.
    fn remove_listener(&self, event: &str, id: ListenerId);
}

impl<T: CallChannel + ?Sized> CallChannel for Arc<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn exec(&self, service: &str, command: Command, on_success: SuccessFn, on_error: ErrorFn) {
        (**self).exec(service, command, on_success, on_error)
    }
}

impl<T: CallChannel + ?Sized> CallChannel for Box<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn exec(&self, service: &str, command: Command, on_success: SuccessFn, on_error: ErrorFn) {
        (**self).exec(service, command, on_success, on_error)
    }
}

impl<T: EventSource + ?Sized> EventSource for Arc<T> {
    fn add_listener(&self, event: &str, listener: EventListener) -> ListenerId {
        (**self).add_listener(event, listener)
    }

    fn remove_listener(&self, event: &str, id: ListenerId) {
        (**self).remove_listener(event, id)
    }
}

impl<T: EventSource + ?Sized> EventSource for Box<T> {
    fn add_listener(&self, event: &str, listener: EventListener) -> ListenerId {
        (**self).add_listener(event, listener)
    }

    fn remove_listener(&self, event: &str, id: ListenerId) {
        (**self).remove_listener(event, id)
    }
}
