// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// KochavaTracker — the command bridge facade.
//
// Each operation builds a `Command`, submits it on the call channel and
// returns immediately. Nothing is queued, retried or validated here; the
// native SDK owns all of that. Failures are dropped unless a failure observer
// has been installed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kochava_core::constants::PLUGIN_SERVICE;
use kochava_core::{
    ArgKind, ArgValue, Command, CommandName, Map, TrackerConfig, TrackerError,
    stamp_wrapper_identity,
};
use tracing::{debug, instrument, warn};

use crate::listeners::{ListenerRegistry, TrackerEvent};
use crate::traits::{CallChannel, ErrorFn, EventListener, EventSource, FailureObserver, SuccessFn};

/// Typed decoding of a native response value.
trait Response: Sized {
    const KIND: ArgKind;

    fn from_value(value: ArgValue) -> Option<Self>;
}

impl Response for String {
    const KIND: ArgKind = ArgKind::String;

    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Response for bool {
    const KIND: ArgKind = ArgKind::Bool;

    fn from_value(value: ArgValue) -> Option<Self> {
        value.as_bool()
    }
}

/// Strongly-named entry point to the native tracker SDK.
///
/// Owns the call channel, the platform event source and the per-event
/// listener registrations. Dropping the tracker deregisters its listeners.
pub struct KochavaTracker<C: CallChannel, E: EventSource> {
    channel: C,
    events: E,
    listeners: Mutex<ListenerRegistry>,
    observer: Option<FailureObserver>,
}

impl<C: CallChannel, E: EventSource> KochavaTracker<C, E> {
    pub fn new(channel: C, events: E) -> Self {
        debug!(platform = channel.platform_name(), "tracker bridge initialised");
        Self {
            channel,
            events,
            listeners: Mutex::new(ListenerRegistry::new()),
            observer: None,
        }
    }

    /// Surface transport and native failures instead of discarding them.
    pub fn with_failure_observer(
        mut self,
        observer: impl Fn(&TrackerError) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn platform_name(&self) -> &str {
        self.channel.platform_name()
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Submit a command without waiting for a result.
    pub fn invoke(&self, command: Command) {
        self.submit(command, Box::new(|_: ArgValue| {}));
    }

    /// Submit a command; `continuation` receives the native result if one
    /// ever arrives. There is no timeout.
    pub fn invoke_with_callback(
        &self,
        command: Command,
        continuation: impl FnOnce(ArgValue) + Send + 'static,
    ) {
        self.submit(command, Box::new(continuation));
    }

    fn submit(&self, command: Command, on_success: SuccessFn) {
        if !command.conforms() {
            warn!(
                command = %command.name,
                args = command.args.len(),
                "arguments do not match the command schema, forwarding as-is"
            );
        }
        debug!(command = %command.name, args = command.args.len(), "submitting command");
        let on_error = self.error_sink(command.name);
        self.channel.exec(PLUGIN_SERVICE, command, on_success, on_error);
    }

    fn error_sink(&self, name: CommandName) -> ErrorFn {
        let observer = self.observer.clone();
        Box::new(move |message: String| {
            debug!(command = %name, %message, "command failed");
            if let Some(observer) = observer {
                observer(&TrackerError::Channel {
                    command: name.as_str().to_owned(),
                    message,
                });
            }
        })
    }

    fn send(&self, name: CommandName, args: Vec<ArgValue>) {
        self.invoke(Command::new(name, args));
    }

    fn request<T: Response + 'static>(
        &self,
        name: CommandName,
        continuation: impl FnOnce(T) + Send + 'static,
    ) {
        let observer = self.observer.clone();
        self.invoke_with_callback(Command::new(name, Vec::new()), move |value| {
            let actual = value.kind();
            match T::from_value(value) {
                Some(decoded) => continuation(decoded),
                None => {
                    let expected = T::KIND;
                    warn!(command = %name, %actual, %expected, "unexpected response kind");
                    if let Some(observer) = observer {
                        observer(&TrackerError::UnexpectedResponse {
                            command: name.as_str().to_owned(),
                            expected,
                            actual,
                        });
                    }
                }
            }
        });
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Configure and start the native SDK.
    ///
    /// The wrapper identity fields are stamped onto `options`, replacing any
    /// values the caller put under those keys.
    #[instrument(skip_all, fields(keys = options.len()))]
    pub fn configure(&self, options: Map) {
        let stamped = stamp_wrapper_identity(options);
        self.send(CommandName::Configure, vec![ArgValue::Map(stamped)]);
    }

    /// Configure from the typed option set.
    pub fn configure_with(&self, config: TrackerConfig) {
        match config.into_options() {
            Ok(options) => self.configure(options),
            Err(e) => {
                warn!(error = %e, "could not build configure options");
                if let Some(observer) = &self.observer {
                    observer(&e);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub fn send_event_string(&self, name: &str, info: &str) {
        self.send(CommandName::SendEventString, vec![name.into(), info.into()]);
    }

    pub fn send_event_map_object(&self, name: &str, info: Map) {
        self.send(CommandName::SendEventMapObject, vec![name.into(), info.into()]);
    }

    /// iOS only.
    pub fn send_event_apple_app_store_receipt(
        &self,
        name: &str,
        info: Map,
        receipt_base64: &str,
    ) {
        self.send(
            CommandName::SendEventAppleAppStoreReceipt,
            vec![name.into(), info.into(), receipt_base64.into()],
        );
    }

    /// Android only.
    pub fn send_event_google_play_receipt(
        &self,
        name: &str,
        info: Map,
        receipt_data: &str,
        receipt_signature: &str,
    ) {
        self.send(
            CommandName::SendEventGooglePlayReceipt,
            vec![
                name.into(),
                info.into(),
                receipt_data.into(),
                receipt_signature.into(),
            ],
        );
    }

    pub fn send_deep_link(&self, url: &str, source_app: &str) {
        self.send(CommandName::SendDeepLink, vec![url.into(), source_app.into()]);
    }

    // -----------------------------------------------------------------------
    // Identity and privacy
    // -----------------------------------------------------------------------

    pub fn set_app_limit_ad_tracking(&self, limit: bool) {
        self.send(CommandName::SetAppLimitAdTracking, vec![limit.into()]);
    }

    pub fn set_identity_link(&self, identity: Map) {
        self.send(CommandName::SetIdentityLink, vec![identity.into()]);
    }

    #[deprecated(note = "use `set_identity_link`")]
    pub fn send_identity_link(&self, identity: Map) {
        self.set_identity_link(identity);
    }

    pub fn add_push_token(&self, token: &str) {
        self.send(CommandName::AddPushToken, vec![token.into()]);
    }

    pub fn remove_push_token(&self, token: &str) {
        self.send(CommandName::RemovePushToken, vec![token.into()]);
    }

    pub fn set_sleep(&self, sleep: bool) {
        self.send(CommandName::SetSleep, vec![sleep.into()]);
    }

    pub fn set_consent_granted(&self, granted: bool) {
        self.send(CommandName::SetConsentGranted, vec![granted.into()]);
    }

    pub fn set_consent_required(&self, required: bool) {
        self.send(CommandName::SetConsentRequired, vec![required.into()]);
    }

    pub fn set_consent_prompted(&self) {
        self.send(CommandName::SetConsentPrompted, Vec::new());
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn get_attribution(&self, continuation: impl FnOnce(String) + Send + 'static) {
        self.request(CommandName::GetAttribution, continuation);
    }

    pub fn get_device_id(&self, continuation: impl FnOnce(String) + Send + 'static) {
        self.request(CommandName::GetDeviceId, continuation);
    }

    pub fn get_version(&self, continuation: impl FnOnce(String) + Send + 'static) {
        self.request(CommandName::GetVersion, continuation);
    }

    pub fn get_sleep(&self, continuation: impl FnOnce(bool) + Send + 'static) {
        self.request(CommandName::GetSleep, continuation);
    }

    /// `continuation` receives the serialized consent status unmodified; see
    /// [`kochava_core::ConsentStatus::parse`].
    pub fn get_consent_status(&self, continuation: impl FnOnce(String) + Send + 'static) {
        self.request(CommandName::GetConsentStatus, continuation);
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Replace the attribution listener. `None` removes it.
    pub fn set_attribution_listener(&self, listener: Option<EventListener>) {
        self.set_listener(TrackerEvent::Attribution, listener);
    }

    /// Replace the consent-status-change listener. `None` removes it.
    pub fn set_consent_status_change_listener(&self, listener: Option<EventListener>) {
        self.set_listener(TrackerEvent::ConsentStatusChange, listener);
    }

    pub fn is_listening(&self, event: TrackerEvent) -> bool {
        self.registry().is_registered(event)
    }

    fn registry(&self) -> MutexGuard<'_, ListenerRegistry> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // The registry lock is never held across a call into the event source;
    // a source may deliver to the new listener before `add_listener` returns.
    fn set_listener(&self, event: TrackerEvent, listener: Option<EventListener>) {
        let name = event.event_name();

        let previous = self.registry().take(event);
        if let Some(previous) = previous {
            self.events.remove_listener(name, previous);
            debug!(event = name, id = previous.0, "listener deregistered");
        }

        if let Some(listener) = listener {
            let id = self.events.add_listener(name, listener);
            let displaced = self.registry().put(event, id);
            debug!(event = name, id = id.0, "listener registered");
            if let Some(displaced) = displaced {
                self.events.remove_listener(name, displaced);
            }
        }
    }

    /// Tear the bridge down at application shutdown.
    pub fn shutdown(self) {
        debug!("tracker bridge shutting down");
    }
}

impl<C: CallChannel, E: EventSource> Drop for KochavaTracker<C, E> {
    fn drop(&mut self) {
        self.listeners
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_all(&self.events);
    }
}
