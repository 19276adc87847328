// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test doubles shared by the unit tests in this crate.

use std::sync::Mutex;

use kochava_core::{ArgValue, Command};

use crate::traits::{CallChannel, ErrorFn, SuccessFn};

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

struct RecordedCall {
    service: String,
    command: Command,
    on_success: Option<SuccessFn>,
    on_error: Option<ErrorFn>,
}

/// Channel that records submissions and lets the test answer them later.
#[derive(Default)]
pub(crate) struct RecordingChannel {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingChannel {
    pub(crate) fn commands(&self) -> Vec<Command> {
        let calls = self.calls.lock().expect("calls lock");
        calls.iter().map(|call| call.command.clone()).collect()
    }

    pub(crate) fn services(&self) -> Vec<String> {
        let calls = self.calls.lock().expect("calls lock");
        calls.iter().map(|call| call.service.clone()).collect()
    }

    /// Answer call `index` on its success continuation.
    pub(crate) fn respond(&self, index: usize, value: ArgValue) {
        let on_success = {
            let mut calls = self.calls.lock().expect("calls lock");
            let call = &mut calls[index];
            call.on_error.take();
            call.on_success.take().expect("call already answered")
        };
        on_success(value);
    }

    /// Answer call `index` on its error continuation.
    pub(crate) fn fail(&self, index: usize, message: &str) {
        let on_error = {
            let mut calls = self.calls.lock().expect("calls lock");
            let call = &mut calls[index];
            call.on_success.take();
            call.on_error.take().expect("call already answered")
        };
        on_error(message.to_owned());
    }
}

impl CallChannel for RecordingChannel {
    fn platform_name(&self) -> &str {
        "Recording"
    }

    fn exec(&self, service: &str, command: Command, on_success: SuccessFn, on_error: ErrorFn) {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            service: service.to_owned(),
            command,
            on_success: Some(on_success),
            on_error: Some(on_error),
        });
    }
}
