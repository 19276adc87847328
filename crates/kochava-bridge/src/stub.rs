// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub channel for desktop/CI builds where no native tracker SDK is linked.
//
// Every command is answered on the error continuation with
// `PlatformUnavailable`, which the tracker discards unless an observer is set.

use kochava_core::{Command, TrackerError};

use crate::traits::{CallChannel, ErrorFn, SuccessFn};

/// No-op channel returned by [`crate::platform_channel`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StubChannel;

impl CallChannel for StubChannel {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn exec(&self, service: &str, command: Command, _on_success: SuccessFn, on_error: ErrorFn) {
        tracing::warn!(
            service,
            command = %command.name,
            "command submitted to stub channel"
        );
        on_error(TrackerError::PlatformUnavailable.to_string());
    }
}
