// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the tracker bridge.

use thiserror::Error;

use crate::values::ArgKind;

/// Top-level error type for bridge operations.
///
/// None of the public bridge operations return these to the caller; they are
/// only handed to an installed failure observer.
#[derive(Debug, Error)]
pub enum TrackerError {
    // -- Call channel --
    /// The command failed in transit or on the native side. The two are not
    /// distinguishable from here.
    #[error("command `{command}` failed: {message}")]
    Channel { command: String, message: String },

    #[error("command `{command}` answered with {actual}, expected {expected}")]
    UnexpectedResponse {
        command: String,
        expected: ArgKind,
        actual: ArgKind,
    },

    // -- Catalog lookups --
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("unknown standard event type: {0}")]
    InvalidEventType(String),

    // -- Platform --
    #[error("native tracker not available on this platform")]
    PlatformUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TrackerError>;
