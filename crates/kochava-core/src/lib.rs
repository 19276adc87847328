// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Kochava tracker bridge — constant catalog, argument values, command schemas,
// configuration and error definitions shared by the bridge crate.

pub mod command;
pub mod config;
pub mod consent;
pub mod constants;
pub mod error;
pub mod values;

pub use command::{Command, CommandName, CommandSchema};
pub use config::{TrackerConfig, stamp_wrapper_identity};
pub use consent::{ConsentPartner, ConsentStatus};
pub use constants::{LogLevel, StandardEventType};
pub use error::{Result, TrackerError};
pub use values::{ArgKind, ArgValue, Map};
