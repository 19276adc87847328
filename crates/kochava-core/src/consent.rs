// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Consent status as serialized by the native SDK.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parsed form of the string delivered by `getConsentStatus` and the
/// consent-status-change notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentStatus {
    pub description: Option<String>,
    pub required: bool,
    pub granted: bool,
    pub should_prompt: bool,
    /// Unix time (seconds) of the last consent response, 0 if never answered.
    pub response_time: i64,
    pub requirements_known: bool,
    pub partners: Vec<ConsentPartner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentPartner {
    pub name: String,
}

impl ConsentStatus {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Consent is either not required or has been granted.
    pub fn allows_tracking(&self) -> bool {
        !self.required || self.granted
    }
}
