// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tracker configuration and the wrapper identity stamp.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    LogLevel, WRAPPER_BUILD_DATE_KEY, WRAPPER_BUILD_DATE_VALUE, WRAPPER_VERSION_KEY,
    WRAPPER_VERSION_VALUE,
};
use crate::error::Result;
use crate::values::Map;

/// Stamp the wrapper name/version and build date onto configure options.
///
/// Any caller-supplied value under either key is replaced. Every other key
/// is kept in its original position.
pub fn stamp_wrapper_identity(mut options: Map) -> Map {
    for (key, value) in [
        (WRAPPER_VERSION_KEY, WRAPPER_VERSION_VALUE),
        (WRAPPER_BUILD_DATE_KEY, WRAPPER_BUILD_DATE_VALUE),
    ] {
        if let Some(previous) = options.insert(key.to_owned(), Value::from(value)) {
            if previous.as_str() != Some(value) {
                tracing::debug!(key, ?previous, "overriding caller-supplied wrapper identity");
            }
        }
    }
    options
}

/// Typed view of the options accepted by `configure`.
///
/// Unset fields are omitted from the options map so the native SDK applies
/// its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(rename = "androidAppGUIDString", skip_serializing_if = "Option::is_none")]
    pub android_app_guid: Option<String>,
    #[serde(rename = "iOSAppGUIDString", skip_serializing_if = "Option::is_none")]
    pub ios_app_guid: Option<String>,
    /// Partner integrations configure by partner name instead of app GUID.
    #[serde(rename = "partnerName", skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(rename = "limitAdTracking", skip_serializing_if = "Option::is_none")]
    pub limit_ad_tracking: Option<bool>,
    #[serde(rename = "identityLink", skip_serializing_if = "Option::is_none")]
    pub identity_link: Option<Map>,
    #[serde(rename = "logLevelEnum", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(rename = "retrieveAttribution", skip_serializing_if = "Option::is_none")]
    pub retrieve_attribution: Option<bool>,
    #[serde(
        rename = "consentIntelligentManagement",
        skip_serializing_if = "Option::is_none"
    )]
    pub consent_intelligent_management: Option<bool>,
    #[serde(
        rename = "consentManualManagedRequirements",
        skip_serializing_if = "Option::is_none"
    )]
    pub consent_manual_managed_requirements: Option<bool>,
    /// Start the SDK asleep; it stays idle until `set_sleep(false)`.
    #[serde(rename = "sleepBool", skip_serializing_if = "Option::is_none")]
    pub sleep: Option<bool>,
    /// Keys not covered above, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map,
}

impl TrackerConfig {
    /// Load a configuration from host-supplied JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Options map in catalog keys, not yet stamped.
    pub fn into_options(self) -> Result<Map> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // A struct always serializes to an object.
            _ => Ok(Map::new()),
        }
    }
}
