// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Constant catalog shared with the native SDKs.
//
// Both the native layer and caller code compare these strings for exact
// equality. Changing any literal below is a breaking change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TrackerError;

/// Target identifier passed with every command on the call channel.
pub const PLUGIN_SERVICE: &str = "KochavaTrackerPlugin";

// ---------------------------------------------------------------------------
// Configuration keys
// ---------------------------------------------------------------------------

pub const PARAM_ANDROID_APP_GUID_STRING_KEY: &str = "androidAppGUIDString";
pub const PARAM_IOS_APP_GUID_STRING_KEY: &str = "iOSAppGUIDString";
pub const PARAM_PARTNER_NAME_STRING_KEY: &str = "partnerName";
pub const PARAM_APP_LIMIT_AD_TRACKING_BOOL_KEY: &str = "limitAdTracking";
pub const PARAM_IDENTITY_LINK_MAP_OBJECT_KEY: &str = "identityLink";
/// Deprecated, same value as [`PARAM_IDENTITY_LINK_MAP_OBJECT_KEY`].
pub const PARAM_IDENTITY_LINK_DICTIONARY_KEY: &str = "identityLink";
pub const PARAM_LOG_LEVEL_ENUM_KEY: &str = "logLevelEnum";
pub const PARAM_RETRIEVE_ATTRIBUTION_BOOL_KEY: &str = "retrieveAttribution";
pub const PARAM_INTELLIGENT_CONSENT_MANAGEMENT_BOOL_KEY: &str = "consentIntelligentManagement";
pub const PARAM_MANUAL_MANAGED_CONSENT_REQUIREMENTS_BOOL_KEY: &str =
    "consentManualManagedRequirements";
pub const PARAM_SLEEP_BOOL_KEY: &str = "sleepBool";

// ---------------------------------------------------------------------------
// Wrapper identity stamp (injected into every configure call)
// ---------------------------------------------------------------------------

pub const WRAPPER_VERSION_KEY: &str = "versionExtension";
pub const WRAPPER_VERSION_VALUE: &str = "Cordova 2.3.0";
pub const WRAPPER_BUILD_DATE_KEY: &str = "wrapperBuildDateString";
pub const WRAPPER_BUILD_DATE_VALUE: &str = "2018-12-05T21:18:00Z";

// ---------------------------------------------------------------------------
// Log level values
// ---------------------------------------------------------------------------

pub const LOG_LEVEL_ENUM_NONE_VALUE: &str = "none";
pub const LOG_LEVEL_ENUM_ERROR_VALUE: &str = "error";
pub const LOG_LEVEL_ENUM_WARN_VALUE: &str = "warn";
pub const LOG_LEVEL_ENUM_INFO_VALUE: &str = "info";
pub const LOG_LEVEL_ENUM_DEBUG_VALUE: &str = "debug";
pub const LOG_LEVEL_ENUM_TRACE_VALUE: &str = "trace";

// ---------------------------------------------------------------------------
// Consent status keys
// ---------------------------------------------------------------------------

pub const CONSENT_STATUS_DESCRIPTION_STRING_KEY: &str = "description";
pub const CONSENT_STATUS_REQUIRED_BOOL_KEY: &str = "required";
pub const CONSENT_STATUS_GRANTED_BOOL_KEY: &str = "granted";
pub const CONSENT_STATUS_SHOULD_PROMPT_BOOL_KEY: &str = "should_prompt";
pub const CONSENT_STATUS_RESPONSE_TIME_LONG_KEY: &str = "response_time";
pub const CONSENT_STATUS_PARTNERS_KEY: &str = "partners";
pub const CONSENT_STATUS_PARTNER_NAME_STRING_KEY: &str = "name";
pub const CONSENT_STATUS_REQUIREMENTS_KNOWN_BOOL_KEY: &str = "requirements_known";

// ---------------------------------------------------------------------------
// Standard event types
// ---------------------------------------------------------------------------

pub const EVENT_TYPE_ACHIEVEMENT_STRING_KEY: &str = "Achievement";
pub const EVENT_TYPE_ADD_TO_CART_STRING_KEY: &str = "Add to Cart";
pub const EVENT_TYPE_ADD_TO_WISH_LIST_STRING_KEY: &str = "Add to Wish List";
pub const EVENT_TYPE_CHECKOUT_START_STRING_KEY: &str = "Checkout Start";
pub const EVENT_TYPE_LEVEL_COMPLETE_STRING_KEY: &str = "Level Complete";
pub const EVENT_TYPE_PURCHASE_STRING_KEY: &str = "Purchase";
pub const EVENT_TYPE_RATING_STRING_KEY: &str = "Rating";
pub const EVENT_TYPE_REGISTRATION_COMPLETE_STRING_KEY: &str = "Registration Complete";
pub const EVENT_TYPE_SEARCH_STRING_KEY: &str = "Search";
pub const EVENT_TYPE_TUTORIAL_COMPLETE_STRING_KEY: &str = "Tutorial Complete";
pub const EVENT_TYPE_VIEW_STRING_KEY: &str = "View";
pub const EVENT_TYPE_AD_VIEW_STRING_KEY: &str = "Ad View";
pub const EVENT_TYPE_PUSH_RECEIVED_STRING_KEY: &str = "Push Received";
pub const EVENT_TYPE_PUSH_OPENED_STRING_KEY: &str = "Push Opened";
pub const EVENT_TYPE_CONSENT_GRANTED_STRING_KEY: &str = "Consent Granted";
pub const EVENT_TYPE_DEEP_LINK_STRING_KEY: &str = "_Deeplink";
pub const EVENT_TYPE_AD_CLICK_STRING_KEY: &str = "Ad Click";
pub const EVENT_TYPE_START_TRIAL_STRING_KEY: &str = "Start Trial";
pub const EVENT_TYPE_SUBSCRIBE_STRING_KEY: &str = "Subscribe";

// ---------------------------------------------------------------------------
// Platform notification events
// ---------------------------------------------------------------------------

pub const ATTRIBUTION_EVENT_TYPE: &str = "attribution-notification";
pub const CONSENT_STATUS_CHANGE_EVENT_TYPE: &str = "consent-status-change-notification";

// ---------------------------------------------------------------------------
// Typed views
// ---------------------------------------------------------------------------

/// Native SDK log verbosity, passed under [`PARAM_LOG_LEVEL_ENUM_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    None,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// The catalog token the native SDK expects.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => LOG_LEVEL_ENUM_NONE_VALUE,
            LogLevel::Error => LOG_LEVEL_ENUM_ERROR_VALUE,
            LogLevel::Warn => LOG_LEVEL_ENUM_WARN_VALUE,
            LogLevel::Info => LOG_LEVEL_ENUM_INFO_VALUE,
            LogLevel::Debug => LOG_LEVEL_ENUM_DEBUG_VALUE,
            LogLevel::Trace => LOG_LEVEL_ENUM_TRACE_VALUE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidLogLevel(s.to_owned()))
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Standard post-install event names understood by the attribution backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardEventType {
    Achievement,
    AddToCart,
    AddToWishList,
    CheckoutStart,
    LevelComplete,
    Purchase,
    Rating,
    RegistrationComplete,
    Search,
    TutorialComplete,
    View,
    AdView,
    PushReceived,
    PushOpened,
    ConsentGranted,
    DeepLink,
    AdClick,
    StartTrial,
    Subscribe,
}

impl StandardEventType {
    pub const ALL: [StandardEventType; 19] = [
        StandardEventType::Achievement,
        StandardEventType::AddToCart,
        StandardEventType::AddToWishList,
        StandardEventType::CheckoutStart,
        StandardEventType::LevelComplete,
        StandardEventType::Purchase,
        StandardEventType::Rating,
        StandardEventType::RegistrationComplete,
        StandardEventType::Search,
        StandardEventType::TutorialComplete,
        StandardEventType::View,
        StandardEventType::AdView,
        StandardEventType::PushReceived,
        StandardEventType::PushOpened,
        StandardEventType::ConsentGranted,
        StandardEventType::DeepLink,
        StandardEventType::AdClick,
        StandardEventType::StartTrial,
        StandardEventType::Subscribe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StandardEventType::Achievement => EVENT_TYPE_ACHIEVEMENT_STRING_KEY,
            StandardEventType::AddToCart => EVENT_TYPE_ADD_TO_CART_STRING_KEY,
            StandardEventType::AddToWishList => EVENT_TYPE_ADD_TO_WISH_LIST_STRING_KEY,
            StandardEventType::CheckoutStart => EVENT_TYPE_CHECKOUT_START_STRING_KEY,
            StandardEventType::LevelComplete => EVENT_TYPE_LEVEL_COMPLETE_STRING_KEY,
            StandardEventType::Purchase => EVENT_TYPE_PURCHASE_STRING_KEY,
            StandardEventType::Rating => EVENT_TYPE_RATING_STRING_KEY,
            StandardEventType::RegistrationComplete => EVENT_TYPE_REGISTRATION_COMPLETE_STRING_KEY,
            StandardEventType::Search => EVENT_TYPE_SEARCH_STRING_KEY,
            StandardEventType::TutorialComplete => EVENT_TYPE_TUTORIAL_COMPLETE_STRING_KEY,
            StandardEventType::View => EVENT_TYPE_VIEW_STRING_KEY,
            StandardEventType::AdView => EVENT_TYPE_AD_VIEW_STRING_KEY,
            StandardEventType::PushReceived => EVENT_TYPE_PUSH_RECEIVED_STRING_KEY,
            StandardEventType::PushOpened => EVENT_TYPE_PUSH_OPENED_STRING_KEY,
            StandardEventType::ConsentGranted => EVENT_TYPE_CONSENT_GRANTED_STRING_KEY,
            StandardEventType::DeepLink => EVENT_TYPE_DEEP_LINK_STRING_KEY,
            StandardEventType::AdClick => EVENT_TYPE_AD_CLICK_STRING_KEY,
            StandardEventType::StartTrial => EVENT_TYPE_START_TRIAL_STRING_KEY,
            StandardEventType::Subscribe => EVENT_TYPE_SUBSCRIBE_STRING_KEY,
        }
    }
}

impl fmt::Display for StandardEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardEventType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardEventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidEventType(s.to_owned()))
    }
}

impl Serialize for StandardEventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StandardEventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_parse_their_own_tokens() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>().expect("parse"), level);
        }
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(TrackerError::InvalidLogLevel(s)) if s == "verbose"
        ));
    }

    #[test]
    fn event_type_literals_are_stable() {
        assert_eq!(StandardEventType::AddToCart.as_str(), "Add to Cart");
        assert_eq!(StandardEventType::DeepLink.as_str(), "_Deeplink");
        assert_eq!(StandardEventType::Subscribe.to_string(), "Subscribe");
        assert_eq!(
            "Registration Complete".parse::<StandardEventType>().expect("parse"),
            StandardEventType::RegistrationComplete
        );
    }

    #[test]
    fn every_event_type_round_trips_through_its_literal() {
        for kind in StandardEventType::ALL {
            assert_eq!(kind.as_str().parse::<StandardEventType>().expect("parse"), kind);
        }
        let unique: std::collections::HashSet<_> =
            StandardEventType::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(unique.len(), StandardEventType::ALL.len());
    }

    #[test]
    fn catalog_matches_native_literals() {
        let catalog = [
            (PLUGIN_SERVICE, "KochavaTrackerPlugin"),
            (PARAM_ANDROID_APP_GUID_STRING_KEY, "androidAppGUIDString"),
            (PARAM_IOS_APP_GUID_STRING_KEY, "iOSAppGUIDString"),
            (PARAM_PARTNER_NAME_STRING_KEY, "partnerName"),
            (PARAM_APP_LIMIT_AD_TRACKING_BOOL_KEY, "limitAdTracking"),
            (PARAM_IDENTITY_LINK_MAP_OBJECT_KEY, "identityLink"),
            (PARAM_IDENTITY_LINK_DICTIONARY_KEY, "identityLink"),
            (PARAM_LOG_LEVEL_ENUM_KEY, "logLevelEnum"),
            (PARAM_RETRIEVE_ATTRIBUTION_BOOL_KEY, "retrieveAttribution"),
            (PARAM_INTELLIGENT_CONSENT_MANAGEMENT_BOOL_KEY, "consentIntelligentManagement"),
            (
                PARAM_MANUAL_MANAGED_CONSENT_REQUIREMENTS_BOOL_KEY,
                "consentManualManagedRequirements",
            ),
            (PARAM_SLEEP_BOOL_KEY, "sleepBool"),
            (WRAPPER_VERSION_KEY, "versionExtension"),
            (WRAPPER_VERSION_VALUE, "Cordova 2.3.0"),
            (WRAPPER_BUILD_DATE_KEY, "wrapperBuildDateString"),
            (WRAPPER_BUILD_DATE_VALUE, "2018-12-05T21:18:00Z"),
            (LOG_LEVEL_ENUM_NONE_VALUE, "none"),
            (LOG_LEVEL_ENUM_ERROR_VALUE, "error"),
            (LOG_LEVEL_ENUM_WARN_VALUE, "warn"),
            (LOG_LEVEL_ENUM_INFO_VALUE, "info"),
            (LOG_LEVEL_ENUM_DEBUG_VALUE, "debug"),
            (LOG_LEVEL_ENUM_TRACE_VALUE, "trace"),
            (CONSENT_STATUS_DESCRIPTION_STRING_KEY, "description"),
            (CONSENT_STATUS_REQUIRED_BOOL_KEY, "required"),
            (CONSENT_STATUS_GRANTED_BOOL_KEY, "granted"),
            (CONSENT_STATUS_SHOULD_PROMPT_BOOL_KEY, "should_prompt"),
            (CONSENT_STATUS_RESPONSE_TIME_LONG_KEY, "response_time"),
            (CONSENT_STATUS_PARTNERS_KEY, "partners"),
            (CONSENT_STATUS_PARTNER_NAME_STRING_KEY, "name"),
            (CONSENT_STATUS_REQUIREMENTS_KNOWN_BOOL_KEY, "requirements_known"),
            (EVENT_TYPE_ACHIEVEMENT_STRING_KEY, "Achievement"),
            (EVENT_TYPE_ADD_TO_CART_STRING_KEY, "Add to Cart"),
            (EVENT_TYPE_ADD_TO_WISH_LIST_STRING_KEY, "Add to Wish List"),
            (EVENT_TYPE_CHECKOUT_START_STRING_KEY, "Checkout Start"),
            (EVENT_TYPE_LEVEL_COMPLETE_STRING_KEY, "Level Complete"),
            (EVENT_TYPE_PURCHASE_STRING_KEY, "Purchase"),
            (EVENT_TYPE_RATING_STRING_KEY, "Rating"),
            (EVENT_TYPE_REGISTRATION_COMPLETE_STRING_KEY, "Registration Complete"),
            (EVENT_TYPE_SEARCH_STRING_KEY, "Search"),
            (EVENT_TYPE_TUTORIAL_COMPLETE_STRING_KEY, "Tutorial Complete"),
            (EVENT_TYPE_VIEW_STRING_KEY, "View"),
            (EVENT_TYPE_AD_VIEW_STRING_KEY, "Ad View"),
            (EVENT_TYPE_PUSH_RECEIVED_STRING_KEY, "Push Received"),
            (EVENT_TYPE_PUSH_OPENED_STRING_KEY, "Push Opened"),
            (EVENT_TYPE_CONSENT_GRANTED_STRING_KEY, "Consent Granted"),
            (EVENT_TYPE_DEEP_LINK_STRING_KEY, "_Deeplink"),
            (EVENT_TYPE_AD_CLICK_STRING_KEY, "Ad Click"),
            (EVENT_TYPE_START_TRIAL_STRING_KEY, "Start Trial"),
            (EVENT_TYPE_SUBSCRIBE_STRING_KEY, "Subscribe"),
            (ATTRIBUTION_EVENT_TYPE, "attribution-notification"),
            (CONSENT_STATUS_CHANGE_EVENT_TYPE, "consent-status-change-notification"),
        ];
        for (constant, literal) in catalog {
            assert_eq!(constant, literal);
        }
    }

    #[test]
    fn log_level_serializes_as_token() {
        let json = serde_json::to_string(&LogLevel::Trace).expect("serialize");
        assert_eq!(json, "\"trace\"");
        let back: LogLevel = serde_json::from_str("\"warn\"").expect("deserialize");
        assert_eq!(back, LogLevel::Warn);
    }

    #[test]
    fn deprecated_identity_link_key_matches_current_key() {
        assert_eq!(
            PARAM_IDENTITY_LINK_DICTIONARY_KEY,
            PARAM_IDENTITY_LINK_MAP_OBJECT_KEY
        );
    }
}
