// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command names and their static argument schemas.
//
// A `Command` is built per call, handed to the call channel and dropped. The
// schema table documents what the native side expects; nothing here rejects
// a command that does not match it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrackerError};
use crate::values::ArgKind::{Bool, Map, String as Str};
use crate::values::{ArgKind, ArgValue};

/// Every operation the native plugin understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Configure,
    SendEventString,
    SendEventMapObject,
    SendEventAppleAppStoreReceipt,
    SendEventGooglePlayReceipt,
    SendDeepLink,
    SetAppLimitAdTracking,
    SetIdentityLink,
    GetAttribution,
    GetDeviceId,
    GetVersion,
    AddPushToken,
    RemovePushToken,
    SetSleep,
    GetSleep,
    SetConsentGranted,
    SetConsentRequired,
    SetConsentPrompted,
    GetConsentStatus,
}

/// Positional argument kinds plus the kind of value the native side answers
/// with (`None` for fire-and-forget commands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSchema {
    pub args: &'static [ArgKind],
    pub response: Option<ArgKind>,
}

const fn schema(args: &'static [ArgKind], response: Option<ArgKind>) -> CommandSchema {
    CommandSchema { args, response }
}

impl CommandName {
    pub const ALL: [CommandName; 19] = [
        CommandName::Configure,
        CommandName::SendEventString,
        CommandName::SendEventMapObject,
        CommandName::SendEventAppleAppStoreReceipt,
        CommandName::SendEventGooglePlayReceipt,
        CommandName::SendDeepLink,
        CommandName::SetAppLimitAdTracking,
        CommandName::SetIdentityLink,
        CommandName::GetAttribution,
        CommandName::GetDeviceId,
        CommandName::GetVersion,
        CommandName::AddPushToken,
        CommandName::RemovePushToken,
        CommandName::SetSleep,
        CommandName::GetSleep,
        CommandName::SetConsentGranted,
        CommandName::SetConsentRequired,
        CommandName::SetConsentPrompted,
        CommandName::GetConsentStatus,
    ];

    /// Name sent over the call channel.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Configure => "configure",
            CommandName::SendEventString => "sendEventString",
            CommandName::SendEventMapObject => "sendEventMapObject",
            CommandName::SendEventAppleAppStoreReceipt => "sendEventAppleAppStoreReceipt",
            CommandName::SendEventGooglePlayReceipt => "sendEventGooglePlayReceipt",
            CommandName::SendDeepLink => "sendDeepLink",
            CommandName::SetAppLimitAdTracking => "setAppLimitAdTracking",
            CommandName::SetIdentityLink => "setIdentityLink",
            CommandName::GetAttribution => "getAttribution",
            CommandName::GetDeviceId => "getDeviceId",
            CommandName::GetVersion => "getVersion",
            CommandName::AddPushToken => "addPushToken",
            CommandName::RemovePushToken => "removePushToken",
            CommandName::SetSleep => "setSleep",
            CommandName::GetSleep => "getSleep",
            CommandName::SetConsentGranted => "setConsentGranted",
            CommandName::SetConsentRequired => "setConsentRequired",
            CommandName::SetConsentPrompted => "setConsentPrompted",
            CommandName::GetConsentStatus => "getConsentStatus",
        }
    }

    pub fn schema(self) -> CommandSchema {
        match self {
            CommandName::Configure => schema(&[Map], None),
            CommandName::SendEventString => schema(&[Str, Str], None),
            CommandName::SendEventMapObject => schema(&[Str, Map], None),
            // name, info, base64 receipt
            CommandName::SendEventAppleAppStoreReceipt => schema(&[Str, Map, Str], None),
            // name, info, receipt data, receipt signature
            CommandName::SendEventGooglePlayReceipt => schema(&[Str, Map, Str, Str], None),
            // url, source application
            CommandName::SendDeepLink => schema(&[Str, Str], None),
            CommandName::SetAppLimitAdTracking => schema(&[Bool], None),
            CommandName::SetIdentityLink => schema(&[Map], None),
            CommandName::GetAttribution => schema(&[], Some(Str)),
            CommandName::GetDeviceId => schema(&[], Some(Str)),
            CommandName::GetVersion => schema(&[], Some(Str)),
            CommandName::AddPushToken | CommandName::RemovePushToken => schema(&[Str], None),
            CommandName::SetSleep => schema(&[Bool], None),
            CommandName::GetSleep => schema(&[], Some(Bool)),
            CommandName::SetConsentGranted | CommandName::SetConsentRequired => schema(&[Bool], None),
            CommandName::SetConsentPrompted => schema(&[], None),
            // serialized JSON consent status
            CommandName::GetConsentStatus => schema(&[], Some(Str)),
        }
    }

    pub fn expects_response(self) -> bool {
        self.schema().response.is_some()
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TrackerError::UnknownCommand(s.to_owned()))
    }
}

/// A named operation plus its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: CommandName,
    pub args: Vec<ArgValue>,
}

impl Command {
    pub fn new(name: CommandName, args: Vec<ArgValue>) -> Self {
        Self { name, args }
    }

    /// Whether the argument count and kinds match the schema table.
    pub fn conforms(&self) -> bool {
        let expected = self.name.schema().args;
        expected.len() == self.args.len()
            && expected
                .iter()
                .zip(&self.args)
                .all(|(kind, arg)| *kind == arg.kind())
    }

    /// Argument list as a JSON array, for transports that carry text.
    pub fn args_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Map as ArgMap;

    #[test]
    fn wire_names_parse_back() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>().expect("parse"), name);
        }
        assert!(matches!(
            "sendIdentityLink".parse::<CommandName>(),
            Err(TrackerError::UnknownCommand(_))
        ));
    }

    #[test]
    fn wire_names_match_native_commands() {
        let table = [
            (CommandName::Configure, "configure"),
            (CommandName::SendEventString, "sendEventString"),
            (CommandName::SendEventMapObject, "sendEventMapObject"),
            (CommandName::SendEventAppleAppStoreReceipt, "sendEventAppleAppStoreReceipt"),
            (CommandName::SendEventGooglePlayReceipt, "sendEventGooglePlayReceipt"),
            (CommandName::SendDeepLink, "sendDeepLink"),
            (CommandName::SetAppLimitAdTracking, "setAppLimitAdTracking"),
            (CommandName::SetIdentityLink, "setIdentityLink"),
            (CommandName::GetAttribution, "getAttribution"),
            (CommandName::GetDeviceId, "getDeviceId"),
            (CommandName::GetVersion, "getVersion"),
            (CommandName::AddPushToken, "addPushToken"),
            (CommandName::RemovePushToken, "removePushToken"),
            (CommandName::SetSleep, "setSleep"),
            (CommandName::GetSleep, "getSleep"),
            (CommandName::SetConsentGranted, "setConsentGranted"),
            (CommandName::SetConsentRequired, "setConsentRequired"),
            (CommandName::SetConsentPrompted, "setConsentPrompted"),
            (CommandName::GetConsentStatus, "getConsentStatus"),
        ];
        assert_eq!(table.len(), CommandName::ALL.len());
        for (name, literal) in table {
            assert_eq!(name.as_str(), literal);
            assert_eq!(name.to_string(), literal);
        }
    }

    #[test]
    fn only_getters_expect_a_response() {
        let getters: Vec<_> = CommandName::ALL
            .into_iter()
            .filter(|name| name.expects_response())
            .collect();
        assert_eq!(
            getters,
            vec![
                CommandName::GetAttribution,
                CommandName::GetDeviceId,
                CommandName::GetVersion,
                CommandName::GetSleep,
                CommandName::GetConsentStatus,
            ]
        );
        assert_eq!(CommandName::GetSleep.schema().response, Some(ArgKind::Bool));
    }

    #[test]
    fn conforms_checks_count_and_kinds() {
        let ok = Command::new(
            CommandName::SendEventMapObject,
            vec!["Purchase".into(), ArgValue::Map(ArgMap::new())],
        );
        assert!(ok.conforms());

        let swapped = Command::new(
            CommandName::SendEventMapObject,
            vec![ArgValue::Map(ArgMap::new()), "Purchase".into()],
        );
        assert!(!swapped.conforms());

        let short = Command::new(CommandName::SendDeepLink, vec!["app://open".into()]);
        assert!(!short.conforms());

        assert!(Command::new(CommandName::SetConsentPrompted, vec![]).conforms());
    }

    #[test]
    fn args_json_is_positional() {
        let cmd = Command::new(CommandName::SendDeepLink, vec!["app://x".into(), "mail".into()]);
        assert_eq!(cmd.args_json().expect("json"), r#"["app://x","mail"]"#);
    }
}
