// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tagged argument values carried across the call channel.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Insertion-ordered, string-keyed mapping (the "MapObject" of the native API).
pub type Map = serde_json::Map<String, Value>;

/// A single positional argument or native response value.
///
/// Serialized untagged, so an argument list is a plain JSON array on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Number(Number),
    String(String),
    Map(Map),
}

/// Variant names of [`ArgValue`], used by the command schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    String,
    Bool,
    Number,
    Map,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgKind::String => "string",
            ArgKind::Bool => "boolean",
            ArgKind::Number => "number",
            ArgKind::Map => "map",
        })
    }
}

impl ArgValue {
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::String(_) => ArgKind::String,
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Number(_) => ArgKind::Number,
            ArgValue::Map(_) => ArgKind::Map,
        }
    }

    /// Finite floats only; JSON has no NaN or infinity.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(ArgValue::Number)
    }

    /// Convert an arbitrary JSON value. Arrays and `null` have no variant.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(ArgValue::Bool(b)),
            Value::Number(n) => Some(ArgValue::Number(n)),
            Value::String(s) => Some(ArgValue::String(s)),
            Value::Object(m) => Some(ArgValue::Map(m)),
            Value::Null | Value::Array(_) => None,
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            ArgValue::Bool(b) => Value::Bool(b),
            ArgValue::Number(n) => Value::Number(n),
            ArgValue::String(s) => Value::String(s),
            ArgValue::Map(m) => Value::Object(m),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            ArgValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Number(value.into())
    }
}

impl From<Map> for ArgValue {
    fn from(value: Map) -> Self {
        ArgValue::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn argument_list_serializes_as_plain_json_array() {
        let mut info = Map::new();
        info.insert("price".into(), json!(0.99));
        let args = vec![ArgValue::from("Purchase"), ArgValue::from(info), ArgValue::from(true)];

        let encoded = serde_json::to_string(&args).expect("serialize");
        assert_eq!(encoded, r#"["Purchase",{"price":0.99},true]"#);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let mut map = Map::new();
        map.insert("zeta".into(), json!(1));
        map.insert("alpha".into(), json!(2));
        let encoded = serde_json::to_string(&ArgValue::Map(map)).expect("serialize");
        assert_eq!(encoded, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(ArgValue::from_f64(f64::NAN).is_none());
        assert!(ArgValue::from_f64(f64::INFINITY).is_none());
        assert_eq!(ArgValue::from_f64(1.5).map(|v| v.kind()), Some(ArgKind::Number));
    }

    #[test]
    fn json_without_a_variant_is_rejected() {
        assert!(ArgValue::from_json(Value::Null).is_none());
        assert!(ArgValue::from_json(json!([1, 2])).is_none());
        assert_eq!(
            ArgValue::from_json(json!("id-1")),
            Some(ArgValue::String("id-1".into()))
        );
    }

    #[test]
    fn integers_keep_integer_fidelity() {
        let value = ArgValue::from(1_700_000_000_123_i64);
        assert_eq!(serde_json::to_string(&value).expect("serialize"), "1700000000123");
    }
}
