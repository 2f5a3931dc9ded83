//! Log call arguments and per-call user context
//!
//! Percent-template substitution works over an explicit tagged value type
//! rather than trait objects, so each placeholder can insist on the variant
//! it supports and reject the rest with a format error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A positional argument for a log template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogArg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Arbitrary structured data, rendered as JSON.
    Structured(serde_json::Value),
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Str(s) => write!(f, "{}", s),
            LogArg::Int(i) => write!(f, "{}", i),
            LogArg::Float(fl) => write!(f, "{}", fl),
            LogArg::Bool(b) => write!(f, "{}", b),
            LogArg::Structured(v) => {
                write!(f, "{}", serde_json::to_string(v).unwrap_or_else(|_| "null".into()))
            }
        }
    }
}

impl LogArg {
    /// Variant name used in format-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            LogArg::Str(_) => "string",
            LogArg::Int(_) => "integer",
            LogArg::Float(_) => "float",
            LogArg::Bool(_) => "boolean",
            LogArg::Structured(_) => "structured",
        }
    }

    /// Convert to a serde_json::Value
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LogArg::Str(s) => serde_json::Value::String(s.clone()),
            LogArg::Int(i) => serde_json::Value::Number((*i).into()),
            LogArg::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LogArg::Bool(b) => serde_json::Value::Bool(*b),
            LogArg::Structured(v) => v.clone(),
        }
    }

    /// The argument's own JSON representation, as substituted in
    /// `json_format` mode. Strings gain quotes, structured values stay
    /// compact single-line.
    pub fn to_json_string(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string(&self.to_json_value())?)
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Str(s)
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Str(s.to_string())
    }
}

impl From<i64> for LogArg {
    fn from(i: i64) -> Self {
        LogArg::Int(i)
    }
}

impl From<i32> for LogArg {
    fn from(i: i32) -> Self {
        LogArg::Int(i as i64)
    }
}

impl From<u32> for LogArg {
    fn from(i: u32) -> Self {
        LogArg::Int(i as i64)
    }
}

impl From<f64> for LogArg {
    fn from(f: f64) -> Self {
        LogArg::Float(f)
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Bool(b)
    }
}

impl From<serde_json::Value> for LogArg {
    fn from(v: serde_json::Value) -> Self {
        LogArg::Structured(v)
    }
}

/// Per-call authentication context.
///
/// A free-form key-value mapping; only the `uid` key participates in line
/// assembly, as the `USERID: ` prefix ahead of the message body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    fields: HashMap<String, LogArg>,
}

impl UserContext {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Shorthand for a context carrying only a uid.
    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self::new().with_field("uid", uid.into())
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<LogArg>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<LogArg>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&LogArg> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The recognized identifier, rendered for the line prefix.
    /// `None` when no `uid` key is present; no prefix is emitted then.
    pub fn uid(&self) -> Option<String> {
        self.fields.get("uid").map(|v| v.to_string())
    }
}
