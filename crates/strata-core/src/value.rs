//! The coercible configuration value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single unit of configuration data.
///
/// Sources produce values in whatever shape they have on hand — usually
/// strings — and the accessors perform best-effort coercion into the shape
/// a binding field declares. A `Value` is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Strings(Vec<String>),
}

impl Value {
    /// Render this value as text. Never fails: non-string payloads fall
    /// back to their natural textual form, sequences to `[a b c]`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Coerce to an integer. Succeeds for integer payloads and for strings
    /// that parse cleanly as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Str(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a float. Succeeds for float and integer payloads and for
    /// strings that parse cleanly as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(i) => Some(*i as f64),
            Value::Str(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a boolean. Strings accept `1/0/t/f/true/false` in the
    /// usual casings.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Str(s) => parse_bool(s),
            _ => None,
        }
    }

    /// Coerce to a sequence of strings. Only succeeds when the underlying
    /// payload already is one — no splitting is performed.
    pub fn as_strings(&self) -> Option<Vec<String>> {
        match self {
            Value::Strings(items) => Some(items.clone()),
            _ => None,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Strings(items) => write!(f, "[{}]", items.join(" ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Strings(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::Strings(items.into_iter().map(str::to_string).collect())
    }
}
