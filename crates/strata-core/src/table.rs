//! The immutable value table — one fully-merged snapshot of configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::Value;

/// How lookup keys are matched against table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Case-insensitive matching (the default).
    #[default]
    IgnoreCase,
    /// Exact, case-sensitive matching.
    Strict,
}

/// An immutable mapping from key to [`Value`], produced by one aggregation
/// pass. The lookup mode is fixed at construction; rebuilding always
/// allocates a fresh table, so readers of an old snapshot are never exposed
/// to a partial update.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    entries: HashMap<String, Value>,
    mode: LookupMode,
}

impl ValueTable {
    pub fn new(entries: HashMap<String, Value>, mode: LookupMode) -> Self {
        Self { entries, mode }
    }

    /// An empty table with the given lookup mode.
    pub fn empty(mode: LookupMode) -> Self {
        Self {
            entries: HashMap::new(),
            mode,
        }
    }

    /// Resolve a key under this table's lookup mode.
    ///
    /// Under [`LookupMode::IgnoreCase`] this is a linear scan returning the
    /// first case-folded match; when two keys differ only by case, which one
    /// wins is unspecified.
    fn lookup(&self, key: &str) -> Option<&Value> {
        match self.mode {
            LookupMode::Strict => self.entries.get(key),
            LookupMode::IgnoreCase => self
                .entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v),
        }
    }

    /// The value for `key` rendered as a string. `None` only when the key
    /// is absent — every present value has a textual form.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lookup(key).map(Value::to_text)
    }

    /// The value for `key` as an integer; `None` when the key is absent or
    /// the value is not representable as one.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.lookup(key).and_then(Value::as_int)
    }

    /// The value for `key` as a float; `None` when absent or not
    /// representable.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.lookup(key).and_then(Value::as_float)
    }

    /// The value for `key` as a boolean; `None` when absent or not
    /// representable.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.lookup(key).and_then(Value::as_bool)
    }

    /// The value for `key` as a sequence of strings; `None` when absent or
    /// the underlying payload is not a sequence.
    pub fn get_strings(&self, key: &str) -> Option<Vec<String>> {
        self.lookup(key).and_then(Value::as_strings)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn mode(&self) -> LookupMode {
        self.mode
    }
}
