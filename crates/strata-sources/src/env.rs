//! Environment variable source.

use strata_core::{Result, Source, SourceMap, Value};

/// Reads configuration from process environment variables.
///
/// Keys are lowercased and trimmed; values are trimmed. With a prefix, only
/// variables starting with it (case-insensitively) contribute, and the
/// prefix is stripped from the key.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// A source over the whole environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source over variables carrying the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_lowercase(),
        }
    }
}

impl Source for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self) -> Result<SourceMap> {
        // Non-UTF-8 variables are carried lossily rather than skipped.
        let pairs = std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        });
        Ok(from_pairs(pairs, &self.prefix))
    }
}

fn from_pairs(pairs: impl Iterator<Item = (String, String)>, prefix: &str) -> SourceMap {
    let mut values = SourceMap::new();

    for (key, value) in pairs {
        let key = key.trim().to_lowercase();
        if !prefix.is_empty() && !key.starts_with(prefix) {
            continue;
        }
        let key = if prefix.is_empty() {
            key
        } else {
            key.replacen(prefix, "", 1)
        };
        values.insert(key, Value::from(value.trim()));
    }

    values
}
