//! Parsed command-line flags source.

use clap::ArgMatches;
use clap::parser::ValueSource;

use strata_core::{Result, Source, SourceMap, Value};

/// Snapshots already-parsed [`clap::ArgMatches`].
///
/// Only arguments the user actually supplied on the command line
/// contribute — defaulted and env-filled arguments are left to the sources
/// that own them. Values are carried as strings: multi-value arguments
/// become string sequences, bare flags become `"true"`.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    matches: ArgMatches,
}

impl ArgsSource {
    pub fn new(matches: ArgMatches) -> Self {
        Self { matches }
    }
}

impl Source for ArgsSource {
    fn name(&self) -> &str {
        "args"
    }

    fn load(&self) -> Result<SourceMap> {
        let mut values = SourceMap::new();

        for id in self.matches.ids() {
            // Groups and untyped ids fail the raw lookup; skip them.
            let mut raw: Vec<String> = match self.matches.try_get_raw(id.as_str()) {
                Ok(Some(occurrences)) => occurrences
                    .map(|v| v.to_string_lossy().into_owned())
                    .collect(),
                Ok(None) => Vec::new(),
                Err(_) => continue,
            };
            if self.matches.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
                continue;
            }

            let value = match raw.len() {
                0 => Value::from("true"),
                1 => Value::from(raw.remove(0)),
                _ => Value::from(raw),
            };
            values.insert(id.as_str().to_string(), value);
        }

        Ok(values)
    }
}
