//! Literal in-memory source.

use strata_core::{Result, Source, SourceMap, Value};

/// A source over literal key/value pairs supplied in code.
///
/// Useful for defaults, overrides, and tests.
///
/// # Example
/// ```
/// use strata_sources::LiteralSource;
/// let source = LiteralSource::new()
///     .with("host", "localhost")
///     .with("port", 8080i64);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiteralSource {
    values: SourceMap,
}

impl LiteralSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl Source for LiteralSource {
    fn name(&self) -> &str {
        "literal"
    }

    fn load(&self) -> Result<SourceMap> {
        Ok(self.values.clone())
    }
}
