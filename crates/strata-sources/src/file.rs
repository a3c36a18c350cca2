//! Line-delimited key/value file source.

use std::path::PathBuf;

use strata_core::{Result, Source, SourceMap};

use crate::kv;

/// Reads a backing file of `key<sep>value` lines.
///
/// The default separator is `:`. A missing or unreadable file is a load
/// error; the aggregator reports it and continues with the other sources.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    separator: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: kv::DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Source for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<SourceMap> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(kv::parse_lines(&raw, &self.separator))
    }
}
