//! Builder-style construction of a [`Config`].

use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

use strata_core::{LookupMode, Source, Value};
use strata_sources::{EnvSource, FileSource, HttpSource, LiteralSource, VolumeSource};

use crate::config::Config;

/// Assembles a [`Config`] from sources, lookup policy, and watch paths.
///
/// Sources are registered in the order the `with_*` calls are made, which
/// is also their precedence order: on key collision, the last one wins.
///
/// # Example
/// ```no_run
/// use strata::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_env("APP_")
///     .with_file("/etc/app/app.conf", "=")
///     .with_value("region", "eu-north-1")
///     .build();
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    mode: LookupMode,
    sources: Vec<Arc<dyn Source>>,
    watches: Vec<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// How lookup keys match table keys; case-insensitive by default.
    pub fn lookup_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register a custom source.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Read environment variables; an empty prefix reads them all.
    pub fn with_env(self, prefix: &str) -> Self {
        if prefix.is_empty() {
            self.with_source(EnvSource::new())
        } else {
            self.with_source(EnvSource::with_prefix(prefix))
        }
    }

    /// Read a `key<sep>value` file.
    pub fn with_file(self, path: impl Into<PathBuf>, separator: &str) -> Self {
        self.with_source(FileSource::new(path).with_separator(separator))
    }

    /// Add a single literal key/value pair.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_source(LiteralSource::new().with(key, value))
    }

    /// Read a mounted volume directory (one file per key).
    pub fn with_volume(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(VolumeSource::new(path))
    }

    /// Fetch a remote `key: value` document.
    pub fn with_url(self, url: Url) -> Self {
        self.with_source(HttpSource::new(url))
    }

    /// Watch a path once built. Requires a running Tokio runtime at build
    /// time; watch failures are reported on the error channel.
    pub fn with_watch(mut self, path: impl Into<PathBuf>) -> Self {
        self.watches.push(path.into());
        self
    }

    pub fn build(self) -> Config {
        let config = Config::with_lookup_mode(self.mode);
        for source in self.sources {
            config.add_source_dyn(source);
        }
        for path in self.watches {
            config.watch(&path);
        }
        config
    }
}
