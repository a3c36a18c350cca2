//! Remote HTTP source.

use std::time::Duration;

use url::Url;

use strata_core::{Result, Source, SourceMap, StrataError};

use crate::kv;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches a remote file of `key<sep>value` lines over HTTP.
///
/// The request is bounded by a short timeout (5 seconds by default) so a
/// slow endpoint fails fast instead of stalling the aggregation pass. The
/// load is blocking; when the reload runs inside an async runtime it is
/// dispatched to a blocking worker by the coordinator.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    separator: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            separator: kv::DEFAULT_SEPARATOR.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn remote_err(&self, reason: impl ToString) -> StrataError {
        StrataError::Remote {
            url: self.url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Source for HttpSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn load(&self) -> Result<SourceMap> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.remote_err(e))?;

        let response = client
            .get(self.url.clone())
            .send()
            .map_err(|e| self.remote_err(e))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(self.remote_err(format!("unsuccessful status code: {status}")));
        }

        let body = response.text().map_err(|e| self.remote_err(e))?;
        Ok(kv::parse_lines(&body, &self.separator))
    }
}
