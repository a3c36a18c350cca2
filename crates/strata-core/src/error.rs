use thiserror::Error;

/// Unified error type for the Strata workspace.
#[derive(Error, Debug)]
pub enum StrataError {
    // ── Source errors ──────────────────────────────────────────
    #[error("source {name} failed: {reason}")]
    Source { name: String, reason: String },

    #[error("remote fetch failed for {url}: {reason}")]
    Remote { url: String, reason: String },

    // ── Binding errors ─────────────────────────────────────────
    #[error("bind target unavailable: {0}")]
    TargetUnavailable(String),

    // ── Watch errors ───────────────────────────────────────────
    #[error("watch error: {0}")]
    Watch(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StrataError>;
