//! The source trait — external producers of raw configuration values.

use std::collections::HashMap;

use crate::error::Result;
use crate::value::Value;

/// The flat mapping a source produces on each load.
pub type SourceMap = HashMap<String, Value>;

/// A producer of raw configuration values.
///
/// Implement this trait to feed configuration from custom backends
/// (databases, remote stores, secret managers). A source declares no
/// ordering or priority of its own: precedence is decided by registration
/// order in the aggregator, later registrations overwriting earlier ones on
/// key collision.
///
/// Loading is synchronous and runs on the aggregating thread; sources with
/// a network backend should bound their own call with a short timeout and
/// fail fast rather than stall the whole pass. A load error is non-fatal to
/// aggregation — the source simply contributes no values that cycle.
pub trait Source: Send + Sync {
    /// A short human-readable name, used in error reports and logs.
    fn name(&self) -> &str;

    /// Produce the source's current key/value mapping.
    fn load(&self) -> Result<SourceMap>;
}
