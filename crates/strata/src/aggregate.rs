//! The source aggregator — merges every registered source into one table.

use std::sync::Arc;

use tracing::{debug, warn};

use strata_core::{LookupMode, Source, SourceMap, StrataError, ValueTable};

/// Pull every source in registration order and merge the results into a
/// fresh [`ValueTable`], later sources overwriting earlier ones on key
/// collision.
///
/// A failing source is reported through `report` and contributes nothing
/// this cycle; the pass itself always produces a table and never returns a
/// partial result as an error.
pub(crate) fn aggregate(
    sources: &[Arc<dyn Source>],
    mode: LookupMode,
    report: &mut dyn FnMut(StrataError),
) -> ValueTable {
    let mut merged = SourceMap::new();

    for source in sources {
        match source.load() {
            Ok(map) => {
                debug!(source = source.name(), keys = map.len(), "source loaded");
                merged.extend(map);
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "source failed, skipping this cycle");
                report(StrataError::Source {
                    name: source.name().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ValueTable::new(merged, mode)
}
