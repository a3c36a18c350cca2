//! Mounted-volume source (Kubernetes style: one file per key).

use std::path::PathBuf;

use tracing::debug;
use walkdir::WalkDir;

use strata_core::{Result, Source, SourceMap, Value};

/// Walks a mounted directory and maps each regular file to a key/value
/// pair: the file name is the key, the file contents the value.
///
/// Symlinked files (how Kubernetes projects secrets and config maps) are
/// read through; unreadable entries are skipped. A missing or unreadable
/// root is a load error.
#[derive(Debug, Clone)]
pub struct VolumeSource {
    root: PathBuf,
}

impl VolumeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for VolumeSource {
    fn name(&self) -> &str {
        "volume"
    }

    fn load(&self) -> Result<SourceMap> {
        let mut values = SourceMap::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.path().is_file() {
                continue;
            }
            let key = entry.file_name().to_string_lossy().into_owned();
            match std::fs::read_to_string(entry.path()) {
                Ok(body) => {
                    values.insert(key, Value::from(body));
                }
                Err(e) => {
                    debug!(path = ?entry.path(), error = %e, "skipping unreadable volume entry");
                }
            }
        }

        Ok(values)
    }
}
