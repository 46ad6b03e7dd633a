//!
//! Options used when opening a storage engine.
//!

use super::{nskv_get_base_dir, MB};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for opening an engine instance.
///
/// The default configuration places the data under `${NSKV_BASE_DIR}/default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineCfg {
    /// Directory holding the database files.
    pub path: PathBuf,
    /// Create the database (and its directory) when it does not exist yet.
    pub create_if_missing: bool,
    /// Fsync the write-ahead log on every write, including batches.
    pub sync_writes: bool,
    /// Size of a single memtable, in bytes.
    pub write_buffer_size: usize,
}

impl EngineCfg {
    /// Default options rooted at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn sync_writes(mut self, on: bool) -> Self {
        self.sync_writes = on;
        self
    }

    pub fn create_if_missing(mut self, on: bool) -> Self {
        self.create_if_missing = on;
        self
    }
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            path: nskv_get_base_dir().join("default"),
            create_if_missing: true,
            sync_writes: false,
            write_buffer_size: 64 * MB as usize,
        }
    }
}
