use crate::common::{
    engines::{Batch, BatchOp, Engine},
    EngineCfg, RawKey, RawValue,
};
use rocksdb::{
    DBCompressionType, Direction, IteratorMode, Options, WriteBatch, WriteOptions, DB,
};
use ruc::*;
use std::{
    fs,
    path::{Path, PathBuf},
    thread::available_parallelism,
};
use tracing::{debug, info};

/// A RocksDB instance opened on one directory.
///
/// Dropping the engine closes the database and releases its lock file,
/// after which the same directory can be opened again.
pub struct RocksEngine {
    db: DB,
    path: PathBuf,
    sync_writes: bool,
}

impl RocksEngine {
    pub fn open(cfg: &EngineCfg) -> Result<Self> {
        if cfg.create_if_missing {
            fs::create_dir_all(&cfg.path).c(d!())?;
        }

        let db = rocksdb_open(cfg).c(d!())?;

        info!(path = %cfg.path.display(), sync_writes = cfg.sync_writes, "rocksdb opened");

        Ok(Self {
            db,
            path: cfg.path.clone(),
            sync_writes: cfg.sync_writes,
        })
    }

    /// Open (or create) the database at `path` with default options.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(&EngineCfg::with_path(path.as_ref())).c(d!())
    }

    /// Open the database under `${NSKV_BASE_DIR}/default`.
    pub fn open_default() -> Result<Self> {
        Self::open(&EngineCfg::default()).c(d!())
    }

    #[inline(always)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline(always)]
    fn write_opts(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.sync_writes);
        opts
    }
}

impl Engine for RocksEngine {
    fn get(&self, key: &[u8]) -> Result<Option<RawValue>> {
        self.db.get(key).c(d!())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.db.put_opt(key, value, &self.write_opts()).c(d!())
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.db.delete_opt(key, &self.write_opts()).c(d!())
    }

    fn commit(&self, batch: Batch) -> Result<()> {
        let mut wb = WriteBatch::default();
        for op in batch.into_ops() {
            match op {
                BatchOp::Insert(k, v) => wb.put(k, v),
                BatchOp::Remove(k) => wb.delete(k),
            }
        }
        self.db.write_opt(wb, &self.write_opts()).c(d!())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(RawKey, RawValue)>> {
        let mut ret = vec![];
        for kv in self
            .db
            .iterator(IteratorMode::From(prefix, Direction::Forward))
        {
            let (k, v) = kv.c(d!())?;
            if !k.starts_with(prefix) {
                break;
            }
            ret.push((k.into_vec(), v.into_vec()));
        }
        Ok(ret)
    }

    fn flush(&self) -> Result<()> {
        debug!(path = %self.path.display(), "flushing rocksdb");
        self.db.flush().c(d!())
    }
}

fn rocksdb_open(cfg: &EngineCfg) -> Result<DB> {
    let mut opts = Options::default();

    opts.create_if_missing(cfg.create_if_missing);
    opts.set_write_buffer_size(cfg.write_buffer_size);

    let parallelism = available_parallelism().c(d!())?.get() as i32;
    opts.increase_parallelism(parallelism);

    #[cfg(feature = "compress")]
    opts.set_compression_type(DBCompressionType::Lz4);

    #[cfg(not(feature = "compress"))]
    opts.set_compression_type(DBCompressionType::None);

    DB::open(&opts, &cfg.path).c(d!())
}
