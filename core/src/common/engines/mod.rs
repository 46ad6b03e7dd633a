/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

mod rocks_backend;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

pub use rocks_backend::RocksEngine;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

use crate::common::{RawKey, RawValue};
use ruc::*;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Low-level database interface.
///
/// Keys handed to an engine are physical keys, namespacing is done by the
/// callers through [`Namespace`](crate::Namespace).
pub trait Engine: Send + Sync {
    /// `Ok(None)` means the key does not exist.
    fn get(&self, key: &[u8]) -> Result<Option<RawValue>>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Deleting a missing key is not an error.
    fn delete(&self, key: &[u8]) -> Result<()>;

    /// Apply all operations of `batch` atomically: either every one of them
    /// becomes visible (and durable), or none does.
    fn commit(&self, batch: Batch) -> Result<()>;

    /// All entries whose key starts with `prefix`, in key order.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(RawKey, RawValue)>>;

    /// Flush data to disk, may take a long time.
    fn flush(&self) -> Result<()>;

    /// Collect operations with `f`, then commit them as one batch.
    fn write_batch<F>(&self, f: F) -> Result<()>
    where
        Self: Sized,
        F: FnOnce(&mut Batch),
    {
        let mut batch = Batch::default();
        f(&mut batch);
        self.commit(batch).c(d!())
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchOp {
    Insert(RawKey, RawValue),
    Remove(RawKey),
}

/// An ordered list of writes, applied all-or-nothing by [`Engine::commit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    ops: Vec<BatchOp>,
}

impl Batch {
    #[inline(always)]
    pub fn insert(&mut self, key: impl Into<RawKey>, value: impl Into<RawValue>) {
        self.ops.push(BatchOp::Insert(key.into(), value.into()));
    }

    #[inline(always)]
    pub fn remove(&mut self, key: impl Into<RawKey>) {
        self.ops.push(BatchOp::Remove(key.into()));
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline(always)]
    pub fn ops(&self) -> &[BatchOp] {
        &self.ops
    }

    #[inline(always)]
    pub fn into_ops(self) -> Vec<BatchOp> {
        self.ops
    }
}

impl<E: Engine> Engine for std::sync::Arc<E> {
    fn get(&self, key: &[u8]) -> Result<Option<RawValue>> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        (**self).delete(key)
    }

    fn commit(&self, batch: Batch) -> Result<()> {
        (**self).commit(batch)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(RawKey, RawValue)>> {
        (**self).scan_prefix(prefix)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
