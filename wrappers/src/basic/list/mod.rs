//!
//! An append-only, integer-indexed list of byte values.
//!
//! Element `i` is stored at `ns ++ u64_be(i)`; the length lives under a
//! sentinel key of the same namespace and is updated in the same batch as
//! the appended element, so a reopened list resumes at the right index.
//!
//! # Examples
//!
//! ```no_run
//! use nskv::{List, RocksEngine};
//! use std::sync::Arc;
//!
//! let dir = format!("/tmp/nskv_testing/{}", rand::random::<u128>());
//! let db = Arc::new(RocksEngine::open_path(&dir).unwrap());
//!
//! let l = List::new("xxx", db);
//! assert_eq!(l.append(b"foo").unwrap(), 0);
//! assert_eq!(l.append(b"bar").unwrap(), 1);
//! assert_eq!(l.get(1).unwrap(), b"bar");
//! ```
//!


use crate::common::{Error, RawKey, RawValue, Result};
use nskv_core::{Batch, Engine, Namespace, RocksEngine};
use parking_lot::Mutex;
use std::{mem::size_of, sync::Arc};

// index keys are exactly 8 bytes long, this one is 2
const LEN: &[u8] = &[0x00, b'l'];

/// A persistent append-only list.
pub struct List<E: Engine = RocksEngine> {
    ns: Namespace,
    db: Arc<E>,
    len_key: RawKey,
    lk: Mutex<()>,
}

impl<E: Engine> List<E> {
    pub fn new(ns: impl Into<Namespace>, db: Arc<E>) -> Self {
        let ns = ns.into();
        Self {
            len_key: ns.key(LEN),
            ns,
            db,
            lk: Mutex::new(()),
        }
    }

    #[inline(always)]
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Append `value`, returning its index.
    pub fn append(&self, value: impl AsRef<[u8]>) -> Result<u64> {
        let _lk = self.lk.lock();

        let idx = self.load_len()?;

        let mut batch = Batch::default();
        batch.insert(self.key(idx), value.as_ref());
        batch.insert(self.len_key.clone(), (idx + 1).to_be_bytes().to_vec());
        self.db.commit(batch)?;

        Ok(idx)
    }

    /// The value at `idx`.
    pub fn get(&self, idx: u64) -> Result<RawValue> {
        let _lk = self.lk.lock();

        let len = self.load_len()?;
        if idx >= len {
            return Err(Error::IndexOutOfBounds { idx, len });
        }

        self.db
            .get(&self.key(idx))?
            .ok_or_else(|| Error::codec(format!("list element {} missing", idx)))
    }

    pub fn last(&self) -> Result<Option<RawValue>> {
        let _lk = self.lk.lock();

        match self.load_len()? {
            0 => Ok(None),
            len => self.db.get(&self.key(len - 1)).map_err(Error::from),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> Result<u64> {
        let _lk = self.lk.lock();
        self.load_len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|l| 0 == l)
    }

    #[inline(always)]
    fn key(&self, idx: u64) -> RawKey {
        self.ns.key(idx.to_be_bytes())
    }

    fn load_len(&self) -> Result<u64> {
        match self.db.get(&self.len_key)? {
            None => Ok(0),
            Some(v) => <[u8; size_of::<u64>()]>::try_from(v.as_slice())
                .map(u64::from_be_bytes)
                .map_err(|_| Error::codec(format!("list length of {} bytes", v.len()))),
        }
    }
}
