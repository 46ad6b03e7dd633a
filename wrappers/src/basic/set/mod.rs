//!
//! A membership set of byte strings, one key per member.
//!
//! # Examples
//!
//! ```no_run
//! use nskv::{RocksEngine, Set};
//! use std::sync::Arc;
//!
//! let dir = format!("/tmp/nskv_testing/{}", rand::random::<u128>());
//! let db = Arc::new(RocksEngine::open_path(&dir).unwrap());
//!
//! let s = Set::new("xxx", db);
//! s.add(b"foo").unwrap();
//! assert!(s.contains(b"foo").unwrap());
//! s.remove(b"foo").unwrap();
//! assert!(!s.contains(b"foo").unwrap());
//! ```
//!


use crate::common::{Result, NULL};
use nskv_core::{Engine, Namespace, RocksEngine};
use std::sync::Arc;

/// A persistent set.
pub struct Set<E: Engine = RocksEngine> {
    ns: Namespace,
    db: Arc<E>,
}

impl<E: Engine> Set<E> {
    pub fn new(ns: impl Into<Namespace>, db: Arc<E>) -> Self {
        Self { ns: ns.into(), db }
    }

    #[inline(always)]
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Adding an existing member is a no-op.
    #[inline(always)]
    pub fn add(&self, member: impl AsRef<[u8]>) -> Result<()> {
        self.db.put(&self.ns.key(member), NULL).map_err(Into::into)
    }

    /// Removing a missing member is a no-op.
    #[inline(always)]
    pub fn remove(&self, member: impl AsRef<[u8]>) -> Result<()> {
        self.db.delete(&self.ns.key(member)).map_err(Into::into)
    }

    #[inline(always)]
    pub fn contains(&self, member: impl AsRef<[u8]>) -> Result<bool> {
        Ok(self.db.get(&self.ns.key(member))?.is_some())
    }
}
