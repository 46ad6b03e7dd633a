//!
//! A durable FIFO queue stored as a chain of key-value links.
//!
//! Layout inside the queue's namespace:
//!
//! - the *front* sentinel holds the encoded head item, and is absent whenever
//!   the queue is empty;
//! - the *back* sentinel holds the physical key at which the next push writes
//!   its link;
//! - for every item with a successor, `ns ++ encoded(item) => encoded(next)`.
//!
//! Every `push` and `pop` is committed as one atomic batch, so reopening the
//! database after a crash always finds the state before or after a complete
//! operation.
//!
//! # Examples
//!
//! ```no_run
//! use nskv::{Error, Queue, RocksEngine};
//! use std::sync::Arc;
//!
//! let dir = format!("/tmp/nskv_testing/{}", rand::random::<u128>());
//! let db = Arc::new(RocksEngine::open_path(&dir).unwrap());
//!
//! let q = Queue::new("xxx", db);
//! q.push(b"foo").unwrap();
//! q.push(b"foo").unwrap();
//!
//! assert_eq!(q.pop().unwrap(), b"foo");
//! assert_eq!(q.pop().unwrap(), b"foo");
//! assert!(matches!(q.pop(), Err(Error::EmptyQueue)));
//! ```
//!


use crate::common::{
    ende::{QueueItem, TAG},
    Error, RawKey, RawValue, Result,
};
use nskv_core::{Batch, Engine, Namespace, RocksEngine};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

// Sentinels start with 0x00, encoded items with `TAG`.
const FRONT: &[u8] = &[0x00, b'f'];
const BACK: &[u8] = &[0x00, b'b'];

/// Where the next push writes its link.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BackRegister {
    /// Never pushed to.
    Unset,
    /// Non-empty, holds the physical link key of the tail item.
    Item(RawKey),
    /// Drained after at least one push; the next link goes to the front
    /// sentinel itself.
    Reinit,
}

/// A persistent FIFO queue of byte payloads.
pub struct Queue<E: Engine = RocksEngine> {
    ns: Namespace,
    db: Arc<E>,

    front_key: RawKey,
    back_key: RawKey,

    lk: Mutex<()>,
}

impl<E: Engine> Queue<E> {
    /// Open the queue living in `ns`.
    ///
    /// No I/O happens here; whatever the namespace already holds is picked
    /// up by the first operation.
    pub fn new(ns: impl Into<Namespace>, db: Arc<E>) -> Self {
        let ns = ns.into();
        Self {
            front_key: ns.key(FRONT),
            back_key: ns.key(BACK),
            ns,
            db,
            lk: Mutex::new(()),
        }
    }

    #[inline(always)]
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Append `payload` to the back of the queue.
    pub fn push(&self, payload: impl AsRef<[u8]>) -> Result<()> {
        let _lk = self.lk.lock();

        let encoded = QueueItem::new(&self.ns, payload).encode()?;
        let tail_link = self.ns.key(&encoded);

        let mut batch = Batch::default();

        match self.back_register()? {
            BackRegister::Unset => {
                debug!(ns = %self.ns, "first push, initializing front pointer");
                batch.insert(self.front_key.clone(), encoded);
            }
            BackRegister::Item(slot) => {
                batch.insert(slot, encoded);
            }
            BackRegister::Reinit => {
                debug!(ns = %self.ns, "push after drain, re-establishing front pointer");
                batch.insert(self.front_key.clone(), encoded);
            }
        }

        batch.insert(self.back_key.clone(), tail_link);

        self.db.commit(batch)?;
        trace!(ns = %self.ns, "pushed");

        Ok(())
    }

    /// Remove and return the item at the front of the queue.
    ///
    /// Fails with [`Error::EmptyQueue`] when there is nothing to pop.
    pub fn pop(&self) -> Result<RawValue> {
        let _lk = self.lk.lock();

        let head = self.db.get(&self.front_key)?.ok_or(Error::EmptyQueue)?;
        let item = self.decode(&head)?;

        let head_link = self.ns.key(&head);
        let next = self.db.get(&head_link)?;

        let mut batch = Batch::default();

        if let Some(next) = next {
            batch.remove(head_link);
            batch.insert(self.front_key.clone(), next);
        } else {
            debug!(ns = %self.ns, "queue drained");
            batch.remove(self.front_key.clone());
            batch.insert(self.back_key.clone(), self.front_key.clone());
        }

        self.db.commit(batch)?;
        trace!(ns = %self.ns, "popped");

        Ok(item.payload)
    }

    /// The payload at the front, without removing it.
    pub fn peek(&self) -> Result<Option<RawValue>> {
        let _lk = self.lk.lock();

        match self.db.get(&self.front_key)? {
            Some(head) => self.decode(&head).map(|item| Some(item.payload)),
            None => Ok(None),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> Result<bool> {
        let _lk = self.lk.lock();
        Ok(self.db.get(&self.front_key)?.is_none())
    }

    /// Number of live items.
    ///
    /// Walks the whole chain, O(n) reads.
    pub fn len(&self) -> Result<usize> {
        let _lk = self.lk.lock();

        let mut cnt = 0;
        let mut cur = self.db.get(&self.front_key)?;
        while let Some(encoded) = cur {
            cnt += 1;
            cur = self.db.get(&self.ns.key(&encoded))?;
        }

        Ok(cnt)
    }

    fn back_register(&self) -> Result<BackRegister> {
        let reg = match self.db.get(&self.back_key)? {
            None => BackRegister::Unset,
            Some(k) if k == self.front_key => BackRegister::Reinit,
            Some(k) => {
                if k.get(self.ns.as_prefix().len()) != Some(&TAG) || !self.ns.owns(&k) {
                    return Err(Error::codec("back register points outside the chain"));
                }
                BackRegister::Item(k)
            }
        };
        Ok(reg)
    }

    fn decode(&self, encoded: &[u8]) -> Result<QueueItem> {
        let item = QueueItem::decode(encoded)?;
        if item.namespace != self.ns.name() {
            return Err(Error::codec(format!(
                "item of namespace {:?} found in {}",
                String::from_utf8_lossy(&item.namespace),
                self.ns
            )));
        }
        Ok(item)
    }
}
