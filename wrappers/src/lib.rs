//! # nskv
//!
//! Namespaced persistent collections (FIFO queue, list, set) sharing a single
//! embedded key-value store.
//!
//! Each collection owns a [`Namespace`]; every key it writes is prefixed by
//! that namespace, so any number of independent collections can live in one
//! physical database.
//!
//! ```no_run
//! use nskv::{Queue, RocksEngine};
//! use std::sync::Arc;
//!
//! let db = Arc::new(RocksEngine::open_path("/tmp/nskv_doc").unwrap());
//! let q = Queue::new("jobs", Arc::clone(&db));
//!
//! q.push(b"first").unwrap();
//! q.push(b"second").unwrap();
//! assert_eq!(q.pop().unwrap(), b"first");
//! ```

#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]

pub mod basic;
pub mod common;

pub use basic::{list::List, queue::Queue, set::Set};

pub use common::{
    ende::{Nonce, QueueItem},
    Error, Result,
};

pub use nskv_core::{self, *};
