//! # nskv_core
//!
//! `nskv_core` provides the low-level building blocks for `nskv`: the storage
//! engine abstraction, the RocksDB backend, the namespaced key layout and the
//! environment configuration. It is not typically used directly by end-users,
//! but forms the foundation of the collections in the `nskv` crate.

#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]

/// Storage backends, raw data types, namespaces and shared utilities.
///
/// This module provides the `Engine` trait for abstracting over key-value
/// stores with atomic batch writes, along with the `Namespace` key builder
/// and the functions managing the database environment.
pub mod common;

/// Commonly used items, re-exported for convenience.
pub use common::{
    engines::{Batch, BatchOp, Engine, RocksEngine},
    namespace::Namespace,
    nskv_get_base_dir, nskv_set_base_dir, EngineCfg, RawBytes, RawKey, RawValue, GB,
    KB, MB, NULL,
};
