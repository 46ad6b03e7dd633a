//!
//! Namespaced key layout.
//!
//! Every physical key of a collection is `prefix ++ logical`, where the prefix
//! is the namespace name preceded by its length as a big-endian `u32`. The
//! prefix is self-delimiting, so two distinct namespaces never share a
//! physical key, even when one name is a byte-prefix of the other.
//!

use super::RawKey;
use serde::{Deserialize, Serialize};
use std::{fmt, mem::size_of};

type NameLen = u32;

const LEN_SIZE: usize = size_of::<NameLen>();

/// An immutable namespace identifying one logical collection.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct Namespace {
    // length-prefixed form of `name`
    prefix: RawKey,
}

impl Namespace {
    /// # Panics
    ///
    /// Panics if the name is longer than `u32::MAX` bytes.
    pub fn new(name: impl AsRef<[u8]>) -> Self {
        let name = name.as_ref();
        let len = NameLen::try_from(name.len()).unwrap_or_else(|_| {
            panic!("namespace too long: {} bytes", name.len());
        });

        let mut prefix = Vec::with_capacity(LEN_SIZE + name.len());
        prefix.extend_from_slice(&len.to_be_bytes());
        prefix.extend_from_slice(name);

        Self { prefix }
    }

    /// The raw name, as supplied by the caller.
    #[inline(always)]
    pub fn name(&self) -> &[u8] {
        &self.prefix[LEN_SIZE..]
    }

    /// The physical prefix shared by all keys of this namespace.
    #[inline(always)]
    pub fn as_prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Build the physical key for `logical`.
    #[inline(always)]
    pub fn key(&self, logical: impl AsRef<[u8]>) -> RawKey {
        let logical = logical.as_ref();
        let mut k = Vec::with_capacity(self.prefix.len() + logical.len());
        k.extend_from_slice(&self.prefix);
        k.extend_from_slice(logical);
        k
    }

    /// Whether `physical` was produced by [`Namespace::key`] on this namespace.
    #[inline(always)]
    pub fn owns(&self, physical: &[u8]) -> bool {
        physical.starts_with(&self.prefix)
    }
}

impl From<Vec<u8>> for Namespace {
    fn from(name: Vec<u8>) -> Self {
        Self::new(name)
    }
}

impl From<Namespace> for Vec<u8> {
    fn from(ns: Namespace) -> Self {
        ns.name().to_vec()
    }
}

impl From<&str> for Namespace {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&[u8]> for Namespace {
    fn from(name: &[u8]) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Namespace")
            .field(&String::from_utf8_lossy(self.name()))
            .finish()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.name()))
    }
}
