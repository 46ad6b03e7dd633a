//!
//! # ende
//!
//! (en)Encode and (de)Decode of queue items.
//!
//! An encoded item is used both as a stored value and, later, as the key of
//! the chain link pointing to its successor, so the layout must be exactly
//! reversible and collision-free. Layout, integers in big-endian:
//!
//! ```text
//! [TAG: u8][ns_len: u32][ns][payload_len: u32][payload][nonce: 16 bytes]
//! ```
//!
//! Fields are framed by their lengths, never by delimiters, so payloads may
//! contain any byte.
//!

use super::{Error, RawBytes, Result};
use nskv_core::Namespace;
use std::{fmt, mem::size_of};

type FieldLen = u32;

const LEN_SIZE: usize = size_of::<FieldLen>();

/// First byte of every encoded item.
///
/// Sentinel keys of a queue start with a different byte, so an encoded item
/// can never be mistaken for one of them.
pub const TAG: u8 = 0x01;

pub const NONCE_SIZE: usize = 16;

/// A per-push unique token, keeping equal payloads apart once encoded.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// 128 random bits.
    #[inline(always)]
    pub fn random() -> Self {
        Self(rand::random::<u128>().to_be_bytes())
    }

    #[inline(always)]
    pub fn from_bytes(b: [u8; NONCE_SIZE]) -> Self {
        Self(b)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({:032x})", u128::from_be_bytes(self.0))
    }
}

/// A logical queue element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueItem {
    pub namespace: RawBytes,
    pub payload: RawBytes,
    pub nonce: Nonce,
}

impl QueueItem {
    /// A new item for `payload` in `ns`, with a fresh nonce.
    pub fn new(ns: &Namespace, payload: impl AsRef<[u8]>) -> Self {
        Self {
            namespace: ns.name().to_vec(),
            payload: payload.as_ref().to_vec(),
            nonce: Nonce::random(),
        }
    }

    #[inline(always)]
    pub fn encode(&self) -> Result<RawBytes> {
        encode(&self.namespace, &self.payload, &self.nonce)
    }

    #[inline(always)]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}

/// Encode an item.
///
/// Fails only when a field is longer than `u32::MAX` bytes.
pub fn encode(namespace: &[u8], payload: &[u8], nonce: &Nonce) -> Result<RawBytes> {
    let mut buf = Vec::with_capacity(
        1 + LEN_SIZE + namespace.len() + LEN_SIZE + payload.len() + NONCE_SIZE,
    );

    buf.push(TAG);
    put_field(&mut buf, namespace)?;
    put_field(&mut buf, payload)?;
    buf.extend_from_slice(nonce.as_bytes());

    Ok(buf)
}

/// Decode bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<QueueItem> {
    let mut r = Reader { buf: bytes };

    let tag = r.take(1, "tag")?[0];
    if TAG != tag {
        return Err(Error::codec(format!("unknown tag {:#04x}", tag)));
    }

    let namespace = r.field("namespace")?.to_vec();
    let payload = r.field("payload")?.to_vec();

    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(r.take(NONCE_SIZE, "nonce")?);

    if !r.buf.is_empty() {
        return Err(Error::codec(format!("{} trailing bytes", r.buf.len())));
    }

    Ok(QueueItem {
        namespace,
        payload,
        nonce: Nonce(nonce),
    })
}

fn put_field(buf: &mut RawBytes, field: &[u8]) -> Result<()> {
    let len = FieldLen::try_from(field.len())
        .map_err(|_| Error::codec(format!("field too long: {} bytes", field.len())))?;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(field);
    Ok(())
}

struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8]> {
        if self.buf.len() < n {
            return Err(Error::codec(format!(
                "truncated {}: need {} bytes, {} left",
                what,
                n,
                self.buf.len()
            )));
        }
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Ok(head)
    }

    fn field(&mut self, what: &str) -> Result<&'a [u8]> {
        let mut len = [0u8; LEN_SIZE];
        len.copy_from_slice(self.take(LEN_SIZE, what)?);
        let len = FieldLen::from_be_bytes(len) as usize;
        self.take(len, what)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whitespace_and_nul_survive() {
        let payload = b"hello world\t\n\0 \x01end".to_vec();
        let nonce = Nonce::random();
        let enc = encode(b"my ns", &payload, &nonce).unwrap();

        let item = decode(&enc).unwrap();
        assert_eq!(item.namespace, b"my ns");
        assert_eq!(item.payload, payload);
        assert_eq!(item.nonce, nonce);
    }

    #[test]
    fn empty_fields() {
        let nonce = Nonce::from_bytes([7; NONCE_SIZE]);
        let enc = encode(b"", b"", &nonce).unwrap();
        assert_eq!(enc.len(), 1 + 2 * LEN_SIZE + NONCE_SIZE);

        let item = decode(&enc).unwrap();
        assert!(item.namespace.is_empty());
        assert!(item.payload.is_empty());
        assert_eq!(item.nonce, nonce);
    }

    #[test]
    fn equal_payloads_encode_apart() {
        let ns = Namespace::new("q");
        let a = QueueItem::new(&ns, b"same");
        let b = QueueItem::new(&ns, b"same");
        assert_ne!(a.encode().unwrap(), b.encode().unwrap());
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        let nonce = Nonce::from_bytes([0; NONCE_SIZE]);
        let a = encode(b"ab", b"c", &nonce).unwrap();
        let b = encode(b"a", b"bc", &nonce).unwrap();
        assert_ne!(a, b);
        assert_eq!(decode(&a).unwrap().payload, b"c");
        assert_eq!(decode(&b).unwrap().payload, b"bc");
    }

    #[test]
    fn malformed_input_is_rejected() {
        let enc = encode(b"ns", b"payload", &Nonce::random()).unwrap();

        assert!(matches!(decode(&[]), Err(Error::Codec(_))));

        let mut bad_tag = enc.clone();
        bad_tag[0] = 0x00;
        assert!(matches!(decode(&bad_tag), Err(Error::Codec(_))));

        for cut in 1..enc.len() {
            assert!(
                matches!(decode(&enc[..cut]), Err(Error::Codec(_))),
                "prefix of len {} accepted",
                cut
            );
        }

        let mut trailing = enc.clone();
        trailing.push(0);
        assert!(matches!(decode(&trailing), Err(Error::Codec(_))));

        let mut huge_len = enc;
        huge_len[1..1 + LEN_SIZE].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(matches!(decode(&huge_len), Err(Error::Codec(_))));
    }
}
