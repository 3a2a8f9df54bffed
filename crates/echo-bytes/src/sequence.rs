// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable byte sequence value type.
//!
//! [`ByteSequence`] owns its bytes behind an `Arc<[u8]>`: clones share storage,
//! and no API hands out mutable access. Slice construction copies the input, so
//! a caller mutating its own buffer afterwards cannot reach the wrapped value.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::BytesError;

/// Compute the 64-bit content hash of `bytes`.
///
/// Low 64 bits (little endian) of `BLAKE3(bytes)`. [`ByteSequence`] caches this
/// value at construction; it always equals `content_hash_of(seq.as_bytes())`.
pub fn content_hash_of(bytes: &[u8]) -> u64 {
    let digest = blake3::hash(bytes);
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

/// An immutable sequence of bytes with value semantics.
///
/// Equality, hashing and ordering depend only on the contents. Ordering is
/// unsigned lexicographic (see the crate docs). The content hash is computed
/// once, eagerly, so construction is O(n) and [`content_hash`] is O(1).
///
/// ```
/// use echo_bytes::ByteSequence;
///
/// let seq = ByteSequence::from(&[0x00, 0xff, 0x10]);
/// assert_eq!(seq.to_string(), "00ff10");
/// assert!(ByteSequence::from(&[0x80]) > ByteSequence::from(&[0x01]));
/// assert!(ByteSequence::from(&[1, 2]) < ByteSequence::from(&[1, 2, 3]));
/// ```
///
/// [`content_hash`]: ByteSequence::content_hash
#[derive(Clone)]
pub struct ByteSequence {
    data: Arc<[u8]>,
    hash: u64,
}

impl ByteSequence {
    /// Wrap `data` and compute its content hash.
    ///
    /// Borrowed slices are copied; owned buffers (`Vec<u8>`, `Box<[u8]>`,
    /// `Arc<[u8]>`) are moved in without copying.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        let hash = content_hash_of(&data);
        Self { data, hash }
    }

    /// Wrap a possibly-absent input.
    ///
    /// # Errors
    ///
    /// Returns [`BytesError::MissingData`] when `data` is `None`. An empty
    /// slice is present data and succeeds.
    pub fn try_new(data: Option<&[u8]>) -> Result<Self, BytesError> {
        let Some(bytes) = data else {
            debug!("rejected byte sequence construction without backing data");
            return Err(BytesError::MissingData);
        };
        Ok(Self::new(bytes))
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse the canonical hex rendering. Upper-case digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`BytesError::InvalidHex`] for odd-length input or non-hex
    /// characters.
    pub fn from_hex(s: &str) -> Result<Self, BytesError> {
        match hex::decode(s) {
            Ok(bytes) => Ok(Self::from(bytes)),
            Err(err) => {
                debug!(%err, len = s.len(), "rejected hex input for byte sequence");
                Err(BytesError::InvalidHex(err))
            }
        }
    }

    /// Read-only view of the bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy the bytes into a fresh, caller-owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// The content hash cached at construction.
    pub fn content_hash(&self) -> u64 {
        self.hash
    }

    /// Lowercase hex rendering, i.e. the `Display` output.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Three-way comparison as a sign: `-1`, `0` or `1`.
    pub fn compare_sign(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Equality against a type-erased value. Anything that is not a
    /// `ByteSequence` is unequal; this never fails.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Ordering against a type-erased value.
    ///
    /// # Errors
    ///
    /// Returns [`BytesError::TypeMismatch`] when `other` is not a
    /// `ByteSequence`.
    pub fn compare_dyn(&self, other: &dyn Any) -> Result<Ordering, BytesError> {
        other.downcast_ref::<Self>().map_or_else(
            || {
                debug!("rejected comparison of byte sequence with foreign type");
                Err(BytesError::TypeMismatch)
            },
            |other| Ok(self.cmp(other)),
        )
    }
}

impl Default for ByteSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ByteSequence {
    fn eq(&self, other: &Self) -> bool {
        // Cached hashes differ => contents differ.
        self.hash == other.hash && self.data == other.data
    }
}

impl Eq for ByteSequence {}

impl PartialOrd for ByteSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        // `u8` slices compare lexicographically as unsigned magnitudes, with a
        // strict prefix ordered first.
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteSequence {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(&bytes[..])
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<Box<[u8]>> for ByteSequence {
    fn from(bytes: Box<[u8]>) -> Self {
        Self::new(bytes)
    }
}

impl From<Arc<[u8]>> for ByteSequence {
    fn from(bytes: Arc<[u8]>) -> Self {
        Self::new(bytes)
    }
}

impl FromStr for ByteSequence {
    type Err = BytesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSequence({self})")
    }
}
