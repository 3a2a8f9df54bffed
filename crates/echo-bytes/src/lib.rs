// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable byte sequences with value semantics for Echo.
//!
//! `echo-bytes` provides [`ByteSequence`], a read-only wrapper around a run of
//! raw bytes that behaves like a value: two sequences with identical contents
//! are equal, hash identically and sort identically no matter where their
//! storage lives.
//!
//! # Ordering Policy
//!
//! Ordering is unsigned lexicographic. Every byte is a magnitude in `0..=255`,
//! the first differing position decides, and a strict prefix sorts before the
//! longer sequence. `0x80` therefore sorts after `0x01`.
//!
//! # Hash Policy
//!
//! The content hash is the low 64 bits (little endian) of `BLAKE3(bytes)`, with
//! no domain prefix. It is computed once at construction and cached; see
//! [`content_hash_of`].
//!
//! # Rendering
//!
//! [`Display`](std::fmt::Display) renders lowercase hex, two digits per byte,
//! with no separators or prefix. [`FromStr`](std::str::FromStr) parses it back.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::multiple_crate_versions,
    clippy::option_if_let_else,
    clippy::use_self
)]

mod sequence;
pub use sequence::{content_hash_of, ByteSequence};

/// Errors produced when building or comparing byte sequences.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BytesError {
    /// Construction was attempted without a backing sequence.
    #[error("[BYTES_MISSING_DATA] byte sequence requires backing data")]
    MissingData,
    /// A type-erased comparison was given something other than a [`ByteSequence`].
    #[error("[BYTES_TYPE_MISMATCH] cannot compare ByteSequence with a value of another type")]
    TypeMismatch,
    /// Hex input was not an even-length run of hex digits.
    #[error("[BYTES_INVALID_HEX] {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
