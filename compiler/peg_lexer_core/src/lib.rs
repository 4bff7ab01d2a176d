//! Low-level lexical primitives for PEG grammar engines.
//!
//! Standalone crate with no `peg_*` dependencies. Provides:
//! - [`utf8`]: a byte-level UTF-8 codec (length classification, encode,
//!   decode, coarse whole-buffer decoding)
//! - [`Trie`]: an immutable longest-match prefix table for keyword and
//!   literal recognition
//!
//! Everything here is a pure function over borrowed buffers or an immutable
//! value, so results can be shared freely across threads.

pub mod trie;
pub mod utf8;

pub use trie::{PrefixInfo, Trie};
pub use utf8::{
    codepoint_count, codepoint_length, decode, decode_codepoint, encode_codepoint,
    encode_codepoint_into, EncodedCodepoint, DECODE_FAILURE,
};
