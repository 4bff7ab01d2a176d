//! Byte-level UTF-8 codec.
//!
//! UTF-8 spends a variable number of bytes per codepoint:
//!
//! | Range               | Bytes | Lead byte  |
//! |---------------------|-------|------------|
//! | U+0000..=U+007F     | 1     | `0xxxxxxx` |
//! | U+0080..=U+07FF     | 2     | `110xxxxx` |
//! | U+0800..=U+FFFF     | 3     | `1110xxxx` |
//! | U+10000..=U+10FFFF  | 4     | `11110xxx` |
//!
//! Every continuation byte is `10xxxxxx`.
//!
//! # Malformed Input
//!
//! Malformed or truncated input is expected (grammars parse untrusted text),
//! so nothing here panics or returns an error value. Failures surface as a
//! `0` length, a `None`, or an empty encoding, and the caller decides whether
//! to skip a byte or abort the match.
//!
//! Decoding checks only the lead byte and the available length; continuation
//! bits are masked, not validated. Decoded values are therefore raw `u32`
//! rather than `char`.

use smallvec::SmallVec;

/// UTF-8 encoding of a single codepoint. Stored inline (at most 4 bytes).
pub type EncodedCodepoint = SmallVec<[u8; 4]>;

/// Codepoint emitted by [`decode`] for a unit that fails to decode.
pub const DECODE_FAILURE: u32 = 0;

/// Byte length of the codepoint at the start of `bytes`.
///
/// Returns 0 if `bytes` is empty, the lead byte is not a valid lead byte, or
/// fewer bytes are available than the lead byte declares.
#[inline]
pub fn codepoint_length(bytes: &[u8]) -> usize {
    let Some(&b) = bytes.first() else {
        return 0;
    };
    let len = bytes.len();
    if b & 0x80 == 0 {
        1
    } else if b & 0xE0 == 0xC0 && len >= 2 {
        2
    } else if b & 0xF0 == 0xE0 && len >= 3 {
        3
    } else if b & 0xF8 == 0xF0 && len >= 4 {
        4
    } else {
        0
    }
}

/// Number of codepoints in `bytes`.
///
/// Steps by [`codepoint_length`]. A byte that does not start a complete
/// codepoint counts as one codepoint and the scan moves past it by a single
/// byte.
pub fn codepoint_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += codepoint_length(&bytes[i..]).max(1);
        count += 1;
    }
    count
}

/// Encode `cp` into `buf`, returning the number of bytes written.
///
/// Returns 0 (and leaves `buf` untouched) for surrogates
/// (`0xD800..=0xDFFF`) and values at or above `0x110000`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "every value is masked to at most 8 bits before the cast"
)]
pub fn encode_codepoint_into(cp: u32, buf: &mut [u8; 4]) -> usize {
    if cp < 0x0080 {
        buf[0] = (cp & 0x7F) as u8;
        1
    } else if cp < 0x0800 {
        buf[0] = (0xC0 | ((cp >> 6) & 0x1F)) as u8;
        buf[1] = (0x80 | (cp & 0x3F)) as u8;
        2
    } else if cp < 0xD800 {
        encode_three(cp, buf)
    } else if cp < 0xE000 {
        0
    } else if cp < 0x1_0000 {
        encode_three(cp, buf)
    } else if cp < 0x11_0000 {
        buf[0] = (0xF0 | ((cp >> 18) & 0x07)) as u8;
        buf[1] = (0x80 | ((cp >> 12) & 0x3F)) as u8;
        buf[2] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
        buf[3] = (0x80 | (cp & 0x3F)) as u8;
        4
    } else {
        0
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "every value is masked to at most 8 bits before the cast"
)]
fn encode_three(cp: u32, buf: &mut [u8; 4]) -> usize {
    buf[0] = (0xE0 | ((cp >> 12) & 0x0F)) as u8;
    buf[1] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
    buf[2] = (0x80 | (cp & 0x3F)) as u8;
    3
}

/// Encode `cp` as UTF-8. The result is empty when `cp` is not a scalar value.
pub fn encode_codepoint(cp: u32) -> EncodedCodepoint {
    let mut buf = [0u8; 4];
    let len = encode_codepoint_into(cp, &mut buf);
    SmallVec::from_slice(&buf[..len])
}

/// Decode the codepoint at the start of `bytes`.
///
/// Returns `(codepoint, bytes_consumed)`, or `None` when `bytes` is empty,
/// the lead byte matches none of the four lead patterns, or the sequence is
/// truncated.
pub fn decode_codepoint(bytes: &[u8]) -> Option<(u32, usize)> {
    let &b0 = bytes.first()?;
    if b0 & 0x80 == 0 {
        return Some((u32::from(b0), 1));
    }
    let cont = |i: usize| u32::from(bytes[i] & 0x3F);
    if b0 & 0xE0 == 0xC0 {
        if bytes.len() >= 2 {
            return Some(((u32::from(b0 & 0x1F) << 6) | cont(1), 2));
        }
    } else if b0 & 0xF0 == 0xE0 {
        if bytes.len() >= 3 {
            return Some(((u32::from(b0 & 0x0F) << 12) | (cont(1) << 6) | cont(2), 3));
        }
    } else if b0 & 0xF8 == 0xF0 && bytes.len() >= 4 {
        return Some((
            (u32::from(b0 & 0x07) << 18) | (cont(1) << 12) | (cont(2) << 6) | cont(3),
            4,
        ));
    }
    None
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Decode a whole buffer into codepoints.
///
/// Unit boundaries come from a coarse scan: a unit is one byte plus every
/// continuation byte that follows it. This is deliberately looser than
/// [`codepoint_length`]; a stray continuation byte still starts its own unit,
/// and surplus continuation bytes are absorbed into the preceding unit.
/// Units that fail [`decode_codepoint`] produce [`DECODE_FAILURE`].
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        i += 1;
        while i < bytes.len() && is_continuation(bytes[i]) {
            i += 1;
        }
        let cp = decode_codepoint(&bytes[start..i]).map_or(DECODE_FAILURE, |(cp, _)| cp);
        out.push(cp);
    }
    out
}
