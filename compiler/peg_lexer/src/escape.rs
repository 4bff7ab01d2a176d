//! Escape sequence resolution for grammar literals.
//!
//! Operates on the interior of a string or character-class literal (quotes
//! already stripped) and produces the literal's byte value. The scan is
//! byte-oriented: everything that is not part of an escape is copied
//! verbatim, so multi-byte UTF-8 passes through untouched.
//!
//! # Escapes
//!
//! | Source                  | Result                                   |
//! |-------------------------|------------------------------------------|
//! | `\f \n \r \t \v`        | the control byte                         |
//! | `\' \" \[ \] \\`        | the escaped byte                         |
//! | `\x` / `\u` + hex*      | codepoint, UTF-8 encoded                 |
//! | `\` + anything else     | decimal digits read in radix 8, encoded  |
//!
//! The numeric forms consume as many digits as are present, including none
//! (which yields NUL). Octal escapes accept `8` and `9` as digits; grammars
//! in the wild rely on that. Values that are not scalar values (surrogates,
//! anything at or above `0x110000`) encode to nothing.

use memchr::memchr;
use peg_lexer_core::encode_codepoint_into;

use crate::error::EscapeError;

/// Byte produced by a single-character escape, if `c` names one.
#[inline]
fn resolve_simple_escape(c: u8) -> Option<u8> {
    match c {
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'\'' => Some(b'\''),
        b'"' => Some(b'"'),
        b'[' => Some(b'['),
        b']' => Some(b']'),
        b'\\' => Some(b'\\'),
        _ => None,
    }
}

#[inline]
fn hex_digit(b: u8) -> Option<u32> {
    char::from(b).to_digit(16)
}

#[inline]
fn octal_digit(b: u8) -> Option<u32> {
    char::from(b).to_digit(10)
}

/// Accumulate digits starting at `start` until `digit` rejects a byte.
///
/// Returns the value and the index just past the last digit. The value
/// saturates at `u32::MAX`, which the codec rejects.
fn parse_number(
    text: &[u8],
    start: usize,
    radix: u32,
    digit: impl Fn(u8) -> Option<u32>,
) -> (u32, usize) {
    let mut value = 0u32;
    let mut i = start;
    while let Some(d) = text.get(i).copied().and_then(&digit) {
        value = value.saturating_mul(radix).saturating_add(d);
        i += 1;
    }
    (value, i)
}

#[inline]
fn push_codepoint(out: &mut Vec<u8>, cp: u32) {
    let mut buf = [0u8; 4];
    let len = encode_codepoint_into(cp, &mut buf);
    out.extend_from_slice(&buf[..len]);
}

/// Resolve every escape sequence in `text`.
///
/// Fails only when `text` ends with a lone backslash.
pub fn resolve_escape_sequence(text: &[u8]) -> Result<Vec<u8>, EscapeError> {
    let mut out = Vec::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let Some(run) = memchr(b'\\', &text[i..]) else {
            out.extend_from_slice(&text[i..]);
            break;
        };
        let backslash = i + run;
        out.extend_from_slice(&text[i..backslash]);
        i = backslash + 1;

        let Some(&esc) = text.get(i) else {
            tracing::debug!(offset = backslash, "trailing backslash in literal");
            return Err(EscapeError::trailing_backslash(backslash));
        };

        if let Some(byte) = resolve_simple_escape(esc) {
            out.push(byte);
            i += 1;
        } else if esc == b'x' || esc == b'u' {
            let (cp, end) = parse_number(text, i + 1, 16, hex_digit);
            push_codepoint(&mut out, cp);
            i = end;
        } else {
            // Digits start at the escape character itself; a non-digit is
            // left in place and copied on the next pass.
            let (cp, end) = parse_number(text, i, 8, octal_digit);
            push_codepoint(&mut out, cp);
            i = end;
        }
    }

    tracing::trace!(
        input_len = text.len(),
        output_len = out.len(),
        "resolved literal escapes"
    );
    Ok(out)
}

/// [`resolve_escape_sequence`] over the bytes of `text`.
#[inline]
pub fn resolve_escape_str(text: &str) -> Result<Vec<u8>, EscapeError> {
    resolve_escape_sequence(text.as_bytes())
}

/// Render control characters as backslash escapes for display.
///
/// Byte-level inverse of [`resolve_escape_sequence`] for `\f \n \r \t \v`;
/// every other byte is copied unchanged, so resolver output can be fed back
/// in whether or not it is valid UTF-8.
pub fn escape_characters(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &b in text {
        match b {
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x0B => out.extend_from_slice(b"\\v"),
            _ => out.push(b),
        }
    }
    out
}
