//! Lexical layer for PEG grammar engines.
//!
//! Resolves escape sequences in grammar literals and re-exports the
//! standalone primitives from `peg_lexer_core`, so a grammar engine only needs
//! this one crate:
//!
//! - [`resolve_escape_sequence`]: literal source text to its byte value
//! - [`escape_characters`]: control characters back to printable escapes
//! - [`Trie`]: longest-match keyword and literal recognition
//! - the [`utf8`] codec

mod error;
mod escape;

use std::sync::Once;

pub use error::EscapeError;
pub use escape::{escape_characters, resolve_escape_sequence, resolve_escape_str};
pub use peg_lexer_core::{
    codepoint_count, codepoint_length, decode, decode_codepoint, encode_codepoint,
    encode_codepoint_into, utf8, EncodedCodepoint, PrefixInfo, Trie, DECODE_FAILURE,
};

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered stderr subscriber for standalone use.
///
/// Grammar engines that already own a global subscriber need not call this;
/// if one is present it is kept and the conflict is logged through it.
/// Does nothing when `RUST_LOG` is unset or unparsable. Repeated calls are
/// no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(%err, "keeping existing tracing subscriber");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(TRACING_INIT.is_completed());
    }

    #[test]
    fn init_tracing_keeps_existing_subscriber() {
        // A thread-local default stands in for a host's subscriber; the
        // global install attempt must neither panic nor replace it.
        let host = tracing_subscriber::registry();
        tracing::subscriber::with_default(host, || {
            init_tracing();
            tracing::debug!("still routed to the host subscriber");
        });
        assert!(TRACING_INIT.is_completed());
    }

    #[test]
    fn grammar_literal_pipeline() {
        // Keywords arrive as escaped grammar literals, then feed the trie.
        let literals = [r"if", r"in", r"int", r"\x3C=", r"\74"];
        let patterns: Vec<Vec<u8>> = literals
            .iter()
            .map(|lit| resolve_escape_str(lit))
            .collect::<Result<_, _>>()
            .unwrap_or_default();
        assert_eq!(patterns.len(), literals.len());

        let trie = Trie::new(&patterns);
        assert_eq!(trie.longest_match(b"integer"), 3);
        assert_eq!(trie.longest_match(b"<= b"), 2);
        assert_eq!(trie.longest_match(b"< b"), 1);
        assert_eq!(trie.longest_match(b"x"), 0);
    }
}
