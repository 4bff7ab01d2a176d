//! Errors raised while resolving grammar literals.
//!
//! Malformed UTF-8 is not an error at this layer: the codec reports it with
//! `0`/`None` returns and callers recover locally. An unterminated escape,
//! on the other hand, is a mistake in the grammar itself and is surfaced to
//! the grammar author as a literal-compilation failure.

/// Failure to resolve the escape sequences of a literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EscapeError {
    /// A `\` is the last byte of the literal, with nothing to escape.
    #[error("invalid escape sequence: trailing backslash at byte {offset}")]
    MalformedEscape {
        /// Byte offset of the backslash within the literal text.
        offset: usize,
    },
}

impl EscapeError {
    /// Trailing backslash at `offset`.
    pub fn trailing_backslash(offset: usize) -> Self {
        Self::MalformedEscape { offset }
    }

    /// Byte offset within the literal where resolution failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedEscape { offset } => *offset,
        }
    }
}

#[cfg(test)]
mod tests;
