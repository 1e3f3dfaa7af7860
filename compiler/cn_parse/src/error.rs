//! Structural defects reported by strict parsing.

use thiserror::Error;

/// A structural defect in declaration text.
///
/// Offsets are byte offsets into the text handed to the top-level call, even
/// for defects found inside nested child declarations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unclosed `{open}` opened at offset {offset}")]
    UnclosedDelimiter { open: char, offset: usize },

    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedCloser { found: char, offset: usize },

    #[error("`{found}` at offset {offset} does not close `{open}`")]
    MismatchedCloser {
        open: char,
        found: char,
        offset: usize,
    },

    #[error("unterminated {quote} quote opened at offset {offset}")]
    UnterminatedQuote { quote: char, offset: usize },

    #[error("unexpected text at offset {offset} after the declaration body")]
    TrailingInput { offset: usize },

    #[error("member at offset {offset} has an empty key")]
    EmptyMemberKey { offset: usize },

    #[error("declaration at offset {offset} has no name")]
    EmptyName { offset: usize },
}

impl ParseError {
    /// Byte offset the defect points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnclosedDelimiter { offset, .. }
            | ParseError::UnexpectedCloser { offset, .. }
            | ParseError::MismatchedCloser { offset, .. }
            | ParseError::UnterminatedQuote { offset, .. }
            | ParseError::TrailingInput { offset }
            | ParseError::EmptyMemberKey { offset }
            | ParseError::EmptyName { offset } => *offset,
        }
    }
}
