//! Error types for pagewalk.

use thiserror::Error;

/// Primary error type for page resolution and content walking.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The requested page number does not resolve to a page dictionary.
    #[error("invalid page: {0}")]
    InvalidPage(String),

    /// The page tree has a cyclic or unterminated `Parent` chain.
    #[error("malformed page hierarchy: {0}")]
    MalformedHierarchy(String),

    /// The content stream ended in the middle of an instruction.
    #[error("malformed content stream: {0}")]
    MalformedContentStream(String),

    #[error("invalid token at position {pos}: {msg}")]
    TokenError { pos: usize, msg: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },

    #[error("PDF object not found: {0}")]
    ObjectNotFound(u32),

    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;
