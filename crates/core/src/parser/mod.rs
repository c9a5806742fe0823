//! Content stream parsing.
//!
//! - `lexer`: primitive tokenizer over a byte buffer
//! - `content`: operand/operator parser built on the lexer

pub mod content;
pub mod lexer;

pub use content::{ContentParser, ContentToken};
pub use lexer::{ContentLexer, LexToken};
