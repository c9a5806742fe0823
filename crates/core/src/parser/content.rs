//! Content stream parser.
//!
//! Turns the primitive tokens of [`ContentLexer`] into complete operand
//! objects (arrays and dictionaries included) and operator markers.

use super::lexer::{ContentLexer, LexToken};
use crate::error::{PdfError, Result};
use crate::interp::operators::Operator;
use crate::model::objects::{Dict, PDFObject};

/// A complete token of a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentToken {
    Operand(PDFObject),
    Operator(Operator),
}

/// Open container while collecting an array or dictionary.
enum Container {
    Array(Vec<PDFObject>),
    Dict(Vec<PDFObject>),
}

impl Container {
    fn push(&mut self, obj: PDFObject) {
        match self {
            Self::Array(items) | Self::Dict(items) => items.push(obj),
        }
    }
}

/// Pull parser over one content stream.
pub struct ContentParser<'a> {
    lexer: ContentLexer<'a>,
    stack: Vec<Container>,
    inline_data_pending: bool,
}

impl<'a> ContentParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            lexer: ContentLexer::new(data),
            stack: Vec::new(),
            inline_data_pending: false,
        }
    }

    /// Byte offset of the underlying lexer.
    pub const fn tell(&self) -> usize {
        self.lexer.tell()
    }

    /// Get the next operand or operator, `None` at end of input.
    ///
    /// Bare keywords outside the operator vocabulary come back as
    /// [`PDFObject::Keyword`] operands. Inside an array or dictionary every
    /// keyword is an operand. Input ending inside a string, array,
    /// dictionary or inline image is `UnexpectedEof`.
    pub fn next_token(&mut self) -> Result<Option<ContentToken>> {
        if self.inline_data_pending {
            self.inline_data_pending = false;
            let data = self.lexer.read_inline_data()?;
            return Ok(Some(ContentToken::Operand(PDFObject::String(data))));
        }

        loop {
            let (pos, token) = match self.lexer.next_token() {
                None if self.stack.is_empty() => return Ok(None),
                None => {
                    self.stack.clear();
                    return Err(PdfError::UnexpectedEof);
                }
                Some(Err(PdfError::TokenError { pos, msg })) => {
                    tracing::debug!(pos, %msg, "skipping bad content token");
                    continue;
                }
                Some(Err(err)) => return Err(err),
                Some(Ok(t)) => t,
            };

            let value = match token {
                LexToken::ArrayStart => {
                    self.stack.push(Container::Array(Vec::new()));
                    continue;
                }
                LexToken::DictStart => {
                    self.stack.push(Container::Dict(Vec::new()));
                    continue;
                }
                LexToken::ArrayEnd => match self.stack.pop() {
                    Some(Container::Array(items)) => PDFObject::Array(items),
                    other => {
                        self.stack.extend(other);
                        tracing::debug!(pos, "stray ']' in content stream");
                        continue;
                    }
                },
                LexToken::DictEnd => match self.stack.pop() {
                    Some(Container::Dict(items)) => PDFObject::Dict(build_dict(items, pos)),
                    other => {
                        self.stack.extend(other);
                        tracing::debug!(pos, "stray '>>' in content stream");
                        continue;
                    }
                },
                LexToken::Keyword(bytes) => {
                    if self.stack.is_empty()
                        && let Some(op) = Operator::from_bytes(&bytes)
                    {
                        if op == Operator::BeginInlineImageData {
                            self.inline_data_pending = true;
                        }
                        return Ok(Some(ContentToken::Operator(op)));
                    }
                    PDFObject::Keyword(String::from_utf8_lossy(&bytes).into_owned())
                }
                LexToken::Int(n) => PDFObject::Int(n),
                LexToken::Real(n) => PDFObject::Real(n),
                LexToken::Bool(b) => PDFObject::Bool(b),
                LexToken::Null => PDFObject::Null,
                LexToken::Name(name) => PDFObject::Name(name),
                LexToken::String(s) => PDFObject::String(s),
            };

            match self.stack.last_mut() {
                Some(container) => container.push(value),
                None => return Ok(Some(ContentToken::Operand(value))),
            }
        }
    }
}

impl Iterator for ContentParser<'_> {
    type Item = Result<ContentToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Pair up dictionary items; non-name keys and a dangling key are dropped.
fn build_dict(items: Vec<PDFObject>, pos: usize) -> Dict {
    let mut dict = Dict::new();
    let mut iter = items.into_iter();
    while let Some(key) = iter.next() {
        let Some(value) = iter.next() else {
            tracing::debug!(pos, "dictionary key without value");
            break;
        };
        match key {
            PDFObject::Name(name) => {
                dict.insert(name, value);
            }
            other => tracing::debug!(pos, key = other.type_name(), "non-name dictionary key"),
        }
    }
    dict
}
