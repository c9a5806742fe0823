//! Content stream tokenizer.
//!
//! Splits a decoded content stream into primitive tokens: numbers, names,
//! strings, delimiters and bare keywords. Deciding which keywords are
//! operators is left to [`ContentParser`](super::content::ContentParser).

use crate::error::{PdfError, Result};

/// A primitive token.
#[derive(Debug, Clone, PartialEq)]
pub enum LexToken {
    Int(i64),
    Real(f64),
    Bool(bool),
    Null,
    /// Name without the leading slash, `#xx` escapes decoded
    Name(String),
    /// Literal or hex string
    String(Vec<u8>),
    ArrayStart,
    ArrayEnd,
    DictStart,
    DictEnd,
    /// Any other run of regular characters
    Keyword(Vec<u8>),
}

/// Tokenizer over a single byte buffer.
pub struct ContentLexer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ContentLexer<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset.
    pub const fn tell(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos + offset).copied()
    }

    fn advance_one(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Get the next token with its starting offset.
    ///
    /// Returns `None` at end of input. An unterminated string is
    /// `UnexpectedEof`; a malformed number is a `TokenError` after which
    /// the lexer has already moved past the offending bytes.
    pub fn next_token(&mut self) -> Option<Result<(usize, LexToken)>> {
        self.skip_whitespace();
        let token_pos = self.pos;
        let b = self.peek()?;

        let result = match b {
            b'/' => Ok(self.parse_name()),
            b'(' => self.parse_string(),
            b'<' => {
                if self.peek_at(1) == Some(b'<') {
                    self.pos += 2;
                    Ok(LexToken::DictStart)
                } else {
                    self.parse_hex_string()
                }
            }
            b'>' => {
                if self.peek_at(1) == Some(b'>') {
                    self.pos += 2;
                    Ok(LexToken::DictEnd)
                } else {
                    self.pos += 1;
                    Ok(LexToken::Keyword(b">".to_vec()))
                }
            }
            b'[' => {
                self.pos += 1;
                Ok(LexToken::ArrayStart)
            }
            b']' => {
                self.pos += 1;
                Ok(LexToken::ArrayEnd)
            }
            b'{' | b'}' | b')' => {
                self.pos += 1;
                Ok(LexToken::Keyword(vec![b]))
            }
            b'+' | b'-' | b'.' | b'0'..=b'9' => self.parse_number(token_pos),
            _ => Ok(self.parse_keyword()),
        };

        Some(result.map(|token| (token_pos, token)))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'%' {
                self.skip_comment();
            } else if is_whitespace(b) {
                self.pos += 1;
            } else {
                return;
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(b) = self.advance_one() {
            if b == b'\n' || b == b'\r' {
                break;
            }
        }
    }

    fn parse_name(&mut self) -> LexToken {
        self.pos += 1; // skip '/'
        let mut name = Vec::with_capacity(16);

        while let Some(b) = self.peek() {
            if is_keyword_end(b) {
                break;
            }
            if b == b'#'
                && let (Some(h1), Some(h2)) = (
                    self.peek_at(1).and_then(hex_value),
                    self.peek_at(2).and_then(hex_value),
                )
            {
                self.pos += 3;
                name.push((h1 << 4) | h2);
                continue;
            }
            name.push(b);
            self.pos += 1;
        }

        LexToken::Name(String::from_utf8_lossy(&name).into_owned())
    }

    fn parse_number(&mut self, start_pos: usize) -> Result<LexToken> {
        let mut end = self.pos;
        if matches!(self.data.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let mut has_digit = false;
        let mut has_dot = false;
        while let Some(&c) = self.data.get(end) {
            match c {
                b'0'..=b'9' => has_digit = true,
                b'.' if !has_dot => has_dot = true,
                _ => break,
            }
            end += 1;
        }

        if !has_digit {
            // A lone sign or dot: treat the run as a keyword, the way
            // unknown operators are.
            if end == self.pos + 1 && self.peek_at(1).is_none_or(is_keyword_end) {
                return Ok(self.parse_keyword());
            }
            self.pos = end.max(self.pos + 1);
            return Err(PdfError::TokenError {
                pos: start_pos,
                msg: "invalid number".into(),
            });
        }

        let text = std::str::from_utf8(&self.data[self.pos..end]).unwrap_or("0");
        self.pos = end;
        if !has_dot && let Ok(n) = text.parse::<i64>() {
            return Ok(LexToken::Int(n));
        }
        // Trailing dots ("5.") and leading plus signs parse fine as f64;
        // integers that overflow i64 land here too.
        text.parse::<f64>()
            .map(LexToken::Real)
            .map_err(|_| PdfError::TokenError {
                pos: start_pos,
                msg: format!("invalid number {text:?}"),
            })
    }

    fn parse_string(&mut self) -> Result<LexToken> {
        self.pos += 1; // skip '('
        let mut result = Vec::with_capacity(32);
        let mut depth = 1;

        while depth > 0 {
            match self.advance_one() {
                Some(b'(') => {
                    depth += 1;
                    result.push(b'(');
                }
                Some(b')') => {
                    depth -= 1;
                    if depth > 0 {
                        result.push(b')');
                    }
                }
                Some(b'\\') => match self.advance_one() {
                    Some(b'n') => result.push(b'\n'),
                    Some(b'r') => result.push(b'\r'),
                    Some(b't') => result.push(b'\t'),
                    Some(b'b') => result.push(0x08),
                    Some(b'f') => result.push(0x0c),
                    Some(b'\r') => {
                        if self.peek() == Some(b'\n') {
                            self.pos += 1;
                        }
                    }
                    Some(b'\n') => {}
                    Some(c @ b'0'..=b'7') => {
                        let mut octal = (c - b'0') as u32;
                        for _ in 0..2 {
                            match self.peek() {
                                Some(d @ b'0'..=b'7') => {
                                    self.pos += 1;
                                    octal = octal * 8 + (d - b'0') as u32;
                                }
                                _ => break,
                            }
                        }
                        result.push((octal & 0xFF) as u8);
                    }
                    Some(c) => result.push(c),
                    None => return Err(PdfError::UnexpectedEof),
                },
                Some(c) => result.push(c),
                None => return Err(PdfError::UnexpectedEof),
            }
        }

        Ok(LexToken::String(result))
    }

    fn parse_hex_string(&mut self) -> Result<LexToken> {
        self.pos += 1; // skip '<'
        let mut result = Vec::new();
        let mut pending: Option<u8> = None;

        loop {
            match self.advance_one() {
                Some(b'>') => break,
                Some(c) => {
                    let Some(nibble) = hex_value(c) else {
                        continue;
                    };
                    match pending.take() {
                        Some(high) => result.push((high << 4) | nibble),
                        None => pending = Some(nibble),
                    }
                }
                None => return Err(PdfError::UnexpectedEof),
            }
        }

        if let Some(high) = pending {
            result.push(high << 4);
        }

        Ok(LexToken::String(result))
    }

    fn parse_keyword(&mut self) -> LexToken {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if is_keyword_end(b) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            // A lone delimiter that nothing else claimed.
            self.pos += 1;
        }
        let bytes = &self.data[start..self.pos];
        match bytes {
            b"true" => LexToken::Bool(true),
            b"false" => LexToken::Bool(false),
            b"null" => LexToken::Null,
            _ => LexToken::Keyword(bytes.to_vec()),
        }
    }

    /// Read inline image data following an `ID` operator.
    ///
    /// Skips the single whitespace byte after `ID` and returns everything
    /// up to the whitespace preceding the closing `EI`, leaving the lexer
    /// positioned on `EI` itself. Running out of input first is
    /// `UnexpectedEof`.
    pub fn read_inline_data(&mut self) -> Result<Vec<u8>> {
        if self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        let start = self.pos;
        let mut idx = start;
        while idx + 1 < self.data.len() {
            let preceded = idx == start || is_whitespace(self.data[idx - 1]);
            let followed = self.data.get(idx + 2).is_none_or(|&b| is_keyword_end(b));
            if preceded && followed && &self.data[idx..idx + 2] == b"EI" {
                let mut end = idx;
                if end > start && is_whitespace(self.data[end - 1]) {
                    end -= 1;
                }
                self.pos = idx;
                return Ok(self.data[start..end].to_vec());
            }
            idx += 1;
        }
        self.pos = self.data.len();
        Err(PdfError::UnexpectedEof)
    }
}

/// Check if byte is PDF whitespace.
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'\x00' | b'\x0c')
}

const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

const fn is_keyword_end(b: u8) -> bool {
    is_whitespace(b) || is_delimiter(b)
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
