//! ToUnicode CMap support.
//!
//! Only the parts of a CMap that matter for text extraction are read:
//! codespace ranges (to split a string into codes) and the `bfchar` and
//! `bfrange` mappings. Everything else in the program is skipped.

use crate::parser::lexer::{ContentLexer, LexToken};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CodespaceRange {
    low: Vec<u8>,
    high: Vec<u8>,
}

impl CodespaceRange {
    fn matches(&self, code: &[u8]) -> bool {
        code.len() == self.low.len()
            && code
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(b, (lo, hi))| lo <= b && b <= hi)
    }
}

#[derive(Debug, Clone)]
struct BfRange {
    start: u32,
    end: u32,
    /// Raw UTF-16BE destination for `start`
    dest: Vec<u8>,
}

/// Code to Unicode mapping read from a `ToUnicode` stream.
#[derive(Debug, Clone, Default)]
pub struct UnicodeMap {
    codespaces: Vec<CodespaceRange>,
    chars: HashMap<u32, String>,
    ranges: Vec<BfRange>,
    /// Code width seen in mappings, used when no codespace is declared
    mapping_width: Option<usize>,
}

impl UnicodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a decoded CMap program. Malformed sections are skipped.
    pub fn parse(data: &[u8]) -> Self {
        let mut map = Self::new();
        let mut lexer = ContentLexer::new(data);
        let mut operands: Vec<LexToken> = Vec::new();
        let mut section: Option<Vec<u8>> = None;

        while let Some(result) = lexer.next_token() {
            let token = match result {
                Ok((_, token)) => token,
                Err(err) => {
                    tracing::debug!(%err, "bad token in ToUnicode CMap");
                    continue;
                }
            };
            match token {
                LexToken::Keyword(kw) => match kw.as_slice() {
                    b"begincodespacerange" | b"beginbfchar" | b"beginbfrange" => {
                        section = Some(kw);
                        operands.clear();
                    }
                    b"endcodespacerange" | b"endbfchar" | b"endbfrange" => {
                        if let Some(begin) = section.take() {
                            map.apply_section(&begin, &operands);
                        }
                        operands.clear();
                    }
                    _ if section.is_none() => operands.clear(),
                    _ => {}
                },
                other => {
                    if section.is_some() {
                        operands.push(other);
                    }
                }
            }
        }
        map
    }

    fn apply_section(&mut self, begin: &[u8], tokens: &[LexToken]) {
        match begin {
            b"begincodespacerange" => {
                for pair in strings(tokens).chunks_exact(2) {
                    if pair[0].len() == pair[1].len() && !pair[0].is_empty() {
                        self.codespaces.push(CodespaceRange {
                            low: pair[0].clone(),
                            high: pair[1].clone(),
                        });
                    }
                }
            }
            b"beginbfchar" => {
                for pair in strings(tokens).chunks_exact(2) {
                    self.note_width(&pair[0]);
                    self.chars.insert(code_value(&pair[0]), decode_utf16be(&pair[1]));
                }
            }
            b"beginbfrange" => self.apply_bfrange(tokens),
            _ => {}
        }
    }

    fn apply_bfrange(&mut self, tokens: &[LexToken]) {
        let mut iter = tokens.iter();
        while let (Some(LexToken::String(lo)), Some(LexToken::String(hi))) = (iter.next(), iter.next()) {
            self.note_width(lo);
            let start = code_value(lo);
            let end = code_value(hi);
            match iter.next() {
                Some(LexToken::String(dest)) => self.ranges.push(BfRange {
                    start,
                    end,
                    dest: dest.clone(),
                }),
                Some(LexToken::ArrayStart) => {
                    let mut code = start;
                    for token in iter.by_ref() {
                        match token {
                            LexToken::String(dest) => {
                                self.chars.insert(code, decode_utf16be(dest));
                                code = code.saturating_add(1);
                            }
                            LexToken::ArrayEnd => break,
                            _ => {}
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn note_width(&mut self, code: &[u8]) {
        if self.mapping_width.is_none() && !code.is_empty() {
            self.mapping_width = Some(code.len());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.ranges.is_empty()
    }

    /// Width in bytes of codes that have no matching codespace.
    pub fn default_width(&self) -> usize {
        self.codespaces
            .iter()
            .map(|r| r.low.len())
            .min()
            .or(self.mapping_width)
            .unwrap_or(1)
    }

    /// Split `bytes` into character codes.
    pub fn split_codes<'a>(&self, bytes: &'a [u8]) -> Vec<&'a [u8]> {
        let mut codes = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let rest = &bytes[pos..];
            let width = self
                .codespaces
                .iter()
                .find(|r| rest.len() >= r.low.len() && r.matches(&rest[..r.low.len()]))
                .map_or_else(|| self.default_width(), |r| r.low.len())
                .min(rest.len());
            codes.push(&rest[..width]);
            pos += width;
        }
        codes
    }

    /// Text for one code, if mapped.
    pub fn lookup(&self, code: &[u8]) -> Option<String> {
        let value = code_value(code);
        if let Some(text) = self.chars.get(&value) {
            return Some(text.clone());
        }
        let range = self
            .ranges
            .iter()
            .find(|r| r.start <= value && value <= r.end)?;
        Some(decode_utf16be(&increment_dest(&range.dest, value - range.start)))
    }
}

fn strings(tokens: &[LexToken]) -> Vec<Vec<u8>> {
    tokens
        .iter()
        .filter_map(|t| match t {
            LexToken::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

fn code_value(code: &[u8]) -> u32 {
    code.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32)
}

/// Add `offset` to the last (up to four) bytes of `dest`, keeping its length.
fn increment_dest(dest: &[u8], offset: u32) -> Vec<u8> {
    let split = dest.len().saturating_sub(4);
    let (prefix, var) = dest.split_at(split);
    let base = code_value(var);
    let packed = base.wrapping_add(offset).to_be_bytes();
    let mut out = prefix.to_vec();
    out.extend_from_slice(&packed[4 - var.len()..]);
    out
}

/// Decode UTF-16BE, replacing unpaired surrogates.
pub fn decode_utf16be(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|c| match c {
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            [b] => *b as u16,
            _ => 0,
        })
        .collect();
    String::from_utf16_lossy(&units)
}
