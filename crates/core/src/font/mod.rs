//! Font decoding for text extraction.
//!
//! - `cmap`: ToUnicode CMaps
//! - `encoding`: simple font encodings and glyph names
//! - `latin_enc`: the Latin encoding table

pub mod cmap;
pub mod encoding;
pub mod latin_enc;

pub use cmap::UnicodeMap;
pub use encoding::{BaseEncoding, DiffEntry, EncodingDB, name2unicode, parse_differences};

use crate::document::store::ObjectStore;
use crate::model::objects::{Dict, PDFObject};
use std::collections::HashMap;

/// Turns the string operands of text operators into Unicode.
#[derive(Debug, Clone, Default)]
pub struct FontDecoder {
    to_unicode: Option<UnicodeMap>,
    /// Single-byte table of a simple font
    encoding: Option<HashMap<u8, String>>,
    /// Composite fonts use two-byte codes unless a CMap says otherwise
    composite: bool,
}

impl FontDecoder {
    /// Build a decoder from a font dictionary.
    ///
    /// Unusable `ToUnicode` or `Encoding` entries are ignored, so this
    /// never fails; the worst case is a decoder that maps nothing.
    pub fn from_font_dict(store: &dyn ObjectStore, font: &Dict) -> Self {
        let composite = font.get("Subtype").and_then(|s| s.as_name().ok()) == Some("Type0");
        let to_unicode = font.get("ToUnicode").and_then(|obj| load_to_unicode(store, obj));
        let encoding = (!composite).then(|| simple_encoding(store, font.get("Encoding")));
        Self {
            to_unicode,
            encoding,
            composite,
        }
    }

    /// Decoder for a font that could not be found at all.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Decode `bytes` and append the text to `out`.
    ///
    /// Codes nothing maps are written as `replacement`.
    pub fn decode_into(&self, bytes: &[u8], replacement: char, out: &mut String) {
        match &self.to_unicode {
            Some(cmap) => {
                for code in cmap.split_codes(bytes) {
                    match cmap.lookup(code) {
                        Some(text) => out.push_str(&text),
                        None => self.decode_simple(code, replacement, out),
                    }
                }
            }
            None if self.composite => {
                out.extend(std::iter::repeat_n(replacement, bytes.len().div_ceil(2)));
            }
            None => {
                for &b in bytes {
                    self.decode_simple(&[b], replacement, out);
                }
            }
        }
    }

    fn decode_simple(&self, code: &[u8], replacement: char, out: &mut String) {
        let text = match (&self.encoding, code) {
            (Some(table), [b]) => table.get(b),
            _ => None,
        };
        match text {
            Some(text) => out.push_str(text),
            None => out.push(replacement),
        }
    }

    pub fn decode(&self, bytes: &[u8], replacement: char) -> String {
        let mut out = String::with_capacity(bytes.len());
        self.decode_into(bytes, replacement, &mut out);
        out
    }
}

fn load_to_unicode(store: &dyn ObjectStore, obj: &PDFObject) -> Option<UnicodeMap> {
    let stream = store.resolve(obj).ok()?.as_stream().ok()?;
    match stream.unfiltered_data() {
        Ok(data) => {
            let map = UnicodeMap::parse(&data);
            (!map.is_empty()).then_some(map)
        }
        Err(err) => {
            tracing::debug!(%err, "ignoring undecodable ToUnicode stream");
            None
        }
    }
}

fn simple_encoding(store: &dyn ObjectStore, obj: Option<&PDFObject>) -> HashMap<u8, String> {
    let resolved = obj.and_then(|o| store.resolve(o).ok());
    let (base, differences) = match resolved {
        Some(PDFObject::Name(name)) => (BaseEncoding::from_name(name), Vec::new()),
        Some(PDFObject::Dict(dict)) => {
            let base = dict
                .get("BaseEncoding")
                .and_then(|b| b.as_name().ok())
                .and_then(BaseEncoding::from_name);
            let differences = dict
                .get("Differences")
                .and_then(|d| store.resolve(d).ok())
                .and_then(|d| d.as_array().ok())
                .map(|items| parse_differences(items))
                .unwrap_or_default();
            (base, differences)
        }
        _ => (None, Vec::new()),
    };
    EncodingDB::get_encoding(base.unwrap_or(BaseEncoding::Standard), &differences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::store::MemoryStore;
    use crate::model::objects::PDFStream;

    fn font(entries: &[(&str, PDFObject)]) -> Dict {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_simple_font_with_named_encoding() {
        let store = MemoryStore::new();
        let decoder = FontDecoder::from_font_dict(
            &store,
            &font(&[
                ("Subtype", PDFObject::name("Type1")),
                ("Encoding", PDFObject::name("WinAnsiEncoding")),
            ]),
        );
        assert_eq!(decoder.decode(b"caf\xe9", '?'), "caf\u{e9}");
    }

    #[test]
    fn test_unmapped_codes_use_replacement() {
        let store = MemoryStore::new();
        let decoder = FontDecoder::from_font_dict(&store, &font(&[]));
        assert_eq!(decoder.decode(b"A\x01", '?'), "A?");
    }

    #[test]
    fn test_composite_font_prefers_to_unicode() {
        let mut store = MemoryStore::new();
        let cmap = store.insert(
            9,
            PDFStream::new(
                Dict::new(),
                &b"1 begincodespacerange <0000> <FFFF> endcodespacerange \
                   1 beginbfchar <0001> <0048> endbfchar"[..],
            ),
        );
        let decoder = FontDecoder::from_font_dict(
            &store,
            &font(&[("Subtype", PDFObject::name("Type0")), ("ToUnicode", cmap)]),
        );
        assert_eq!(decoder.decode(&[0, 1, 0, 2], '?'), "H?");

        let bare = FontDecoder::from_font_dict(&store, &font(&[("Subtype", PDFObject::name("Type0"))]));
        assert_eq!(bare.decode(&[0, 1, 0, 2], '?'), "??");
    }
}
