//! Simple font encodings and glyph name resolution.
//!
//! Glyph names resolve through the Latin table and the symbol names below
//! first, then through the `uniXXXX` and `uXXXX[XX]` naming conventions.
//! Names outside these (most of the Cyrillic `afii` range, dingbats) do not
//! resolve.

use super::latin_enc::ENCODING;
use crate::model::objects::PDFObject;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Adobe glyph names for symbols, arrows, ligatures and Greek letters.
const SYMBOL_GLYPHS: &[(&str, char)] = &[
    ("arrowleft", '\u{2190}'),
    ("arrowup", '\u{2191}'),
    ("arrowright", '\u{2192}'),
    ("arrowdown", '\u{2193}'),
    ("arrowboth", '\u{2194}'),
    ("arrowupdn", '\u{2195}'),
    ("arrowdblleft", '\u{21d0}'),
    ("arrowdblup", '\u{21d1}'),
    ("arrowdblright", '\u{21d2}'),
    ("arrowdbldown", '\u{21d3}'),
    ("arrowdblboth", '\u{21d4}'),
    ("universal", '\u{2200}'),
    ("partialdiff", '\u{2202}'),
    ("existential", '\u{2203}'),
    ("emptyset", '\u{2205}'),
    ("Delta", '\u{2206}'),
    ("gradient", '\u{2207}'),
    ("element", '\u{2208}'),
    ("notelement", '\u{2209}'),
    ("product", '\u{220f}'),
    ("summation", '\u{2211}'),
    ("radical", '\u{221a}'),
    ("proportional", '\u{221d}'),
    ("infinity", '\u{221e}'),
    ("angle", '\u{2220}'),
    ("logicaland", '\u{2227}'),
    ("logicalor", '\u{2228}'),
    ("intersection", '\u{2229}'),
    ("union", '\u{222a}'),
    ("integral", '\u{222b}'),
    ("therefore", '\u{2234}'),
    ("similar", '\u{223c}'),
    ("approxequal", '\u{2248}'),
    ("notequal", '\u{2260}'),
    ("equivalence", '\u{2261}'),
    ("lessequal", '\u{2264}'),
    ("greaterequal", '\u{2265}'),
    ("perpendicular", '\u{22a5}'),
    ("dotmath", '\u{22c5}'),
    ("minute", '\u{2032}'),
    ("second", '\u{2033}'),
    ("Omega", '\u{2126}'),
    ("lozenge", '\u{25ca}'),
    ("spade", '\u{2660}'),
    ("club", '\u{2663}'),
    ("heart", '\u{2665}'),
    ("diamond", '\u{2666}'),
    ("ff", '\u{fb00}'),
    ("ffi", '\u{fb03}'),
    ("ffl", '\u{fb04}'),
    ("Alpha", '\u{391}'),
    ("Beta", '\u{392}'),
    ("Gamma", '\u{393}'),
    ("Deltagreek", '\u{394}'),
    ("Epsilon", '\u{395}'),
    ("Zeta", '\u{396}'),
    ("Eta", '\u{397}'),
    ("Theta", '\u{398}'),
    ("Iota", '\u{399}'),
    ("Kappa", '\u{39a}'),
    ("Lambda", '\u{39b}'),
    ("Mu", '\u{39c}'),
    ("Nu", '\u{39d}'),
    ("Xi", '\u{39e}'),
    ("Omicron", '\u{39f}'),
    ("Pi", '\u{3a0}'),
    ("Rho", '\u{3a1}'),
    ("Sigma", '\u{3a3}'),
    ("Tau", '\u{3a4}'),
    ("Upsilon", '\u{3a5}'),
    ("Phi", '\u{3a6}'),
    ("Chi", '\u{3a7}'),
    ("Psi", '\u{3a8}'),
    ("Omegagreek", '\u{3a9}'),
    ("alpha", '\u{3b1}'),
    ("beta", '\u{3b2}'),
    ("gamma", '\u{3b3}'),
    ("delta", '\u{3b4}'),
    ("epsilon", '\u{3b5}'),
    ("zeta", '\u{3b6}'),
    ("eta", '\u{3b7}'),
    ("theta", '\u{3b8}'),
    ("iota", '\u{3b9}'),
    ("kappa", '\u{3ba}'),
    ("lambda", '\u{3bb}'),
    ("mugreek", '\u{3bc}'),
    ("nu", '\u{3bd}'),
    ("xi", '\u{3be}'),
    ("omicron", '\u{3bf}'),
    ("pi", '\u{3c0}'),
    ("rho", '\u{3c1}'),
    ("sigma1", '\u{3c2}'),
    ("sigma", '\u{3c3}'),
    ("tau", '\u{3c4}'),
    ("upsilon", '\u{3c5}'),
    ("phi", '\u{3c6}'),
    ("chi", '\u{3c7}'),
    ("psi", '\u{3c8}'),
    ("omega", '\u{3c9}'),
];

/// Glyph name to character; the first Latin row for a name wins.
static GLYPH_TO_CHAR: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(ENCODING.len() + SYMBOL_GLYPHS.len());
    for &(name, ch, _) in ENCODING {
        map.entry(name).or_insert(ch);
    }
    for &(name, ch) in SYMBOL_GLYPHS {
        map.entry(name).or_insert(ch);
    }
    map
});

/// The four predefined single-byte encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseEncoding {
    Standard,
    MacRoman,
    WinAnsi,
    PdfDoc,
}

impl BaseEncoding {
    /// Look up an encoding by its PDF name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "StandardEncoding" => Some(Self::Standard),
            "MacRomanEncoding" => Some(Self::MacRoman),
            "WinAnsiEncoding" => Some(Self::WinAnsi),
            "PDFDocEncoding" => Some(Self::PdfDoc),
            _ => None,
        }
    }

    const fn column(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::MacRoman => 1,
            Self::WinAnsi => 2,
            Self::PdfDoc => 3,
        }
    }
}

/// One entry of a `Differences` array.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffEntry {
    Code(u8),
    Name(String),
}

/// Convert a `Differences` array; entries of any other type are dropped.
pub fn parse_differences(items: &[PDFObject]) -> Vec<DiffEntry> {
    items
        .iter()
        .filter_map(|item| match item {
            PDFObject::Int(n) => u8::try_from(*n).ok().map(DiffEntry::Code),
            PDFObject::Name(name) => Some(DiffEntry::Name(name.clone())),
            _ => None,
        })
        .collect()
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn decode_component(name: &str) -> Option<String> {
    if let Some(&ch) = GLYPH_TO_CHAR.get(name) {
        return Some(ch.to_string());
    }

    if let Some(hex) = name.strip_prefix("uni")
        && hex.len() >= 4
        && hex.len().is_multiple_of(4)
        && is_hex(hex)
    {
        let units = hex
            .as_bytes()
            .chunks(4)
            .map(|chunk| {
                std::str::from_utf8(chunk)
                    .ok()
                    .and_then(|s| u16::from_str_radix(s, 16).ok())
            })
            .collect::<Option<Vec<u16>>>()?;
        return String::from_utf16(&units).ok();
    }

    if let Some(hex) = name.strip_prefix('u')
        && (4..=6).contains(&hex.len())
        && is_hex(hex)
    {
        let cp = u32::from_str_radix(hex, 16).ok()?;
        return char::from_u32(cp).map(String::from);
    }

    None
}

/// Convert a glyph name to the text it stands for.
///
/// A suffix after `.` is ignored and `_` joins ligature components.
/// Returns `None` for `.notdef` and names that resolve to nothing.
pub fn name2unicode(name: &str) -> Option<String> {
    let name = name.split('.').next().unwrap_or_default();
    if name.is_empty() || name == "notdef" {
        return None;
    }
    name.split('_').map(decode_component).collect()
}

/// Encoding tables built from the Latin rows.
pub struct EncodingDB;

impl EncodingDB {
    /// Build the code to text table for `base`, patched by `differences`.
    ///
    /// A name in `differences` with no preceding code is ignored, as is a
    /// name that does not resolve.
    pub fn get_encoding(base: BaseEncoding, differences: &[DiffEntry]) -> HashMap<u8, String> {
        let column = base.column();
        let mut encoding = HashMap::with_capacity(256);
        for &(_, ch, codes) in ENCODING {
            let code = codes[column];
            if code != 0 {
                encoding.entry(code).or_insert_with(|| ch.to_string());
            }
        }

        let mut current: Option<u8> = None;
        for entry in differences {
            match entry {
                DiffEntry::Code(code) => current = Some(*code),
                DiffEntry::Name(glyph) => {
                    let Some(code) = current else {
                        continue;
                    };
                    match name2unicode(glyph) {
                        Some(text) => {
                            encoding.insert(code, text);
                        }
                        None => {
                            encoding.remove(&code);
                        }
                    }
                    current = code.checked_add(1);
                }
            }
        }
        encoding
    }
}
