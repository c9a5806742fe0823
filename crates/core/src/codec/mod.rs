//! Stream filter decoders.
//!
//! This module contains:
//! - `ascii`: ASCII85 and ASCIIHex decoding
//! - `flate`: zlib/deflate decompression
//! - `lzw`: LZW decompression

pub mod ascii;
pub mod flate;
pub mod lzw;

use crate::error::{PdfError, Result};
use crate::model::objects::Dict;

pub use ascii::{ascii85decode, asciihexdecode};
pub use flate::flatedecode;
pub use lzw::lzwdecode;

/// Undo a single named stream filter.
///
/// Both the full filter names and the inline image abbreviations are
/// accepted. `parms` is the filter's entry from `/DecodeParms`. Unsupported
/// filters are a `DecodeError`.
pub fn decode(filter: &str, data: &[u8], parms: Option<&Dict>) -> Result<Vec<u8>> {
    match filter {
        "FlateDecode" | "Fl" => flatedecode(data),
        "LZWDecode" | "LZW" => {
            let early_change = parms
                .and_then(|p| p.get("EarlyChange"))
                .and_then(|v| v.as_int().ok())
                .is_none_or(|v| v != 0);
            lzwdecode(data, early_change)
        }
        "ASCIIHexDecode" | "AHx" => asciihexdecode(data),
        "ASCII85Decode" | "A85" => ascii85decode(data),
        other => Err(PdfError::DecodeError(format!("unsupported filter {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_filter_is_decode_error() {
        let err = decode("JBIG2Decode", b"", None).unwrap_err();
        assert!(matches!(err, PdfError::DecodeError(_)));
    }
}
