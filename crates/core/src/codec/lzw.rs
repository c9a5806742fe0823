//! LZWDecode stream decompression.

use crate::error::Result;
use weezl::{BitOrder, decode::Decoder};

/// Decode LZW data, MSB first with 8-bit literals.
///
/// `early_change` follows `/EarlyChange` in the decode parameters: any
/// non-zero value (the default) widens codes one code early, which is the
/// TIFF size switch. Corrupt input yields whatever was decoded before the
/// error.
pub fn lzwdecode(data: &[u8], early_change: bool) -> Result<Vec<u8>> {
    let mut decoder = if early_change {
        Decoder::with_tiff_size_switch(BitOrder::Msb, 8)
    } else {
        Decoder::new(BitOrder::Msb, 8)
    };
    let mut output = Vec::new();
    let status = decoder.into_vec(&mut output).decode(data).status;
    if let Err(err) = status {
        tracing::debug!(%err, produced = output.len(), "LZWDecode stopped early");
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weezl::encode::Encoder;

    #[test]
    fn test_lzwdecode_early_change() {
        let text = b"BT /F1 12 Tf (LZW LZW LZW LZW LZW) Tj ET".repeat(20);
        let encoded = Encoder::with_tiff_size_switch(BitOrder::Msb, 8)
            .encode(&text)
            .unwrap();
        assert_eq!(lzwdecode(&encoded, true).unwrap(), text);
    }

    #[test]
    fn test_lzwdecode_without_early_change() {
        let text = b"q 1 0 0 1 0 0 cm Q ".repeat(40);
        let encoded = Encoder::new(BitOrder::Msb, 8).encode(&text).unwrap();
        assert_eq!(lzwdecode(&encoded, false).unwrap(), text);
    }

    #[test]
    fn test_lzwdecode_garbage_is_lenient() {
        assert!(lzwdecode(b"\xff\xff\xff", true).is_ok());
    }
}
