//! FlateDecode (zlib) stream decompression.

use crate::error::{PdfError, Result};
use flate2::{Decompress, FlushDecompress, Status};
use std::io::Read;

/// Decompress zlib data.
///
/// Falls back to byte-at-a-time inflation for corrupted streams, keeping
/// whatever was produced before the decoder failed. Only a stream that
/// yields nothing at all is an error.
pub fn flatedecode(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    match decoder.read_to_end(&mut decompressed) {
        Ok(_) => Ok(decompressed),
        Err(err) => {
            let partial = decompress_corrupted(data);
            if partial.is_empty() {
                Err(PdfError::DecodeError(format!("FlateDecode: {err}")))
            } else {
                tracing::debug!(
                    produced = partial.len(),
                    "FlateDecode failed, using partial output"
                );
                Ok(partial)
            }
        }
    }
}

fn decompress_corrupted(data: &[u8]) -> Vec<u8> {
    let mut decoder = Decompress::new(true);
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut buf = [0u8; 4096];
    let mut i = 0usize;
    while i < data.len() {
        let before_out = decoder.total_out();
        let before_in = decoder.total_in();
        let res = decoder.decompress(&data[i..i + 1], &mut buf, FlushDecompress::None);
        let produced = (decoder.total_out() - before_out) as usize;
        out.extend_from_slice(&buf[..produced]);
        let consumed = (decoder.total_in() - before_in) as usize;
        i += consumed.max(1);
        match res {
            Ok(Status::StreamEnd) | Err(_) => break,
            Ok(_) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    #[test]
    fn test_flatedecode_roundtrips_content() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"BT /F1 12 Tf (Hi) Tj ET").unwrap();
        let packed = enc.finish().unwrap();
        assert_eq!(flatedecode(&packed).unwrap(), b"BT /F1 12 Tf (Hi) Tj ET".to_vec());
    }

    #[test]
    fn test_flatedecode_garbage_is_error() {
        assert!(flatedecode(b"not zlib at all").is_err());
    }
}
