//! ASCII85 and ASCIIHex stream decoders.

use crate::error::Result;

/// Decode ASCII85-encoded data (PDF variant).
/// Handles: z-encoding, <~ ~> markers, whitespace, missing EOD.
pub fn ascii85decode(data: &[u8]) -> Result<Vec<u8>> {
    let data = data.strip_prefix(b"<~").unwrap_or(data);
    let data = match data.iter().position(|&b| b == b'~') {
        Some(pos) => &data[..pos],
        None => data,
    };

    let mut digits = Vec::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'z' => digits.extend_from_slice(b"!!!!!"),
            b'!'..=b'u' => digits.push(byte),
            _ => {}
        }
    }

    let mut result = Vec::with_capacity(digits.len() / 5 * 4 + 4);
    for chunk in digits.chunks(5) {
        let mut padded = [b'u'; 5];
        padded[..chunk.len()].copy_from_slice(chunk);
        let value = padded
            .iter()
            .fold(0u32, |acc, &b| acc.wrapping_mul(85).wrapping_add((b - b'!') as u32));
        let bytes = value.to_be_bytes();
        if chunk.len() == 5 {
            result.extend_from_slice(&bytes);
        } else if chunk.len() > 1 {
            result.extend_from_slice(&bytes[..chunk.len() - 1]);
        }
    }
    Ok(result)
}

/// Decode ASCIIHex-encoded data.
///
/// Whitespace is skipped, decoding stops at `>`, and an odd trailing
/// digit is padded with zero.
pub fn asciihexdecode(data: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(data.len() / 2);
    let mut pending: Option<u8> = None;
    for &byte in data {
        if byte == b'>' {
            break;
        }
        let Some(nibble) = hex_nibble(byte) else {
            continue;
        };
        match pending.take() {
            Some(high) => result.push((high << 4) | nibble),
            None => pending = Some(nibble),
        }
    }
    if let Some(high) = pending {
        result.push(high << 4);
    }
    Ok(result)
}

const fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asciihexdecode_whitespace_and_odd_digit() {
        assert_eq!(asciihexdecode(b"61 62\n6>").unwrap(), b"ab`".to_vec());
    }

    #[test]
    fn test_ascii85decode_wikipedia_sample() {
        assert_eq!(ascii85decode(b"<~9jqo^~>").unwrap(), b"Man ".to_vec());
    }

    #[test]
    fn test_ascii85decode_z_group() {
        assert_eq!(ascii85decode(b"z~>").unwrap(), vec![0, 0, 0, 0]);
    }
}
