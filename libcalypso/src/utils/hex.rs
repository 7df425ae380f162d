//! Hexadecimal helpers used for APDU logging and the dump text format.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x90, 0x00]` -> `"9000"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte, the layout used for `SEND`/`RECV` log lines.
///
/// Example: `&[0x94, 0xa4]` -> `"94 a4"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes. ASCII whitespace anywhere is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(Error::Dump("hex string has odd length".to_string()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| Error::Dump("hex string is not ascii".to_string()))?;
            u8::from_str_radix(text, 16)
                .map_err(|e| Error::Dump(format!("invalid hex pair '{}': {}", text, e)))
        })
        .collect()
}
