// pn5180-rs/pn5180/src/utils/hex.rs

//! Hex rendering for UIDs and bus trace logs.

use std::fmt::Write;

/// Lowercase hex, two digits per byte, no separator.
///
/// Example: `&[0x03, 0x02, 0x01]` -> `"030201"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes, as used in trace output.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}
