//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers used by the buffer for construction from test vectors and for
//! compact previews in debug logs.
//!
//! ## Usage
//!
//! ```rust
//! use bitbuf_rs::util::hex::{decode_hex, encode_hex, format_hex_compact};
//!
//! let data = [0x12, 0x34, 0xab];
//! assert_eq!(encode_hex(&data), "1234ab");
//! assert_eq!(decode_hex("12 34 AB").unwrap(), data);
//! assert_eq!(format_hex_compact(&data), "12 34 ab");
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to a lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is stripped before decoding.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Format bytes as "12 34 ab" with spaces between bytes (for logs)
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
