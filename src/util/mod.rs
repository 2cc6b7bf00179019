//! # Utility Modules
//!
//! Hex encoding helpers and logging patterns shared by the buffer and its
//! diagnostic sinks.

pub mod hex;
pub mod logging;

// Re-export commonly used types and functions
pub use hex::{decode_hex, encode_hex, format_hex_compact, HexError};
pub use logging::{log_bytes_hex, LogThrottle};
