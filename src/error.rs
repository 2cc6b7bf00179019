//! # BitBuffer Error Handling
//!
//! This module defines the BitBufferError enum, which represents the different
//! error types that can occur when reading from or growing a `BitBuffer`.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::util::hex::HexError;

/// Represents the different error types that can occur in the bitbuf crate.
#[derive(Debug, Error)]
pub enum BitBufferError {
    /// A required argument was missing or out of range, e.g. a bit count above 32.
    #[error("Bad parameter: {0}")]
    BadParameter(String),

    /// Backing storage could not be reserved.
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// The requested bit range extends past the valid length of the buffer.
    #[error(
        "Out of bounds: offset {offset_bits} bits, requested {requested_bits} bits, \
         available {available_bits} bits"
    )]
    OutOfBounds {
        offset_bits: u64,
        requested_bits: u64,
        available_bits: u64,
    },

    /// Input to a hex constructor could not be decoded.
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] HexError),
}

impl BitBufferError {
    /// True for the underflow condition reported by every fetch path.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BitBufferError::OutOfBounds { .. })
    }
}

pub type Result<T> = std::result::Result<T, BitBufferError>;
