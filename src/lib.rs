//! # bitbuf-rs - Bit-Addressable Buffers for Binary Protocol Decoding
//!
//! The bitbuf-rs crate provides [`BitBuffer`], a growable byte store that
//! protocol decoders read from by bit offset: fixed-width integers, arbitrary
//! bit-length fields up to 32 bits, and byte ranges, with every access checked
//! against the current length before it happens.
//!
//! ## Features
//!
//! - Owned or borrowed storage, chosen by constructor
//! - Host-order and explicit little/big-endian fixed-width reads
//! - LSB-first bit-field extraction across byte boundaries
//! - Bounds proofs for pre-validated access without a second length test
//! - Append with growth, and a textual dump for debugging
//! - Underflow reporting through a pluggable diagnostic sink (`log` by default)
//!
//! ## Usage
//!
//! ```rust
//! use bitbuf_rs::{init_logger, BitBuffer, BufferConfig};
//!
//! init_logger();
//!
//! let mut frame = [0x68, 0x31, 0x31, 0x68];
//! let mut buffer = BitBuffer::borrowed(&mut frame).with_config(BufferConfig::from_env());
//!
//! assert_eq!(buffer.get_u8(0).unwrap(), 0x68);
//! assert_eq!(buffer.fetch_bits(8, 4).unwrap(), 0x1);
//! assert!(buffer.get_u64(0).is_err());
//! ```

pub mod buffer;
pub mod constants;
pub mod error;
pub mod logging;
pub mod util;

pub use crate::buffer::{
    BitBuffer, BoundsProof, BufferConfig, DiagnosticSink, LogSink, StorageMode, ThrottledSink,
};
pub use crate::error::{BitBufferError, Result};
pub use crate::logging::init_logger;
