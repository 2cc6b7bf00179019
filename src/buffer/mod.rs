//! # BitBuffer - Bit-Addressable Byte Buffer
//!
//! A growable byte store for decoding binary protocol data. Every read takes
//! an offset in **bits** from the start of the storage:
//!
//! - fixed-width reads (`get_u8` .. `get_u64`) and byte-range reads
//!   (`fetch_nbytes`, `bytes_at`) use only the byte part of the offset
//!   (`offset_bits >> 3`); the low three bits are ignored
//! - `fetch_bits` and `fetch_bit` are true bit-granular reads, numbering bits
//!   from the least-significant bit of each byte
//!
//! All reads are bounds-checked against the current length before any byte
//! is touched, and underflow is reported to the configured
//! [`DiagnosticSink`](diagnostics::DiagnosticSink).
//!
//! ## Storage
//!
//! A buffer either owns its bytes (copied in, or grown by append) or borrows a
//! caller's array in place. Borrowed bytes are never released by the buffer;
//! appending to a borrowed buffer moves it onto owned storage.
//!
//! ## Usage
//!
//! ```rust
//! use bitbuf_rs::BitBuffer;
//!
//! let mut buffer = BitBuffer::copied(&[0x12, 0x34]).unwrap();
//! assert_eq!(buffer.get_u16(0).unwrap(), u16::from_ne_bytes([0x12, 0x34]));
//! assert_eq!(buffer.fetch_bits(4, 4).unwrap(), 0x1);
//!
//! buffer.append_data(&[0x56]).unwrap();
//! assert_eq!(buffer.as_bytes(), &[0x12, 0x34, 0x56]);
//! ```

mod bounds;
pub mod config;
pub mod diagnostics;
mod dump;
mod fetch;
mod storage;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use bounds::BoundsProof;
pub use config::BufferConfig;
pub use diagnostics::{DiagnosticSink, LogSink, ThrottledSink};

use crate::error::Result;
use crate::util::hex::{decode_hex, encode_hex};
use crate::util::logging::log_bytes_hex;
use storage::Storage;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

fn next_buffer_id() -> u64 {
    NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)
}

/// How `create_from_data` treats the caller's bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Copy the bytes into storage owned by the buffer
    Copy,
    /// Use the caller's array in place; the caller keeps ownership
    Borrow,
}

/// Bit-addressable read buffer over owned or borrowed bytes
pub struct BitBuffer<'a> {
    storage: Storage<'a>,
    /// Byte following the last access; `None` until the buffer holds data
    cursor: Option<usize>,
    /// Identity used to bind bounds proofs to this buffer
    id: u64,
    config: BufferConfig,
}

impl BitBuffer<'static> {
    /// Create an empty buffer with no storage and no cursor
    pub fn new() -> Self {
        Self::from_storage(Storage::empty())
    }

    /// Create a buffer owning a copy of `data`
    ///
    /// Later changes to `data` are not visible through the buffer.
    pub fn copied(data: &[u8]) -> Result<Self> {
        Ok(Self::from_storage(Storage::copy_of(data)?))
    }

    /// Create a buffer owning the bytes decoded from a hex string
    ///
    /// Whitespace between digits is ignored.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = decode_hex(hex)?;
        Ok(Self::from_storage(Storage::Owned(bytes)))
    }
}

impl<'a> BitBuffer<'a> {
    /// Create a buffer over the caller's array without copying
    ///
    /// The array stays owned by the caller and is never released by the
    /// buffer. Writes through [`bytes_mut`](Self::bytes_mut) land in it.
    pub fn borrowed(data: &'a mut [u8]) -> Self {
        if data.is_empty() {
            return Self::from_storage(Storage::empty());
        }
        Self::from_storage(Storage::Borrowed(data))
    }

    /// Create a buffer from optional caller data
    ///
    /// Absent or empty data yields an empty buffer with no cursor. Otherwise
    /// `mode` selects between copying the bytes and borrowing them in place.
    pub fn create_from_data(data: Option<&'a mut [u8]>, mode: StorageMode) -> Result<Self> {
        match (data, mode) {
            (None, _) => Ok(Self::from_storage(Storage::empty())),
            (Some(bytes), StorageMode::Copy) => Ok(Self::from_storage(Storage::copy_of(bytes)?)),
            (Some(bytes), StorageMode::Borrow) => Ok(Self::borrowed(bytes)),
        }
    }

    fn from_storage(storage: Storage<'a>) -> Self {
        let cursor = (!storage.as_slice().is_empty()).then_some(0);
        Self {
            storage,
            cursor,
            id: next_buffer_id(),
            config: BufferConfig::default(),
        }
    }

    /// Replace the diagnostics configuration
    pub fn with_config(mut self, config: BufferConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Append bytes to the end of the buffer
    ///
    /// Existing bytes are preserved. A borrowed buffer is first copied onto
    /// owned storage, leaving the caller's array untouched. Empty input is a
    /// no-op. On allocation failure the buffer is unchanged.
    ///
    /// The cursor moves to the byte after the appended data.
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        self.storage.extend(data)?;
        self.cursor = Some(self.len());
        log_bytes_hex("Appended", data);

        Ok(())
    }

    /// Number of valid bytes in the buffer
    pub fn len(&self) -> usize {
        self.storage.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of valid bits in the buffer
    pub fn available_bits(&self) -> u64 {
        self.len() as u64 * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }

    /// Mutable view of the valid bytes
    ///
    /// For a borrowed buffer this writes straight into the caller's array.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.storage.as_mut_slice()
    }

    /// Byte following the last fixed-width read or append
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// True while the buffer reads from a caller-owned array
    pub fn is_borrowed(&self) -> bool {
        self.storage.is_borrowed()
    }

    pub fn to_hex(&self) -> String {
        encode_hex(self.as_bytes())
    }

    /// Consume the buffer, returning its bytes
    ///
    /// Borrowed bytes are copied; the caller's array is not affected.
    pub fn into_vec(self) -> Vec<u8> {
        self.storage.into_vec()
    }
}

impl Default for BitBuffer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones copy the bytes onto owned storage and get a fresh identity, so
/// bounds proofs issued by the original are not accepted by the clone.
impl Clone for BitBuffer<'_> {
    fn clone(&self) -> Self {
        Self {
            storage: Storage::Owned(self.as_bytes().to_vec()),
            cursor: self.cursor,
            id: next_buffer_id(),
            config: self.config.clone(),
        }
    }
}

impl fmt::Debug for BitBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len())
            .field("borrowed", &self.is_borrowed())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}
