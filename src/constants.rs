//! BitBuffer Constants
//!
//! Layout constants for the diagnostic dump and limits shared by the fetch
//! operations.

/// Maximum number of bits a single `fetch_bits` call may return
pub const MAX_FETCH_BITS: u32 = 32;

/// Byte values printed per line in a buffer dump
pub const DUMP_BYTES_PER_LINE: usize = 20;

/// Indentation of the `<Length>` and `<Bytes>` elements in a dump
pub const DUMP_TAG_INDENT: usize = 4;

/// Indentation of each line of byte values in a dump
pub const DUMP_BYTES_INDENT: usize = 8;

/// Environment variable enabling underflow reports from bounds probes
pub const DEBUG_ENV_VAR: &str = "BITBUF_DEBUG";

/// Log target used by the default diagnostic sink
pub const LOG_TARGET: &str = "bitbuf";
