//! Fixed-width, byte-range and bit-range reads.

use super::BitBuffer;
use crate::constants::MAX_FETCH_BITS;
use crate::error::{BitBufferError, Result};

/// Host-order getter plus explicit little/big-endian variants
macro_rules! fixed_width_getters {
    ($($ty:ty => $ne:ident, $le:ident, $be:ident;)*) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` in host byte order from byte `offset_bits >> 3`")]
            pub fn $ne(&mut self, offset_bits: usize) -> Result<$ty> {
                self.fetch_array(offset_bits).map(<$ty>::from_ne_bytes)
            }

            #[doc = concat!("Read a little-endian `", stringify!($ty), "` from byte `offset_bits >> 3`")]
            pub fn $le(&mut self, offset_bits: usize) -> Result<$ty> {
                self.fetch_array(offset_bits).map(<$ty>::from_le_bytes)
            }

            #[doc = concat!("Read a big-endian `", stringify!($ty), "` from byte `offset_bits >> 3`")]
            pub fn $be(&mut self, offset_bits: usize) -> Result<$ty> {
                self.fetch_array(offset_bits).map(<$ty>::from_be_bytes)
            }
        )*
    };
}

impl BitBuffer<'_> {
    /// Copy `N` bytes from byte `offset_bits >> 3` and advance the cursor
    fn fetch_array<const N: usize>(&mut self, offset_bits: usize) -> Result<[u8; N]> {
        let start = offset_bits >> 3;
        self.require_bytes(start, N)?;

        let mut raw = [0u8; N];
        raw.copy_from_slice(&self.as_bytes()[start..start + N]);
        self.cursor = Some(start + N);

        Ok(raw)
    }

    /// Read one byte from byte `offset_bits >> 3`
    pub fn get_u8(&mut self, offset_bits: usize) -> Result<u8> {
        self.fetch_array::<1>(offset_bits).map(|[byte]| byte)
    }

    fixed_width_getters! {
        u16 => get_u16, get_u16_le, get_u16_be;
        u32 => get_u32, get_u32_le, get_u32_be;
        u64 => get_u64, get_u64_le, get_u64_be;
    }

    /// Copy `n` bytes starting at byte `offset_bits >> 3` into `out[..n]`
    ///
    /// `out` is left untouched when the range is not fully present.
    pub fn fetch_nbytes(&self, offset_bits: usize, n: usize, out: &mut [u8]) -> Result<()> {
        if out.len() < n {
            return Err(BitBufferError::BadParameter(format!(
                "destination holds {} bytes, {n} requested",
                out.len()
            )));
        }

        let bytes = self.bytes_at(offset_bits, n)?;
        out[..n].copy_from_slice(bytes);
        Ok(())
    }

    /// View `n` bytes starting at byte `offset_bits >> 3`
    pub fn bytes_at(&self, offset_bits: usize, n: usize) -> Result<&[u8]> {
        let start = offset_bits >> 3;
        self.require_bytes(start, n)?;
        Ok(&self.as_bytes()[start..start + n])
    }

    /// Read `nbits` (at most 32) bits starting at bit `offset_bits`
    ///
    /// Bit `i` of the result is storage bit `offset_bits + i`, where bits
    /// are numbered from the least-significant bit of each byte.
    pub fn fetch_bits(&self, offset_bits: usize, nbits: u32) -> Result<u32> {
        if nbits > MAX_FETCH_BITS {
            return Err(BitBufferError::BadParameter(format!(
                "cannot fetch {nbits} bits, limit is {MAX_FETCH_BITS}"
            )));
        }
        self.require_bits(offset_bits as u64, u64::from(nbits))?;
        if nbits == 0 {
            return Ok(0);
        }

        let first = offset_bits / 8;
        let last = (offset_bits + nbits as usize - 1) / 8;
        let shift = offset_bits % 8;

        // At most 5 bytes: 7 leading bits plus 32 requested
        let window = self.as_bytes()[first..=last]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &byte)| acc | (u64::from(byte) << (8 * i)));

        let mask = (1u64 << nbits) - 1;
        Ok(((window >> shift) & mask) as u32)
    }

    /// Read the single bit at `offset_bits`
    pub fn fetch_bit(&self, offset_bits: usize) -> Result<bool> {
        self.require_bits(offset_bits as u64, 1)?;
        let byte = self.as_bytes()[offset_bits / 8];
        Ok((byte >> (offset_bits % 8)) & 1 == 1)
    }
}
