//! Bounds checking for `BitBuffer`.
//!
//! One predicate decides every range: `offset_bits + nbits <= len * 8`,
//! evaluated in `u64`. Byte-aligned reads apply it to `offset_bits & !7`
//! and `size * 8`, which is the same as `(offset_bits >> 3) + size <= len`.

use std::ops::Range;

use super::BitBuffer;
use crate::error::{BitBufferError, Result};

/// Evidence that a bit range was checked against a particular buffer
///
/// Issued by [`BitBuffer::check_bounds`] and accepted by
/// [`BitBuffer::at_byte_offset_unchecked`]. Buffers only grow, so a proof
/// stays valid for the lifetime of the buffer that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsProof {
    owner: u64,
    start: usize,
    end: usize,
}

impl BoundsProof {
    /// Bytes covered by the checked bit range
    pub fn byte_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl BitBuffer<'_> {
    fn fits(&self, offset_bits: u64, nbits: u64) -> bool {
        offset_bits
            .checked_add(nbits)
            .is_some_and(|end| end <= self.available_bits())
    }

    /// Probe whether `to_get_bits` bits starting at `offset_bits` are present
    ///
    /// A failed probe is reported to the sink only when probe reporting is
    /// enabled in the buffer's config; probing past the end is often expected
    /// when decoding optional trailing fields.
    pub fn has_enough_data(&self, offset_bits: usize, to_get_bits: usize) -> bool {
        let enough = self.fits(offset_bits as u64, to_get_bits as u64);
        if !enough && self.config.report_probe_underflow() {
            self.config.warn(&format!(
                "Detected underflow offset {offset_bits}, to_get {to_get_bits}, buffer size {}",
                self.len()
            ));
        }
        enough
    }

    /// Check a bit range and return a proof for unchecked access
    pub fn check_bounds(&self, offset_bits: usize, to_get_bits: usize) -> Result<BoundsProof> {
        if !self.has_enough_data(offset_bits, to_get_bits) {
            return Err(self.out_of_bounds(offset_bits as u64, to_get_bits as u64));
        }

        // The predicate held in u64, so the rounded-up end is at most len
        let end_bits = offset_bits as u64 + to_get_bits as u64;
        Ok(BoundsProof {
            owner: self.id,
            start: offset_bits / 8,
            end: end_bits.div_ceil(8) as usize,
        })
    }

    /// Storage from byte `offset_bits / 8` to the end of the buffer
    ///
    /// Fails unless at least one byte is present at that offset.
    pub fn at_byte_offset(&self, offset_bits: usize) -> Result<&[u8]> {
        let start = offset_bits / 8;
        self.require_bytes(start, 1)?;
        Ok(&self.as_bytes()[start..])
    }

    /// Storage covered by a previously checked range, without a length test
    ///
    /// # Panics
    ///
    /// Panics if `proof` was issued by a different buffer.
    pub fn at_byte_offset_unchecked(&self, proof: &BoundsProof) -> &[u8] {
        assert_eq!(
            proof.owner, self.id,
            "bounds proof was issued by a different buffer"
        );
        // SAFETY: the proof was issued by this buffer, whose length was then
        // at least `proof.end`; storage never shrinks, and clones receive a
        // fresh id, so the range is still in bounds.
        unsafe { self.as_bytes().get_unchecked(proof.start..proof.end) }
    }

    /// Require `nbits` bits from `offset_bits`, warning on underflow
    pub(super) fn require_bits(&self, offset_bits: u64, nbits: u64) -> Result<()> {
        if self.fits(offset_bits, nbits) {
            return Ok(());
        }

        let err = self.out_of_bounds(offset_bits, nbits);
        self.config.warn(&format!("Not enough data to fetch: {err}"));
        Err(err)
    }

    /// Require `size` whole bytes from byte `start`
    pub(super) fn require_bytes(&self, start: usize, size: usize) -> Result<()> {
        let offset_bits = (start as u64).saturating_mul(8);
        let nbits = (size as u64).saturating_mul(8);
        self.require_bits(offset_bits, nbits)
    }

    fn out_of_bounds(&self, offset_bits: u64, requested_bits: u64) -> BitBufferError {
        BitBufferError::OutOfBounds {
            offset_bits,
            requested_bits,
            available_bits: self.available_bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_config(probes: bool) -> (BufferConfig, Rc<RefCell<Vec<String>>>) {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = {
            let seen = Rc::clone(&seen);
            move |msg: &str| seen.borrow_mut().push(msg.to_owned())
        };
        let config = BufferConfig::new()
            .with_probe_reporting(probes)
            .with_sink(sink);
        (config, seen)
    }

    #[test]
    fn test_empty_buffer_has_no_data() {
        let buffer = BitBuffer::new();
        assert!(!buffer.has_enough_data(0, 8));
        assert!(buffer.has_enough_data(0, 0));
    }

    #[test]
    fn test_exact_bit_predicate() {
        let buffer = BitBuffer::copied(&[0; 2]).unwrap();
        assert!(buffer.has_enough_data(0, 16));
        assert!(buffer.has_enough_data(9, 7));
        assert!(!buffer.has_enough_data(9, 8));
        assert!(!buffer.has_enough_data(17, 0));
        assert!(!buffer.has_enough_data(usize::MAX, 1));
    }

    #[test]
    fn test_probe_reporting_follows_config() {
        let (config, seen) = recording_config(false);
        let buffer = BitBuffer::copied(&[0]).unwrap().with_config(config);
        assert!(!buffer.has_enough_data(0, 16));
        assert!(seen.borrow().is_empty());

        let (config, seen) = recording_config(true);
        let buffer = BitBuffer::copied(&[0]).unwrap().with_config(config);
        assert!(!buffer.has_enough_data(4, 12));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("offset 4"));
        assert!(seen[0].contains("to_get 12"));
        assert!(seen[0].contains("buffer size 1"));
    }

    #[test]
    fn test_check_bounds_proof_range() {
        let buffer = BitBuffer::copied(&[0x11, 0x22, 0x33, 0x44]).unwrap();
        let proof = buffer.check_bounds(12, 9).unwrap();
        assert_eq!(proof.byte_range(), 1..3);
        assert_eq!(buffer.at_byte_offset_unchecked(&proof), &[0x22, 0x33]);

        let err = buffer.check_bounds(30, 3).unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_check_bounds_at_buffer_end() {
        let buffer = BitBuffer::copied(&[0xA1, 0xB2, 0xC3]).unwrap();

        let whole = buffer.check_bounds(0, 24).unwrap();
        assert_eq!(whole.byte_range(), 0..3);

        let tail = buffer.check_bounds(23, 1).unwrap();
        assert_eq!(tail.byte_range(), 2..3);
        assert_eq!(buffer.at_byte_offset_unchecked(&tail), &[0xC3]);

        let empty = buffer.check_bounds(24, 0).unwrap();
        assert_eq!(empty.byte_range(), 3..3);
        assert!(buffer.at_byte_offset_unchecked(&empty).is_empty());

        assert!(buffer.check_bounds(usize::MAX, usize::MAX).is_err());
        assert!(buffer.check_bounds(8, usize::MAX).is_err());
    }

    #[test]
    fn test_proof_survives_append() {
        let mut buffer = BitBuffer::copied(&[0xAB]).unwrap();
        let proof = buffer.check_bounds(0, 8).unwrap();
        buffer.append_data(&[0xCD; 64]).unwrap();
        assert_eq!(buffer.at_byte_offset_unchecked(&proof), &[0xAB]);
    }

    #[test]
    #[should_panic(expected = "different buffer")]
    fn test_foreign_proof_panics() {
        let long = BitBuffer::copied(&[0; 16]).unwrap();
        let short = BitBuffer::copied(&[0; 1]).unwrap();
        let proof = long.check_bounds(0, 128).unwrap();
        let _ = short.at_byte_offset_unchecked(&proof);
    }

    #[test]
    fn test_at_byte_offset_checked() {
        let buffer = BitBuffer::copied(&[1, 2, 3]).unwrap();
        assert_eq!(buffer.at_byte_offset(0).unwrap(), &[1, 2, 3]);
        assert_eq!(buffer.at_byte_offset(17).unwrap(), &[3]);
        assert!(buffer.at_byte_offset(24).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_require_warns_unconditionally() {
        let (config, seen) = recording_config(false);
        let buffer = BitBuffer::copied(&[0]).unwrap().with_config(config);
        assert!(buffer.require_bytes(0, 2).is_err());
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].starts_with("Not enough data to fetch"));
    }
}
