//! Backing storage for a `BitBuffer`.
//!
//! Ownership is decided by the variant: an owned `Vec` is released when the
//! buffer drops, a borrowed slice is never released by the buffer.

use std::collections::TryReserveError;

/// Byte storage, either owned by the buffer or borrowed from the caller
pub(crate) enum Storage<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
}

impl<'a> Storage<'a> {
    /// Empty owned storage; does not allocate
    pub(crate) fn empty() -> Self {
        Storage::Owned(Vec::new())
    }

    /// Copy `data` into freshly reserved owned storage
    pub(crate) fn copy_of(data: &[u8]) -> Result<Self, TryReserveError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(data.len())?;
        bytes.extend_from_slice(data);
        Ok(Storage::Owned(bytes))
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(bytes) => bytes,
            Storage::Borrowed(bytes) => bytes,
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(bytes) => bytes,
            Storage::Borrowed(bytes) => bytes,
        }
    }

    pub(crate) fn is_borrowed(&self) -> bool {
        matches!(self, Storage::Borrowed(_))
    }

    /// Grow storage by `data`, preserving existing bytes.
    ///
    /// Borrowed storage cannot grow in place, so it is copied into owned
    /// storage first; the caller's array is left as it was. On failure the
    /// storage is unchanged.
    pub(crate) fn extend(&mut self, data: &[u8]) -> Result<(), TryReserveError> {
        match self {
            Storage::Owned(bytes) => {
                bytes.try_reserve_exact(data.len())?;
                bytes.extend_from_slice(data);
            }
            Storage::Borrowed(borrowed) => {
                let mut owned = Vec::new();
                owned.try_reserve_exact(borrowed.len().saturating_add(data.len()))?;
                owned.extend_from_slice(borrowed);
                owned.extend_from_slice(data);
                *self = Storage::Owned(owned);
            }
        }
        Ok(())
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        match self {
            Storage::Owned(bytes) => bytes,
            Storage::Borrowed(bytes) => bytes.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_does_not_allocate() {
        match Storage::empty() {
            Storage::Owned(bytes) => assert_eq!(bytes.capacity(), 0),
            Storage::Borrowed(_) => panic!("empty storage must be owned"),
        }
    }

    #[test]
    fn test_extend_owned_preserves_prefix() {
        let mut storage = Storage::copy_of(&[1, 2]).unwrap();
        storage.extend(&[3]).unwrap();
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
        assert!(!storage.is_borrowed());
    }

    #[test]
    fn test_extend_borrowed_promotes_to_owned() {
        let mut external = [9u8, 8];
        let mut storage = Storage::Borrowed(&mut external);
        storage.extend(&[7]).unwrap();
        assert!(!storage.is_borrowed());
        assert_eq!(storage.as_slice(), &[9, 8, 7]);
        drop(storage);
        assert_eq!(external, [9, 8]);
    }

    #[test]
    fn test_writes_through_borrowed_slice() {
        let mut external = [0u8; 3];
        let mut storage = Storage::Borrowed(&mut external);
        storage.as_mut_slice()[1] = 0x5A;
        assert_eq!(storage.into_vec(), vec![0, 0x5A, 0]);
        assert_eq!(external, [0, 0x5A, 0]);
    }
}
