// Index views fed to the mixer.
//
// An index is an ordered run of 32-bit words. Coordinates, word slices, float
// data and raw byte buffers all reduce to that shape without copying.

use crate::error::{HashRngError, Result};

/// Bytes per index word.
pub const WORD_BYTES: usize = 4;

/// A read-only, ordered sequence of 32-bit words.
///
/// Word position matters: the mixer weights each slot differently, so
/// `[a, b]` and `[b, a]` are different indices.
pub trait HashIndex {
    fn word_count(&self) -> usize;

    fn for_each_word<F: FnMut(u32)>(&self, f: F);
}

impl HashIndex for [u32] {
    #[inline]
    fn word_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        self.iter().copied().for_each(f);
    }
}

impl HashIndex for [i32] {
    #[inline]
    fn word_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        self.iter().map(|&w| w as u32).for_each(f);
    }
}

/// Floats hash by their IEEE-754 bit pattern, so `0.0` and `-0.0` differ.
impl HashIndex for [f32] {
    #[inline]
    fn word_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        self.iter().map(|w| w.to_bits()).for_each(f);
    }
}

impl<T, const N: usize> HashIndex for [T; N]
where
    [T]: HashIndex,
{
    #[inline]
    fn word_count(&self) -> usize {
        self.as_slice().word_count()
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        self.as_slice().for_each_word(f);
    }
}

impl<T: HashIndex + ?Sized> HashIndex for &T {
    #[inline]
    fn word_count(&self) -> usize {
        (**self).word_count()
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        (**self).for_each_word(f);
    }
}

/// A validated view over a raw byte buffer.
///
/// The buffer must be non-empty and a whole number of words long. Words are
/// decoded little-endian regardless of host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteIndex<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteIndex<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(HashRngError::EmptyIndex);
        }
        if bytes.len() % WORD_BYTES != 0 {
            return Err(HashRngError::UnalignedIndex {
                len: bytes.len(),
                alignment: WORD_BYTES,
            });
        }
        Ok(Self { bytes })
    }

    /// View a plain-old-data value (e.g. a `#[repr(C)]` placement record) as
    /// an index. The value's in-memory layout is what gets hashed.
    #[cfg(feature = "bytemuck")]
    pub fn of<T: bytemuck::Pod>(value: &'a T) -> Result<Self> {
        Self::new(bytemuck::bytes_of(value))
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl HashIndex for ByteIndex<'_> {
    #[inline]
    fn word_count(&self) -> usize {
        self.bytes.len() / WORD_BYTES
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, mut f: F) {
        for chunk in self.bytes.chunks_exact(WORD_BYTES) {
            f(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
    }
}
