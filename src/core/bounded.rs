// Unbiased integers below an upper bound.
//
// Each raw draw is split into windows of the minimal covering bit width. The
// first window below the bound wins; when every window of a draw is rejected
// the next draw is the same index at `seed + 1`. Each window succeeds with
// probability at least 1/2, so the loop terminates with probability 1. No
// iteration cap.

use crate::bits::bit_length;
use crate::index::HashIndex;
use crate::mixer::hash_uint;

/// Geometry of the rejection windows for one upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitWindow {
    /// Width of one window: smallest `n` with `2^n - 1 >= upper_bound`.
    pub bits: u32,
    /// `2^bits - 1`.
    pub mask: u32,
    /// Bits of a draw left over after the first window.
    pub spare: u32,
}

impl BitWindow {
    /// Window geometry for `upper_bound >= 2`.
    #[inline]
    pub fn covering(upper_bound: u32) -> Self {
        let bits = bit_length(upper_bound);
        let spare = u32::BITS - bits;
        Self {
            bits,
            mask: u32::MAX >> spare,
            spare,
        }
    }

    /// Number of windows tested per raw draw.
    pub fn windows_per_draw(&self) -> u32 {
        1 + self.spare / self.bits
    }

    /// First window of `value` that lands below `upper_bound`, low bits
    /// first.
    #[inline]
    pub fn first_below(&self, mut value: u32, upper_bound: u32) -> Option<u32> {
        let result = value & self.mask;
        if result < upper_bound {
            return Some(result);
        }

        let mut bits_left = self.spare;
        while bits_left >= self.bits {
            value >>= self.bits;
            let result = value & self.mask;
            if result < upper_bound {
                return Some(result);
            }
            bits_left -= self.bits;
        }
        None
    }
}

/// Uniform integer in `0..upper_bound`, free of modulo bias.
///
/// `upper_bound < 2` has at most one outcome and returns 0.
///
/// ```
/// use hashrng::bounded::hash_uint_under_limit;
///
/// let v = hash_uint_under_limit(&[130i32, 23], 0, 10);
/// assert_eq!(v, 6);
/// ```
pub fn hash_uint_under_limit<I: HashIndex + ?Sized>(index: &I, seed: u32, upper_bound: u32) -> u32 {
    if upper_bound < 2 {
        return 0;
    }

    let window = BitWindow::covering(upper_bound);
    let mut seed = seed;
    loop {
        let value = hash_uint(index, seed);
        if let Some(result) = window.first_below(value, upper_bound) {
            return result;
        }
        seed = seed.wrapping_add(1);
    }
}
