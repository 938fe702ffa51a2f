// Core hash: index words + seed -> one 32-bit value.
//
// A Squirrel3-style noise hash extended to any index length. Each word is
// weighted by a rotating prime so word positions do not commute, then the
// accumulator goes through a fixed avalanche finalizer.
//
// The constants below are part of the output format. Changing any of them
// changes every value this crate has ever produced.

use crate::error::Result;
use crate::index::{ByteIndex, HashIndex};

/// Per-position multipliers. Entry 0 is the identity so the first word's
/// contribution is `w + PRIMES[1]`; the rotation covers all six entries.
pub const PRIMES: [u32; 6] = [
    1,
    0x9E37_79B1,
    0x85EB_CA77,
    0xC2B2_AE3D,
    0x27D4_EB2F,
    0x1656_67B1,
];

pub const BIT_NOISE1: u32 = 0x68E3_1DA4;
pub const BIT_NOISE2: u32 = 0xB529_7A4D;
pub const BIT_NOISE3: u32 = 0x1B56_C4E9;

/// Hash an index and seed into a raw 32-bit value.
///
/// Pure and allocation-free. All arithmetic wraps.
///
/// ```
/// use hashrng::mixer::hash_uint;
///
/// assert_eq!(hash_uint(&[130i32, 23], 0), 977_346_410);
/// ```
#[inline]
pub fn hash_uint<I: HashIndex + ?Sized>(index: &I, seed: u32) -> u32 {
    let mut num = 0u32;
    let mut slot = 0usize;
    index.for_each_word(|word| {
        let next = (slot + 1) % PRIMES.len();
        num = num.wrapping_add(word.wrapping_mul(PRIMES[slot]).wrapping_add(PRIMES[next]));
        slot = next;
    });
    avalanche(num, seed)
}

/// Hash a raw byte buffer. The buffer must be a non-empty multiple of 4
/// bytes long.
pub fn hash_bytes(bytes: &[u8], seed: u32) -> Result<u32> {
    Ok(hash_uint(&ByteIndex::new(bytes)?, seed))
}

#[inline]
fn avalanche(mut num: u32, seed: u32) -> u32 {
    num = num.wrapping_mul(BIT_NOISE1);
    num = num.wrapping_add(seed);
    num ^= num >> 8;
    num = num.wrapping_add(BIT_NOISE2);
    num ^= num << 8;
    num = num.wrapping_mul(BIT_NOISE3);
    num ^= num >> 8;
    num
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashRngError;

    #[test]
    fn reference_values() {
        assert_eq!(hash_uint(&[130i32], 0), 855_443_384);
        assert_eq!(hash_uint(&[130i32, 23], 0), 977_346_410);
        assert_eq!(hash_uint(&[130i32, 23], 42), 2_183_867_592);
        assert_eq!(hash_uint(&[-1i32], 7), 2_289_038_053);
        assert_eq!(hash_uint(&[130i32, 23, 5], 0), 2_883_469_478);
        assert_eq!(hash_uint(&[130i32, 23, 5, -9], 0), 1_662_177_876);
    }

    #[test]
    fn rotation_wraps_past_the_table() {
        // Seven words exercise slot 5 -> slot 0 -> slot 1.
        assert_eq!(hash_uint(&[1u32, 2, 3, 4, 5, 6, 7], 99), 3_543_111_958);
    }

    #[test]
    fn word_order_matters() {
        assert_eq!(hash_uint(&[23i32, 130], 0), 3_531_200_070);
        assert_ne!(hash_uint(&[130i32, 23], 0), hash_uint(&[23i32, 130], 0));
    }

    #[test]
    fn zero_index_differs_by_length() {
        let one = hash_uint(&[0u32], 0);
        let two = hash_uint(&[0u32, 0], 0);
        let three = hash_uint(&[0u32, 0, 0], 0);
        assert_ne!(one, two);
        assert_ne!(two, three);
        assert_ne!(one, three);
    }

    #[test]
    fn bytes_match_words() {
        let bytes = [0x82, 0, 0, 0, 0x17, 0, 0, 0];
        assert_eq!(hash_bytes(&bytes, 0), Ok(977_346_410));
        assert_eq!(
            hash_bytes(&bytes[..6], 0),
            Err(HashRngError::UnalignedIndex {
                len: 6,
                alignment: 4
            })
        );
        assert_eq!(hash_bytes(&[], 0), Err(HashRngError::EmptyIndex));
    }

    #[test]
    fn single_bit_flips_avalanche() {
        // One-bit input changes must flip a large share of the 32 output
        // bits on average.
        let mut flipped = 0u64;
        let mut trials = 0u64;
        for x in 0..256i32 {
            let base = hash_uint(&[x, 17], 3);
            for bit in 0..32 {
                let other = hash_uint(&[x ^ (1 << bit), 17], 3);
                flipped += u64::from((base ^ other).count_ones());
                trials += 1;
            }
        }
        let mean = flipped as f64 / trials as f64;
        assert!((12.0..20.0).contains(&mean), "mean flipped bits {mean}");
    }
}
