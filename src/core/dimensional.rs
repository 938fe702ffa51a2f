// Coordinate entry points.
//
// Every buffer-based operation gets 1-, 2-, 3- and 4-coordinate forms. The
// coordinates are packed, in argument order, into a stack array and handed to
// the buffer form unchanged, so `hash_2d_uint(x, y, s)` is exactly
// `hash_uint(&[x, y], s)`. Swapping coordinates changes the result.

use crate::bounded::hash_uint_under_limit;
use crate::error::Result;
use crate::mixer::hash_uint;
use crate::sample::{
    chance, hash_int_in_range, hash_neg_one_to_one, hash_uint_in_range, hash_zero_to_one,
};

// Raw hash.

/// Raw hash at a 1-D coordinate.
#[inline]
pub fn hash_1d_uint(x: i32, seed: u32) -> u32 {
    hash_uint(&[x], seed)
}

#[inline]
pub fn hash_2d_uint(x: i32, y: i32, seed: u32) -> u32 {
    hash_uint(&[x, y], seed)
}

#[inline]
pub fn hash_3d_uint(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    hash_uint(&[x, y, z], seed)
}

#[inline]
pub fn hash_4d_uint(x: i32, y: i32, z: i32, w: i32, seed: u32) -> u32 {
    hash_uint(&[x, y, z, w], seed)
}

// Unbiased value in 0..upper_bound.

/// Unbiased value in `0..upper_bound` at a 1-D coordinate.
#[inline]
pub fn hash_1d_uint_under_limit(x: i32, seed: u32, upper_bound: u32) -> u32 {
    hash_uint_under_limit(&[x], seed, upper_bound)
}

#[inline]
pub fn hash_2d_uint_under_limit(x: i32, y: i32, seed: u32, upper_bound: u32) -> u32 {
    hash_uint_under_limit(&[x, y], seed, upper_bound)
}

#[inline]
pub fn hash_3d_uint_under_limit(x: i32, y: i32, z: i32, seed: u32, upper_bound: u32) -> u32 {
    hash_uint_under_limit(&[x, y, z], seed, upper_bound)
}

#[inline]
pub fn hash_4d_uint_under_limit(
    x: i32,
    y: i32,
    z: i32,
    w: i32,
    seed: u32,
    upper_bound: u32,
) -> u32 {
    hash_uint_under_limit(&[x, y, z, w], seed, upper_bound)
}

// Unsigned value in min..=max.

/// Unsigned value in `min..=max` at a 1-D coordinate.
#[inline]
pub fn hash_1d_uint_in_range(x: i32, seed: u32, min: u32, max: u32) -> Result<u32> {
    hash_uint_in_range(&[x], seed, min, max)
}

#[inline]
pub fn hash_2d_uint_in_range(x: i32, y: i32, seed: u32, min: u32, max: u32) -> Result<u32> {
    hash_uint_in_range(&[x, y], seed, min, max)
}

#[inline]
pub fn hash_3d_uint_in_range(x: i32, y: i32, z: i32, seed: u32, min: u32, max: u32) -> Result<u32> {
    hash_uint_in_range(&[x, y, z], seed, min, max)
}

#[inline]
pub fn hash_4d_uint_in_range(
    x: i32,
    y: i32,
    z: i32,
    w: i32,
    seed: u32,
    min: u32,
    max: u32,
) -> Result<u32> {
    hash_uint_in_range(&[x, y, z, w], seed, min, max)
}

// Signed value in min..=max.

/// Signed value in `min..=max` at a 1-D coordinate.
#[inline]
pub fn hash_1d_int_in_range(x: i32, seed: u32, min: i32, max: i32) -> Result<i32> {
    hash_int_in_range(&[x], seed, min, max)
}

#[inline]
pub fn hash_2d_int_in_range(x: i32, y: i32, seed: u32, min: i32, max: i32) -> Result<i32> {
    hash_int_in_range(&[x, y], seed, min, max)
}

#[inline]
pub fn hash_3d_int_in_range(x: i32, y: i32, z: i32, seed: u32, min: i32, max: i32) -> Result<i32> {
    hash_int_in_range(&[x, y, z], seed, min, max)
}

#[inline]
pub fn hash_4d_int_in_range(
    x: i32,
    y: i32,
    z: i32,
    w: i32,
    seed: u32,
    min: i32,
    max: i32,
) -> Result<i32> {
    hash_int_in_range(&[x, y, z, w], seed, min, max)
}

// Float in [0, 1].

/// Float in `[0, 1]` at a 1-D coordinate.
#[inline]
pub fn hash_1d_zero_to_one(x: i32, seed: u32) -> f32 {
    hash_zero_to_one(&[x], seed)
}

#[inline]
pub fn hash_2d_zero_to_one(x: i32, y: i32, seed: u32) -> f32 {
    hash_zero_to_one(&[x, y], seed)
}

#[inline]
pub fn hash_3d_zero_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    hash_zero_to_one(&[x, y, z], seed)
}

#[inline]
pub fn hash_4d_zero_to_one(x: i32, y: i32, z: i32, w: i32, seed: u32) -> f32 {
    hash_zero_to_one(&[x, y, z, w], seed)
}

// Float in [-1, 1].

/// Float in `[-1, 1]` at a 1-D coordinate.
#[inline]
pub fn hash_1d_neg_one_to_one(x: i32, seed: u32) -> f32 {
    hash_neg_one_to_one(&[x], seed)
}

#[inline]
pub fn hash_2d_neg_one_to_one(x: i32, y: i32, seed: u32) -> f32 {
    hash_neg_one_to_one(&[x, y], seed)
}

#[inline]
pub fn hash_3d_neg_one_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    hash_neg_one_to_one(&[x, y, z], seed)
}

#[inline]
pub fn hash_4d_neg_one_to_one(x: i32, y: i32, z: i32, w: i32, seed: u32) -> f32 {
    hash_neg_one_to_one(&[x, y, z, w], seed)
}

// true with the given probability.

/// `true` with the given probability at a 1-D coordinate.
#[inline]
pub fn chance_1d(x: i32, seed: u32, probability: f32) -> Result<bool> {
    chance(&[x], seed, probability)
}

#[inline]
pub fn chance_2d(x: i32, y: i32, seed: u32, probability: f32) -> Result<bool> {
    chance(&[x, y], seed, probability)
}

#[inline]
pub fn chance_3d(x: i32, y: i32, z: i32, seed: u32, probability: f32) -> Result<bool> {
    chance(&[x, y, z], seed, probability)
}

#[inline]
pub fn chance_4d(x: i32, y: i32, z: i32, w: i32, seed: u32, probability: f32) -> Result<bool> {
    chance(&[x, y, z, w], seed, probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_coordinates_in_argument_order() {
        assert_eq!(hash_1d_uint(130, 0), 855_443_384);
        assert_eq!(hash_2d_uint(130, 23, 0), 977_346_410);
        assert_eq!(hash_2d_uint(23, 130, 0), 3_531_200_070);
        assert_eq!(hash_3d_uint(130, 23, 5, 0), 2_883_469_478);
        assert_eq!(hash_4d_uint(130, 23, 5, -9, 0), 1_662_177_876);
    }

    #[test]
    fn coordinate_forms_match_buffer_forms() {
        let (x, y, z, w, seed) = (-7000, 12, 900, 4, 42);
        assert_eq!(hash_4d_uint(x, y, z, w, seed), hash_uint(&[x, y, z, w], seed));
        assert_eq!(
            hash_3d_uint_under_limit(x, y, z, seed, 7),
            hash_uint_under_limit(&[x, y, z], seed, 7)
        );
        assert_eq!(
            hash_2d_uint_in_range(x, y, seed, 100, 1000),
            hash_uint_in_range(&[x, y], seed, 100, 1000)
        );
        assert_eq!(
            hash_1d_int_in_range(x, seed, -50, 50),
            hash_int_in_range(&[x], seed, -50, 50)
        );
        assert_eq!(
            hash_4d_zero_to_one(x, y, z, w, seed).to_bits(),
            hash_zero_to_one(&[x, y, z, w], seed).to_bits()
        );
        assert_eq!(
            hash_3d_neg_one_to_one(x, y, z, seed).to_bits(),
            hash_neg_one_to_one(&[x, y, z], seed).to_bits()
        );
        assert_eq!(chance_2d(x, y, seed, 0.3), chance(&[x, y], seed, 0.3));
    }

    #[test]
    fn reference_values_at_130_23() {
        assert_eq!(hash_2d_uint_under_limit(130, 23, 0, 10), 6);
        assert_eq!(hash_2d_uint_in_range(130, 23, 0, 10, 20), Ok(20));
        assert_eq!(hash_2d_int_in_range(130, 23, 0, -50, 50), Ok(12));
        assert_eq!(hash_2d_int_in_range(130, 23, 0, 0, 9), Ok(6));
        assert_eq!(hash_2d_zero_to_one(130, 23, 0), 0.254_385_59);
        assert_eq!(hash_2d_neg_one_to_one(130, 23, 0), -0.406_592_19);
        assert_eq!(chance_2d(130, 23, 0, 0.5), Ok(true));
    }

    #[test]
    fn call_order_does_not_matter() {
        let limit = 100;
        let first = hash_1d_uint_in_range(0, 5, 0, limit - 1).unwrap();
        let fifty_first = hash_1d_uint_in_range(51, 5, 0, limit - 1).unwrap();
        let again = hash_1d_uint_in_range(0, 5, 0, limit - 1).unwrap();
        assert_eq!(first, again);
        assert_eq!((first, fifty_first), (5, 14));
    }

    #[test]
    fn adjacent_positions_do_not_collide() {
        let mut values = [0u32; 1000];
        for (i, v) in values.iter_mut().enumerate() {
            *v = hash_1d_uint(i as i32, 0);
        }
        values.sort_unstable();
        assert!(values.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn swapping_coordinates_changes_results() {
        let mut differing = 0;
        for a in 0..20 {
            for b in 0..20 {
                if a != b && hash_2d_uint(a, b, 0) != hash_2d_uint(b, a, 0) {
                    differing += 1;
                }
            }
        }
        assert_eq!(differing, 20 * 19);
    }

    #[test]
    fn seeds_are_independent_streams() {
        assert!((0..64).all(|i| hash_2d_uint(i, 3, 1) != hash_2d_uint(i, 3, 2)));
    }
}
