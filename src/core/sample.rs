// Closed integer ranges, evenly spaced floats and chance predicates, all
// derived from the bounded sampler.

use crate::bounded::hash_uint_under_limit;
use crate::error::{HashRngError, Result};
use crate::index::HashIndex;
use crate::mixer::hash_uint;

/// Steps between 0.0 and 1.0 produced by [`hash_zero_to_one`].
///
/// 2^24 matches the f32 mantissa in `[0.5, 1.0)`, so every step is exactly
/// representable and the spacing is uniform over the whole interval.
pub const ZERO_TO_ONE_STEPS: u32 = 1 << 24;

/// Steps across `[0, 1)` before mapping to `[-1, 1]` in
/// [`hash_neg_one_to_one`].
pub const NEG_ONE_TO_ONE_STEPS: u32 = 1 << 25;

/// Unsigned integer in the closed range `min..=max`. Requires `min < max`.
pub fn hash_uint_in_range<I: HashIndex + ?Sized>(
    index: &I,
    seed: u32,
    min: u32,
    max: u32,
) -> Result<u32> {
    if min >= max {
        return Err(HashRngError::empty_range(min, max));
    }
    let span = max.wrapping_sub(min).wrapping_add(1);
    Ok(offset_in_span(index, seed, span).wrapping_add(min))
}

/// Signed integer in the closed range `min..=max`. Requires `min < max`.
///
/// ```
/// use hashrng::sample::hash_int_in_range;
///
/// assert_eq!(hash_int_in_range(&[130i32, 23], 0, 0, 9), Ok(6));
/// ```
pub fn hash_int_in_range<I: HashIndex + ?Sized>(
    index: &I,
    seed: u32,
    min: i32,
    max: i32,
) -> Result<i32> {
    if min >= max {
        return Err(HashRngError::empty_range(min, max));
    }
    let span = (max as u32).wrapping_sub(min as u32).wrapping_add(1);
    Ok(offset_in_span(index, seed, span).wrapping_add(min as u32) as i32)
}

/// Float in the closed interval `[0.0, 1.0]`, in steps of `1 / 2^24`.
pub fn hash_zero_to_one<I: HashIndex + ?Sized>(index: &I, seed: u32) -> f32 {
    unit_interval(hash_uint_under_limit(index, seed, ZERO_TO_ONE_STEPS + 1))
}

/// Float in the closed interval `[-1.0, 1.0]`, evenly spaced and symmetric
/// around zero.
pub fn hash_neg_one_to_one<I: HashIndex + ?Sized>(index: &I, seed: u32) -> f32 {
    signed_unit_interval(hash_uint_under_limit(index, seed, NEG_ONE_TO_ONE_STEPS))
}

/// `true` with the given probability.
///
/// `0.0` is never true and `1.0` is always true. Probabilities outside
/// `[0, 1]`, or NaN, are rejected.
pub fn chance<I: HashIndex + ?Sized>(index: &I, seed: u32, probability: f32) -> Result<bool> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(HashRngError::InvalidProbability(probability));
    }
    // The closed float draw can land on exactly 1.0, which `< 1.0` would miss.
    if probability >= 1.0 {
        return Ok(true);
    }
    Ok(hash_zero_to_one(index, seed) < probability)
}

// A span of 0 means the range wrapped: all 2^32 values are valid.
#[inline]
fn offset_in_span<I: HashIndex + ?Sized>(index: &I, seed: u32, span: u32) -> u32 {
    if span == 0 {
        hash_uint(index, seed)
    } else {
        hash_uint_under_limit(index, seed, span)
    }
}

/// Map `0..=2^24` onto `[0.0, 1.0]`. The top step is exactly 1.0.
#[inline]
pub(crate) fn unit_interval(steps: u32) -> f32 {
    if steps >= ZERO_TO_ONE_STEPS {
        return 1.0;
    }
    steps as f32 / ZERO_TO_ONE_STEPS as f32
}

/// Map `0..2^25` onto `[-1.0, 1.0]`.
#[inline]
pub(crate) fn signed_unit_interval(steps: u32) -> f32 {
    let unit = (steps & (NEG_ONE_TO_ONE_STEPS - 1)) as f32 / NEG_ONE_TO_ONE_STEPS as f32;
    unit * 2.0 - 1.0
}
