// Distribution checks for the bounded sampler.
//
// Used by the test suite and by `hashrng uniformity` to confirm that a bound
// produces a flat histogram, either along positions or along seeds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::info;

use crate::dimensional::hash_1d_uint_under_limit;

/// Standard normal quantile for a one-sided 0.999 level.
pub const Z_999: f64 = 3.090_232;

/// Which input varies across a survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Survey {
    /// Coordinate `i` for sample `i`, seed fixed.
    #[default]
    Positions,
    /// Seed `seed + i` for sample `i`, coordinate fixed at 0.
    Seeds,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformityReport {
    pub upper_bound: u32,
    pub samples: u32,
    pub survey: Survey,
    pub counts: Vec<u64>,
    pub chi_squared: f64,
    pub degrees_of_freedom: u32,
    pub critical_value: f64,
    /// `chi_squared` below the 0.999 critical value.
    pub uniform: bool,
}

/// Pearson's statistic of `counts` against a flat expectation.
pub fn chi_squared(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Wilson–Hilferty approximation of the chi-squared quantile for `df`
/// degrees of freedom at standard normal quantile `z`.
pub fn chi_squared_critical(df: u32, z: f64) -> f64 {
    if df == 0 {
        return 0.0;
    }
    let df = df as f64;
    let t = 2.0 / (9.0 * df);
    df * (1.0 - t + z * t.sqrt()).powi(3)
}

/// Histogram `samples` draws of `hash_uint_under_limit(.., upper_bound)`
/// and test them for uniformity.
///
/// Bounds are capped at 2^16 buckets to keep the histogram small.
pub fn survey_under_limit(
    upper_bound: u32,
    samples: u32,
    seed: u32,
    survey: Survey,
) -> UniformityReport {
    let buckets = upper_bound.clamp(1, 1 << 16);
    let mut counts = vec![0u64; buckets as usize];

    for i in 0..samples {
        let v = match survey {
            Survey::Positions => hash_1d_uint_under_limit(i as i32, seed, buckets),
            Survey::Seeds => hash_1d_uint_under_limit(0, seed.wrapping_add(i), buckets),
        };
        counts[v as usize] += 1;
    }

    let chi = chi_squared(&counts);
    let df = buckets - 1;
    let critical = chi_squared_critical(df, Z_999);
    let uniform = chi < critical || df == 0;

    info!(
        upper_bound = buckets,
        samples,
        ?survey,
        chi_squared = chi,
        critical,
        uniform,
        "uniformity survey"
    );

    UniformityReport {
        upper_bound: buckets,
        samples,
        survey,
        counts,
        chi_squared: chi,
        degrees_of_freedom: df,
        critical_value: critical,
        uniform,
    }
}
