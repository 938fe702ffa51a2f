use thiserror::Error;

pub type Result<T> = core::result::Result<T, HashRngError>;

/// Caller-contract violations detected at the API boundary.
///
/// Every precondition is checked in all build profiles. The sampling loop
/// itself has no failure mode, so nothing past validation returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HashRngError {
    #[error("index buffer is empty")]
    EmptyIndex,

    #[error("unaligned index length {len} (expected multiple of {alignment})")]
    UnalignedIndex { len: usize, alignment: usize },

    /// Ranged calls need `min < max`. Both bounds are widened so signed and
    /// unsigned ranges share one variant.
    #[error("empty range: min {min} must be below max {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("probability {0} outside [0, 1]")]
    InvalidProbability(f32),

    #[error("output buffer holds {actual} cells (expected {expected})")]
    BufferSize { expected: usize, actual: usize },

    #[error("grid {width}x{height} does not fit 32-bit coordinates")]
    GridTooLarge { width: usize, height: usize },
}

impl HashRngError {
    pub(crate) fn empty_range<T: Into<i64>>(min: T, max: T) -> Self {
        Self::EmptyRange {
            min: min.into(),
            max: max.into(),
        }
    }
}
