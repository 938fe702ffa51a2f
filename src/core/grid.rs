// Bulk evaluation over 2-D grids (height maps, scatter masks, tile variants).
//
// Each cell is exactly the corresponding coordinate call, so a grid fill and
// a per-cell loop agree bit for bit regardless of execution tier.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::{debug, warn};

use crate::bounded::hash_uint_under_limit;
use crate::error::{HashRngError, Result};
use crate::index::HashIndex;
use crate::mixer::hash_uint;
use crate::sample::{chance, hash_neg_one_to_one, hash_uint_in_range, hash_zero_to_one};

/// Environment variable read by [`ExecutionTier::from_env`].
pub const EXEC_TIER_ENV: &str = "HASHRNG_EXEC_TIER";

/// How a grid fill is executed.
///
/// - `Scalar`: one thread, row by row (default, works everywhere)
/// - `Parallel`: rows split across the rayon pool (requires `parallel`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutionTier {
    #[default]
    Scalar,
    Parallel,
}

impl ExecutionTier {
    /// The tier that will actually run, given the compiled features.
    pub fn effective(self) -> ExecutionTier {
        match self {
            ExecutionTier::Scalar => ExecutionTier::Scalar,
            ExecutionTier::Parallel => {
                #[cfg(feature = "parallel")]
                {
                    ExecutionTier::Parallel
                }
                #[cfg(not(feature = "parallel"))]
                {
                    ExecutionTier::Scalar
                }
            }
        }
    }

    pub fn parse(value: &str) -> Option<ExecutionTier> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scalar" => Some(ExecutionTier::Scalar),
            "parallel" => Some(ExecutionTier::Parallel),
            _ => None,
        }
    }

    /// Tier requested through `HASHRNG_EXEC_TIER`, if any.
    pub fn from_env() -> Option<ExecutionTier> {
        let value = std::env::var(EXEC_TIER_ENV).ok()?;
        let requested = ExecutionTier::parse(&value);
        match requested {
            None => warn!("Unknown {} value: {}", EXEC_TIER_ENV, value),
            Some(t) if t.effective() != t => warn!(
                "Requested execution tier {:?} but using {:?} (feature unavailable)",
                t,
                t.effective()
            ),
            Some(_) => {}
        }
        requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Coordinate of cell `(0, 0)`.
    pub origin: [i32; 2],
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    /// Third coordinate. When set, cells hash as `(x, y, layer)`, which
    /// gives independent maps (e.g. one per terrain octave) under one seed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub layer: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: ExecutionTier,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::with_size(64, 64)
    }
}

impl GridConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            origin: [0, 0],
            width,
            height,
            seed: 0,
            layer: None,
            tier: ExecutionTier::Scalar,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin = [x, y];
        self
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_tier(mut self, tier: ExecutionTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// World coordinate of a cell. Wraps at the edges of `i32`.
    #[inline]
    pub fn coordinate(&self, col: usize, row: usize) -> [i32; 2] {
        [
            self.origin[0].wrapping_add(col as i32),
            self.origin[1].wrapping_add(row as i32),
        ]
    }

    fn validate(&self, len: usize) -> Result<()> {
        let too_large = self.width > i32::MAX as usize
            || self.height > i32::MAX as usize
            || self.width.checked_mul(self.height).is_none();
        if too_large {
            return Err(HashRngError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if len != self.cell_count() {
            return Err(HashRngError::BufferSize {
                expected: self.cell_count(),
                actual: len,
            });
        }
        Ok(())
    }
}

/// Raw hash per cell.
pub fn fill_uint(cfg: &GridConfig, out: &mut [u32]) -> Result<()> {
    fill_with(cfg, out, |cell| hash_uint(&cell, cfg.seed))
}

/// Unbiased value in `0..upper_bound` per cell.
pub fn fill_uint_under_limit(cfg: &GridConfig, upper_bound: u32, out: &mut [u32]) -> Result<()> {
    fill_with(cfg, out, |cell| hash_uint_under_limit(&cell, cfg.seed, upper_bound))
}

/// Unsigned value in `min..=max` per cell.
pub fn fill_uint_in_range(cfg: &GridConfig, min: u32, max: u32, out: &mut [u32]) -> Result<()> {
    // Validate once up front; per-cell calls cannot fail after this.
    hash_uint_in_range(&[0u32], cfg.seed, min, max)?;
    fill_with(cfg, out, |cell| hash_uint_in_range(&cell, cfg.seed, min, max).unwrap_or(min))
}

/// Float in `[0, 1]` per cell.
pub fn fill_zero_to_one(cfg: &GridConfig, out: &mut [f32]) -> Result<()> {
    fill_with(cfg, out, |cell| hash_zero_to_one(&cell, cfg.seed))
}

/// Float in `[-1, 1]` per cell.
pub fn fill_neg_one_to_one(cfg: &GridConfig, out: &mut [f32]) -> Result<()> {
    fill_with(cfg, out, |cell| hash_neg_one_to_one(&cell, cfg.seed))
}

/// Boolean mask with the given per-cell probability.
pub fn fill_chance(cfg: &GridConfig, probability: f32, out: &mut [bool]) -> Result<()> {
    chance(&[0u32], cfg.seed, probability)?;
    fill_with(cfg, out, |cell| chance(&cell, cfg.seed, probability).unwrap_or(false))
}

/// Index of one cell: `(x, y)` or `(x, y, layer)`.
#[derive(Clone, Copy)]
struct Cell {
    words: [i32; 3],
    len: usize,
}

impl HashIndex for Cell {
    #[inline]
    fn word_count(&self) -> usize {
        self.len
    }

    #[inline]
    fn for_each_word<F: FnMut(u32)>(&self, f: F) {
        self.words[..self.len].for_each_word(f);
    }
}

fn fill_with<T, F>(cfg: &GridConfig, out: &mut [T], cell: F) -> Result<()>
where
    T: Send,
    F: Fn(Cell) -> T + Sync,
{
    cfg.validate(out.len())?;
    if out.is_empty() {
        return Ok(());
    }

    let tier = cfg.tier.effective();
    debug!(
        width = cfg.width,
        height = cfg.height,
        seed = cfg.seed,
        ?tier,
        "grid fill"
    );

    let fill_row = |row: usize, line: &mut [T]| {
        for (col, slot) in line.iter_mut().enumerate() {
            let [x, y] = cfg.coordinate(col, row);
            *slot = cell(match cfg.layer {
                Some(z) => Cell {
                    words: [x, y, z],
                    len: 3,
                },
                None => Cell {
                    words: [x, y, 0],
                    len: 2,
                },
            });
        }
    };

    match tier {
        ExecutionTier::Scalar => {
            for (row, line) in out.chunks_mut(cfg.width).enumerate() {
                fill_row(row, line);
            }
        }
        ExecutionTier::Parallel => {
            #[cfg(feature = "parallel")]
            {
                out.par_chunks_mut(cfg.width)
                    .enumerate()
                    .for_each(|(row, line)| fill_row(row, line));
            }
            #[cfg(not(feature = "parallel"))]
            {
                for (row, line) in out.chunks_mut(cfg.width).enumerate() {
                    fill_row(row, line);
                }
            }
        }
    }
    Ok(())
}
