//! # hashrng
//!
//! Stateless, random-access pseudo-random values for procedural generation.
//!
//! Every value is a pure function of an index (a run of 32-bit words, or up
//! to four integer coordinates) and a seed. There is no generator object and
//! no call-order dependence: the value at `(130, 23)` is the same whether it
//! is computed first, last, or on another thread.
//!
//! Not cryptographically secure.
//!
//! ## Quick Start
//!
//! ```
//! use hashrng::prelude::*;
//!
//! let seed = 0;
//!
//! // Raw 32-bit hash of a 2-D position.
//! let raw = hash_2d_uint(130, 23, seed);
//! assert_eq!(raw, 977_346_410);
//!
//! // Unbiased closed ranges (no `% 10`).
//! let digit = hash_2d_int_in_range(130, 23, seed, 0, 9)?;
//! assert!((0..=9).contains(&digit));
//!
//! // Evenly spaced floats and chance rolls.
//! let height = hash_3d_zero_to_one(4, 8, 15, seed);
//! assert!((0.0..=1.0).contains(&height));
//! let tree_here = chance_2d(16, 23, seed, 0.3)?;
//! # let _ = tree_here;
//!
//! // Any word data works as an index.
//! let placement = [1.5f32, -0.25, 32.5];
//! let jitter = hash_neg_one_to_one(&placement, 234_234);
//! assert!((-1.0..=1.0).contains(&jitter));
//! # Ok::<(), hashrng::HashRngError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support, grid fills and statistics
//! - `serde` (default): Enable serialization/deserialization
//! - `parallel`: Split grid fills across threads via rayon
//! - `bytemuck`: Hash any `Pod` value through [`index::ByteIndex::of`]
//! - `portable-clz`: Use the software leading-zero count
//! - `cli`: Build the `hashrng` command line tool
//!
//! ## no_std Support
//!
//! Disable default features for `no_std` environments:
//! ```toml
//! hashrng = { version = "0.1", default-features = false }
//! ```
//!
//! ## Modules
//!
//! - [`mixer`]: Index + seed to a raw 32-bit value
//! - [`bounded`]: Unbiased values below an upper bound
//! - [`sample`]: Closed ranges, evenly spaced floats, chance
//! - [`dimensional`]: 1-4 coordinate entry points
//! - [`grid`]: Bulk fills over 2-D grids
//! - [`stats`]: Uniformity surveys

// no_std support
#![cfg_attr(not(feature = "std"), no_std)]

#[path = "core/error.rs"]
pub mod error;

#[path = "core/bits.rs"]
pub mod bits;

#[path = "core/index.rs"]
pub mod index;

#[path = "core/mixer.rs"]
pub mod mixer;

#[path = "core/bounded.rs"]
pub mod bounded;

#[path = "core/sample.rs"]
pub mod sample;

#[path = "core/dimensional.rs"]
pub mod dimensional;

#[cfg(feature = "std")]
#[path = "core/grid.rs"]
pub mod grid;

#[cfg(feature = "std")]
#[path = "core/stats.rs"]
pub mod stats;

pub use error::{HashRngError, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use hashrng::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounded::hash_uint_under_limit;
    pub use crate::dimensional::*;
    pub use crate::error::{HashRngError, Result};
    pub use crate::index::{ByteIndex, HashIndex};
    pub use crate::mixer::{hash_bytes, hash_uint};
    pub use crate::sample::{
        chance, hash_int_in_range, hash_neg_one_to_one, hash_uint_in_range, hash_zero_to_one,
    };
    #[cfg(feature = "std")]
    pub use crate::grid::{ExecutionTier, GridConfig};
}
