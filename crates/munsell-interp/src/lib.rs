//! # munsell-interp
//!
//! Continuous sampling of a [`ColorTable`](munsell_core::ColorTable).
//!
//! [`sample`] evaluates a real (hue, value, chroma) coordinate by trilinear
//! interpolation over the eight enclosing grid cells:
//!
//! - hue wraps, so `sample(39.5, ..)` blends hue 39 with hue 0
//! - corners carrying zero weight never contribute, even when undefined
//! - any undefined corner with non-zero weight makes the result `None`
//!
//! `None` means "no physically realizable color here". It is an expected
//! outcome and callers usually skip the point.
//!
//! # Usage
//!
//! ```rust
//! use munsell_core::ColorTable;
//! use munsell_interp::sample;
//!
//! let table = ColorTable::from_fn(2, |_, _, k| (k == 0).then_some([0.5; 3])).unwrap();
//!
//! assert_eq!(sample(&table, 0.0, 0.0, 0.0).unwrap(), Some([0.5; 3]));
//! assert_eq!(sample(&table, 0.0, 0.0, 0.5).unwrap(), None);
//! ```
//!
//! # Parallelism
//!
//! Sampling is pure. [`sample_many`] and [`sample_grid`] fan out over
//! [`rayon`]'s global pool.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod grid;
mod sampler;

pub use grid::{sample_grid, sample_many, GridSample};
pub use sampler::sample;
