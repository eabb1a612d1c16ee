//! # munsell-core
//!
//! Core types for sampling the Munsell color solid.
//!
//! This crate provides the foundation every other `munsell-*` crate builds on:
//!
//! - [`Axis`] - The three grid axes and their cardinalities
//! - [`ColorTable`] - Immutable dense grid of colors and gamut markers
//! - [`MunsellError`] - Construction and lookup errors
//! - [`format`] - JSON reading and writing of table assets
//!
//! ## Grid
//!
//! The table is indexed by integer (hue, value, chroma) triples:
//!
//! ```text
//! hue     0..40   cyclic, 40 wraps to 0
//! value   0..15   linear
//! chroma  0..N    linear, N chosen by the data asset (13 or 26 in practice)
//! ```
//!
//! Cells outside the physically realizable gamut hold `None`.
//!
//! ## Crate Structure
//!
//! ```text
//! munsell-core (this crate)
//!    ^
//!    |
//!    +-- munsell-math (masked arithmetic, polar math)
//!    +-- munsell-interp (trilinear sampling)
//!    +-- munsell-solid (placement, solid building, config)
//!    +-- munsell-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod axis;
pub mod error;
pub mod format;
pub mod table;

pub use axis::{wrap_hue, Axis, HUE_STEPS, VALUE_STEPS};
pub use error::{MunsellError, MunsellResult};
pub use table::{ColorTable, Entry, Rgb};

/// Prelude module for convenient imports.
///
/// ```
/// use munsell_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{Axis, HUE_STEPS, VALUE_STEPS};
    pub use crate::error::{MunsellError, MunsellResult};
    pub use crate::table::{ColorTable, Entry, Rgb};
}
