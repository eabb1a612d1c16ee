//! # munsell-math
//!
//! Math primitives for sampling and placing the Munsell solid.
//!
//! - [`masked_mul`], [`masked_sum`] - weighting that ignores undefined cells
//!   carrying zero weight
//! - [`AxisSplit`], [`corner_weights`] - trilinear cell decomposition
//! - [`hue_angle`], [`polar_to_cartesian`] - cylinder coordinates
//! - [`quantize_rgb8`], [`hex_rgb8`] - 8-bit output
//!
//! # Masked Arithmetic
//!
//! Plain float math gives `0.0 * NaN == NaN`. Sampling exactly on a grid
//! point next to an out-of-gamut cell would then fail. Undefined cells are
//! modelled as `None` and folded with [`masked_mul`], where a weight of
//! exactly zero always yields zero:
//!
//! ```rust
//! use munsell_math::masked_mul;
//!
//! assert_eq!(masked_mul(0.0, None), Some(0.0));
//! assert_eq!(masked_mul(0.5, None), None);
//! assert_eq!(masked_mul(0.5, Some(0.8)), Some(0.4));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Vector math for placement
//! - [`munsell-core`] - Axis constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod polar;
mod quantize;

pub use interp::*;
pub use polar::*;
pub use quantize::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{EulerRot, Mat4, Quat, Vec3};
}
