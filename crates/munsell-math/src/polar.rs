//! Cylinder coordinates for the Munsell solid.
//!
//! Hue maps to an angle around the vertical axis, chroma to a radius and
//! value to height.

use glam::Vec3;
use munsell_core::HUE_STEPS;
use std::f32::consts::TAU;

/// Angle in radians of a hue index: `2π·i / 40`.
#[inline]
pub fn hue_angle(i: f32) -> f32 {
    TAU * i / HUE_STEPS as f32
}

/// Converts (angle, radius, height) to a Y-up Cartesian point.
///
/// ```rust
/// use munsell_math::polar_to_cartesian;
///
/// let p = polar_to_cartesian(0.0, 2.0, 5.0);
/// assert_eq!(p.to_array(), [2.0, 5.0, 0.0]);
/// ```
#[inline]
pub fn polar_to_cartesian(angle: f32, radius: f32, height: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos * radius, height, sin * radius)
}
