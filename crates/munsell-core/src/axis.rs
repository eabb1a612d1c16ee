//! Grid axes of the Munsell solid.
//!
//! Hue is cyclic and always wraps modulo [`HUE_STEPS`]. Value and chroma are
//! linear: an index outside their range is a caller error, never a wrap.

use std::fmt;

/// Number of hue steps around the solid (2.5 Munsell hue units per step).
pub const HUE_STEPS: usize = 40;

/// Number of value (lightness) steps, 0 through 14.
pub const VALUE_STEPS: usize = 15;

/// One of the three table axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Hue angle. Cyclic.
    Hue,
    /// Perceptual lightness.
    Value,
    /// Colorfulness. Cardinality depends on the data asset.
    Chroma,
}

impl Axis {
    /// All axes in table index order.
    pub const ALL: [Axis; 3] = [Axis::Hue, Axis::Value, Axis::Chroma];

    /// Returns true if indices on this axis wrap around.
    #[inline]
    pub const fn is_cyclic(self) -> bool {
        matches!(self, Axis::Hue)
    }

    /// Lowercase axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Hue => "hue",
            Axis::Value => "value",
            Axis::Chroma => "chroma",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalizes a hue index into `0..HUE_STEPS`.
///
/// ```rust
/// use munsell_core::wrap_hue;
///
/// assert_eq!(wrap_hue(40), 0);
/// assert_eq!(wrap_hue(-1), 39);
/// ```
#[inline]
pub fn wrap_hue(i: i64) -> usize {
    i.rem_euclid(HUE_STEPS as i64) as usize
}
