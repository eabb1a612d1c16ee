//! Interpolation weights and masked accumulation.
//!
//! A continuous coordinate on one axis is split into a floor index and a
//! fraction ([`AxisSplit`]). Three splits give the eight trilinear corner
//! weights ([`corner_weights`]), which always sum to 1.
//!
//! # Usage
//!
//! ```rust
//! use munsell_math::{AxisSplit, corner_weights, masked_sum};
//!
//! let i = AxisSplit::new(2.25);
//! let j = AxisSplit::new(0.0);
//! let k = AxisSplit::new(0.0);
//! let w = corner_weights(i, j, k);
//! assert_eq!(w[0], 0.75);
//! assert_eq!(w[1], 0.25);
//!
//! // Only two corners carry weight; undefined ones elsewhere are ignored.
//! let values = [Some(1.0), Some(0.0), None, None, None, None, None, None];
//! let sum = masked_sum(w.iter().copied().zip(values));
//! assert_eq!(sum, Some(0.75));
//! ```

/// Multiplies a weight by a possibly undefined value.
///
/// A weight of exactly zero yields `Some(0.0)` whatever the value. A non-zero
/// weight on an undefined value yields `None`.
#[inline]
pub fn masked_mul(weight: f32, value: Option<f32>) -> Option<f32> {
    if weight == 0.0 {
        return Some(0.0);
    }
    value.map(|v| weight * v)
}

/// Sums `(weight, value)` terms with [`masked_mul`].
///
/// Returns `None` as soon as any term with non-zero weight is undefined.
#[inline]
pub fn masked_sum<I>(terms: I) -> Option<f32>
where
    I: IntoIterator<Item = (f32, Option<f32>)>,
{
    terms
        .into_iter()
        .try_fold(0.0f32, |acc, (w, v)| Some(acc + masked_mul(w, v)?))
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Clamps every channel of a triple to [0, 1].
#[inline]
pub fn saturate3(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(saturate)
}

/// A continuous axis coordinate split into floor index and fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSplit {
    /// `floor(x)`.
    pub lo: i64,
    /// `x - floor(x)`, in [0, 1).
    pub frac: f32,
}

impl AxisSplit {
    /// Splits `x` into floor and fraction.
    ///
    /// `x` must be finite.
    #[inline]
    pub fn new(x: f32) -> Self {
        let lo = x.floor();
        Self {
            lo: lo as i64,
            frac: x - lo,
        }
    }

    /// Index of the upper neighbour on a linear axis.
    #[inline]
    pub fn hi(self) -> i64 {
        self.lo + 1
    }

    /// Weights of the lower and upper neighbour: `[1 - frac, frac]`.
    #[inline]
    pub fn weights(self) -> [f32; 2] {
        [1.0 - self.frac, self.frac]
    }
}

/// Trilinear weights for the eight corners of a cell.
///
/// Corner `n` is upper on hue when bit 0 is set, upper on value for bit 1,
/// upper on chroma for bit 2.
#[inline]
pub fn corner_weights(i: AxisSplit, j: AxisSplit, k: AxisSplit) -> [f32; 8] {
    let [a0, a1] = i.weights();
    let [b0, b1] = j.weights();
    let [c0, c1] = k.weights();
    [
        a0 * b0 * c0,
        a1 * b0 * c0,
        a0 * b1 * c0,
        a1 * b1 * c0,
        a0 * b0 * c1,
        a1 * b0 * c1,
        a0 * b1 * c1,
        a1 * b1 * c1,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_masked_mul_zero_weight() {
        assert_eq!(masked_mul(0.0, None), Some(0.0));
        assert_eq!(masked_mul(-0.0, None), Some(0.0));
        assert_eq!(masked_mul(0.0, Some(7.0)), Some(0.0));
    }

    #[test]
    fn test_masked_mul_nonzero_weight() {
        assert_eq!(masked_mul(0.25, Some(2.0)), Some(0.5));
        assert_eq!(masked_mul(1e-30, None), None);
    }

    #[test]
    fn test_masked_sum() {
        assert_eq!(masked_sum([(0.5, Some(1.0)), (0.5, Some(0.0))]), Some(0.5));
        assert_eq!(masked_sum([(1.0, Some(1.0)), (0.0, None)]), Some(1.0));
        assert_eq!(masked_sum([(0.9, Some(1.0)), (0.1, None)]), None);
        assert_eq!(masked_sum(std::iter::empty()), Some(0.0));
    }

    #[test]
    fn test_split() {
        let s = AxisSplit::new(3.75);
        assert_eq!(s.lo, 3);
        assert_eq!(s.hi(), 4);
        assert_eq!(s.weights(), [0.25, 0.75]);

        let s = AxisSplit::new(-0.5);
        assert_eq!(s.lo, -1);
        assert_eq!(s.frac, 0.5);

        let s = AxisSplit::new(7.0);
        assert_eq!(s.lo, 7);
        assert_eq!(s.weights(), [1.0, 0.0]);
    }

    #[test]
    fn test_corner_weights_sum_to_one() {
        for &(x, y, z) in &[(0.3, 0.6, 0.9), (12.5, 3.25, 1.125), (39.9, 13.01, 0.5)] {
            let w = corner_weights(AxisSplit::new(x), AxisSplit::new(y), AxisSplit::new(z));
            assert!(w.iter().all(|&w| w >= 0.0));
            assert_relative_eq!(w.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_corner_weights_on_grid_point() {
        let w = corner_weights(AxisSplit::new(4.0), AxisSplit::new(2.0), AxisSplit::new(1.0));
        assert_eq!(w, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate3([-0.2, 0.4, 1.3]), [0.0, 0.4, 1.0]);
    }
}
