//! Trilinear sampler.

use munsell_core::{ColorTable, Entry, MunsellError, MunsellResult, Rgb};
use munsell_math::{corner_weights, masked_sum, saturate, AxisSplit};
use tracing::trace;

/// Samples the table at a continuous (hue, value, chroma) coordinate.
///
/// Returns `Ok(None)` when an undefined cell carries non-zero weight, i.e.
/// the point lies outside the gamut. Defined results are clamped to [0, 1].
///
/// Hue may be any finite number and wraps modulo 40. Value and chroma are
/// not clamped: a corner with non-zero weight that falls outside the table
/// yields [`MunsellError::IndexOutOfRange`]. Corners with zero weight are
/// never looked up, so integer coordinates on the last value or chroma step
/// are valid.
///
/// # Example
///
/// ```rust
/// use munsell_core::ColorTable;
/// use munsell_interp::sample;
///
/// let table = ColorTable::from_fn(2, |i, _, _| Some([i as f32 / 40.0; 3])).unwrap();
///
/// // Between hue 39 and hue 0
/// let rgb = sample(&table, 39.5, 0.0, 0.0).unwrap().unwrap();
/// assert_eq!(rgb, [0.4875; 3]);
/// ```
pub fn sample(table: &ColorTable, i: f32, j: f32, k: f32) -> MunsellResult<Option<Rgb>> {
    if !(i.is_finite() && j.is_finite() && k.is_finite()) {
        return Err(MunsellError::NonFiniteCoordinate { i, j, k });
    }

    let (si, sj, sk) = (AxisSplit::new(i), AxisSplit::new(j), AxisSplit::new(k));
    let weights = corner_weights(si, sj, sk);

    let mut corners: [Entry; 8] = [None; 8];
    for (n, &w) in weights.iter().enumerate() {
        if w == 0.0 {
            continue;
        }
        // Upper hue index wraps inside the table lookup.
        let ci = if n & 1 == 0 { si.lo } else { si.hi() };
        let cj = if n & 2 == 0 { sj.lo } else { sj.hi() };
        let ck = if n & 4 == 0 { sk.lo } else { sk.hi() };
        corners[n] = table.get(ci, cj, ck)?;
    }

    let mut rgb = [0.0f32; 3];
    for (t, channel) in rgb.iter_mut().enumerate() {
        let terms = weights
            .iter()
            .zip(&corners)
            .map(|(&w, entry)| (w, entry.map(|c| c[t])));
        match masked_sum(terms) {
            Some(v) => *channel = saturate(v),
            None => {
                trace!(i, j, k, "outside gamut");
                return Ok(None);
            }
        }
    }
    Ok(Some(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use munsell_core::Axis;

    fn ramp() -> ColorTable {
        ColorTable::from_fn(4, |i, j, k| {
            Some([i as f32 / 64.0, j as f32 / 16.0, k as f32 / 4.0])
        })
        .unwrap()
    }

    #[test]
    fn test_midpoint_on_each_axis() {
        let table = ramp();
        assert_eq!(sample(&table, 2.5, 0.0, 0.0).unwrap(), Some([2.5 / 64.0, 0.0, 0.0]));
        assert_eq!(sample(&table, 0.0, 2.5, 0.0).unwrap(), Some([0.0, 2.5 / 16.0, 0.0]));
        assert_eq!(sample(&table, 0.0, 0.0, 2.5).unwrap(), Some([0.0, 0.0, 2.5 / 4.0]));
    }

    #[test]
    fn test_clamps_out_of_range_channels() {
        let table = ColorTable::from_fn(2, |_, _, _| Some([-0.25, 0.5, 1.75])).unwrap();
        assert_eq!(sample(&table, 1.25, 2.75, 0.5).unwrap(), Some([0.0, 0.5, 1.0]));
    }

    #[test]
    fn test_last_steps_are_valid_grid_points() {
        let table = ramp();
        let rgb = sample(&table, 0.0, 14.0, 3.0).unwrap();
        assert_eq!(rgb, Some([0.0, 14.0 / 16.0, 0.75]));
    }

    #[test]
    fn test_beyond_last_step_is_range_error() {
        let table = ramp();
        assert!(matches!(
            sample(&table, 0.0, 14.5, 0.0),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Value, index: 15, .. })
        ));
        assert!(matches!(
            sample(&table, 0.0, 0.0, 3.25),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Chroma, index: 4, .. })
        ));
        assert!(matches!(
            sample(&table, 0.0, -0.5, 0.0),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Value, index: -1, .. })
        ));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let table = ramp();
        assert!(matches!(
            sample(&table, f32::NAN, 0.0, 0.0),
            Err(MunsellError::NonFiniteCoordinate { .. })
        ));
        assert!(sample(&table, 0.0, f32::INFINITY, 0.0).is_err());
    }
}
