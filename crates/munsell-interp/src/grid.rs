//! Parallel batch sampling.
//!
//! Every sample is independent, so batches are split across rayon's pool
//! with no synchronization beyond the shared read-only table.

use crate::sample;
use munsell_core::{ColorTable, MunsellResult, Rgb, HUE_STEPS, VALUE_STEPS};
use rayon::prelude::*;
use tracing::debug;

/// One point of a resampled grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    /// Continuous (hue, value, chroma) coordinate.
    pub coord: [f32; 3],
    /// Sampled color, `None` outside the gamut.
    pub color: Option<Rgb>,
}

/// Samples a list of coordinates in parallel.
///
/// Results keep the input order. The first lookup error aborts the batch.
pub fn sample_many(table: &ColorTable, coords: &[[f32; 3]]) -> MunsellResult<Vec<Option<Rgb>>> {
    coords
        .par_iter()
        .map(|&[i, j, k]| sample(table, i, j, k))
        .collect()
}

/// Resamples the whole solid on a regular grid.
///
/// Each axis is subdivided into `steps` points per unit (minimum 1). Hue
/// covers `[0, 40)`; value and chroma cover their full closed range up to
/// the last table step. Output is ordered hue-major, chroma fastest.
///
/// # Example
///
/// ```rust
/// use munsell_core::ColorTable;
/// use munsell_interp::sample_grid;
///
/// let table = ColorTable::from_fn(2, |_, _, _| Some([0.5; 3])).unwrap();
/// let grid = sample_grid(&table, 2).unwrap();
/// assert_eq!(grid.len(), 80 * 29 * 3);
/// ```
pub fn sample_grid(table: &ColorTable, steps: usize) -> MunsellResult<Vec<GridSample>> {
    let steps = steps.max(1);
    let scale = steps as f32;
    let hue_n = HUE_STEPS * steps;
    let value_n = (VALUE_STEPS - 1) * steps + 1;
    let chroma_n = (table.chroma_steps() - 1) * steps + 1;
    debug!(steps, hue_n, value_n, chroma_n, "Resampling solid");

    let slices: Vec<Vec<GridSample>> = (0..hue_n)
        .into_par_iter()
        .map(|hi| -> MunsellResult<Vec<GridSample>> {
            let i = hi as f32 / scale;
            let mut slice = Vec::with_capacity(value_n * chroma_n);
            for vi in 0..value_n {
                let j = vi as f32 / scale;
                for ci in 0..chroma_n {
                    let k = ci as f32 / scale;
                    slice.push(GridSample {
                        coord: [i, j, k],
                        color: sample(table, i, j, k)?,
                    });
                }
            }
            Ok(slice)
        })
        .collect::<MunsellResult<_>>()?;

    Ok(slices.into_iter().flatten().collect())
}
