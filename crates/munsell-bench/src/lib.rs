//! Shared fixtures for munsell-rs benchmarks.

use munsell_core::{ColorTable, HUE_STEPS, VALUE_STEPS};

/// Synthetic table with a ragged gamut edge, shaped like the 26-step asset.
pub fn synthetic_table(chroma_steps: usize) -> ColorTable {
    ColorTable::from_fn(chroma_steps, |i, j, k| {
        let edge = 2 + (j * (VALUE_STEPS - 1 - j)) / 3 + (i * 3) % 4;
        (k < edge).then(|| {
            let h = i as f32 / HUE_STEPS as f32;
            let v = j as f32 / (VALUE_STEPS - 1) as f32;
            [v, v * (1.0 - h), h]
        })
    })
    .expect("synthetic table is well-formed")
}
