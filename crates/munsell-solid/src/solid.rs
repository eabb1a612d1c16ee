//! Instance list for rendering the solid.
//!
//! Sweeps every integer cell, drops cells with no color and pairs the rest
//! with their placement. Renderers feed the result straight into an
//! instanced mesh.

use crate::{Placement, PlacementConfig, SolidResult};
use munsell_core::{ColorTable, Rgb, HUE_STEPS, VALUE_STEPS};
use munsell_interp::sample;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One renderable cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instance {
    /// Grid cell as (hue, value, chroma).
    pub index: [usize; 3],
    /// Sampled color, clamped to [0, 1].
    pub color: Rgb,
    /// Render-space transform.
    pub placement: Placement,
}

/// Builds the instance list for every in-gamut cell of the table.
///
/// Hue slices are sampled in parallel. The result is ordered hue-major with
/// chroma fastest, independent of thread count.
pub fn build_solid(table: &ColorTable, config: &PlacementConfig) -> SolidResult<Vec<Instance>> {
    let chroma_steps = table.chroma_steps();

    let slices: Vec<Vec<Instance>> = (0..HUE_STEPS)
        .into_par_iter()
        .map(|i| -> SolidResult<Vec<Instance>> {
            let mut slice = Vec::new();
            for j in 0..VALUE_STEPS {
                for k in 0..chroma_steps {
                    let Some(color) = sample(table, i as f32, j as f32, k as f32)? else {
                        continue;
                    };
                    slice.push(Instance {
                        index: [i, j, k],
                        color,
                        placement: config.place(i as i64, j as i64, k as i64),
                    });
                }
            }
            Ok(slice)
        })
        .collect::<SolidResult<_>>()?;

    let instances: Vec<Instance> = slices.into_iter().flatten().collect();
    debug!(
        instances = instances.len(),
        cells = HUE_STEPS * VALUE_STEPS * chroma_steps,
        "Built solid"
    );
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ColorTable {
        ColorTable::from_fn(4, |i, j, k| {
            (k <= (i + j) % 4).then(|| [j as f32 / 14.0, k as f32 / 3.0, 1.5])
        })
        .unwrap()
    }

    #[test]
    fn test_only_defined_cells() {
        let table = table();
        let instances = build_solid(&table, &PlacementConfig::default()).unwrap();
        assert_eq!(instances.len(), table.defined_count());
        for inst in &instances {
            let [i, j, k] = inst.index;
            assert!(table.get(i as i64, j as i64, k as i64).unwrap().is_some());
        }
    }

    #[test]
    fn test_colors_are_clamped() {
        let instances = build_solid(&table(), &PlacementConfig::default()).unwrap();
        assert!(instances.iter().all(|inst| inst.color[2] == 1.0));
    }

    #[test]
    fn test_order_is_hue_major() {
        let instances = build_solid(&table(), &PlacementConfig::default()).unwrap();
        assert!(instances.windows(2).all(|w| w[0].index < w[1].index));
        assert_eq!(instances[0].index, [0, 0, 0]);
    }

    #[test]
    fn test_placement_matches_place() {
        let cfg = PlacementConfig::default();
        let instances = build_solid(&table(), &cfg).unwrap();
        let inst = instances.iter().find(|inst| inst.index == [5, 2, 3]).unwrap();
        assert_eq!(inst.placement, cfg.place(5, 2, 3));
    }
}
