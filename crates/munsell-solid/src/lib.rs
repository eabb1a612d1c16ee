//! # munsell-solid
//!
//! Turns a [`ColorTable`](munsell_core::ColorTable) into renderable instances.
//!
//! - [`place`] / [`PlacementConfig`] - integer cell to position, rotation, scale
//! - [`build_solid`] - every in-gamut cell with its color and placement
//! - [`SolidConfig`] - YAML deployment config (table path, placement)
//!
//! # Usage
//!
//! ```rust
//! use munsell_core::ColorTable;
//! use munsell_solid::{build_solid, PlacementConfig};
//!
//! let table = ColorTable::from_fn(3, |_, j, k| (k <= j % 3).then(|| [j as f32 / 14.0; 3])).unwrap();
//! let instances = build_solid(&table, &PlacementConfig::default()).unwrap();
//!
//! for inst in &instances {
//!     let _matrix = inst.placement.matrix();
//!     let _rgb = inst.color;
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Vectors and transform matrices
//! - [`rayon`] - Parallel hue slices
//! - [`serde_yaml`] - Config files

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod placement;
mod solid;

pub use config::SolidConfig;
pub use error::{SolidError, SolidResult};
pub use placement::{place, Placement, PlacementConfig};
pub use solid::{build_solid, Instance};
