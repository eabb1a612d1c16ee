//! Cell placement in render space.
//!
//! Cells sit on a cylinder: hue is the angle (`2π·i/40`), chroma the radius
//! and value the height. Each element is turned about Y so its face points
//! away from the axis.

use glam::{EulerRot, Mat4, Quat, Vec3};
use munsell_math::{hue_angle, polar_to_cartesian};
use serde::{Deserialize, Serialize};

/// Position, Euler rotation (XYZ, radians) and scale of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Translation.
    pub position: Vec3,
    /// Euler angles applied in XYZ order.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Placement {
    /// Composes scale, rotation and translation into one transform.
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        let rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Spacing and sizing of placed cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    /// Radial distance per chroma step.
    pub radius_step: f32,
    /// Vertical distance per value step.
    pub value_step: f32,
    /// Uniform element scale.
    pub element_scale: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            radius_step: 0.75,
            value_step: 1.0,
            element_scale: 0.5,
        }
    }
}

impl PlacementConfig {
    /// Places the cell (hue, value, chroma).
    ///
    /// Any integers are accepted; hue need not be wrapped since the angle is
    /// periodic.
    pub fn place(&self, i: i64, j: i64, k: i64) -> Placement {
        let phi = hue_angle(i as f32);
        Placement {
            position: polar_to_cartesian(phi, k as f32 * self.radius_step, j as f32 * self.value_step),
            rotation: Vec3::new(0.0, -phi, 0.0),
            scale: Vec3::splat(self.element_scale),
        }
    }
}

/// Places a cell with the default spacing.
///
/// ```rust
/// use munsell_solid::place;
///
/// let p = place(0, 5, 4);
/// assert_eq!(p.position.to_array(), [3.0, 5.0, 0.0]);
/// assert_eq!(p.scale.to_array(), [0.5, 0.5, 0.5]);
/// ```
pub fn place(i: i64, j: i64, k: i64) -> Placement {
    PlacementConfig::default().place(i, j, k)
}
