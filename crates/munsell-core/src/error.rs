//! Error types for table construction and lookup.
//!
//! Two failure classes exist:
//!
//! - [`MunsellError::MalformedTable`] - the data asset is structurally invalid.
//!   Raised once at startup and not recoverable.
//! - [`MunsellError::IndexOutOfRange`] - a value or chroma index outside the
//!   table. This is caller misuse; grid traversals control their own bounds.
//!
//! Sampling outside the gamut is *not* an error. It is reported as `None` by
//! the sampler.

use crate::Axis;
use thiserror::Error;

/// Result type alias using [`MunsellError`].
pub type MunsellResult<T> = Result<T, MunsellError>;

/// Errors raised by the color table and its loaders.
#[derive(Debug, Error)]
pub enum MunsellError {
    /// The supplied table is structurally invalid.
    ///
    /// Ragged rows, empty axes, wrong fixed cardinalities, or a defined entry
    /// with a non-finite channel.
    #[error("malformed table: {reason}")]
    MalformedTable {
        /// What is wrong with the data.
        reason: String,
    },

    /// A value or chroma index falls outside the table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use munsell_core::{Axis, MunsellError};
    ///
    /// let err = MunsellError::IndexOutOfRange { axis: Axis::Value, index: 15, len: 15 };
    /// assert_eq!(err.to_string(), "value index 15 out of range 0..15");
    /// ```
    #[error("{axis} index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// Axis that was indexed.
        axis: Axis,
        /// Offending index.
        index: i64,
        /// Cardinality of the axis.
        len: usize,
    },

    /// A continuous coordinate contains NaN or infinity.
    #[error("non-finite coordinate ({i}, {j}, {k})")]
    NonFiniteCoordinate {
        /// Hue coordinate.
        i: f32,
        /// Value coordinate.
        j: f32,
        /// Chroma coordinate.
        k: f32,
    },

    /// I/O error reading or writing a table asset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error in a table asset.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MunsellError {
    /// Shorthand for [`MunsellError::MalformedTable`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }
}
