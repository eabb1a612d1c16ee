//! Dense (hue, value, chroma) color table.
//!
//! A [`ColorTable`] stores one [`Entry`] per integer grid cell. Entries are
//! either a defined RGB triple or `None` for cells outside the physical
//! Munsell gamut. The chroma at which entries turn `None` differs per
//! (hue, value) slice and comes from the data asset.
//!
//! # Structure
//!
//! - `40 * 15 * chroma_steps` entries
//! - Stored hue-major: chroma varies fastest, then value, then hue
//! - Immutable once built; share it freely across threads
//!
//! # Example
//!
//! ```rust
//! use munsell_core::ColorTable;
//!
//! // Neutral grays at chroma 0, nothing beyond
//! let table = ColorTable::from_fn(2, |_, v, c| {
//!     (c == 0).then(|| [v as f32 / 14.0; 3])
//! }).unwrap();
//!
//! assert_eq!(table.get(-1, 14, 0).unwrap(), Some([1.0, 1.0, 1.0]));
//! assert_eq!(table.get(3, 7, 1).unwrap(), None);
//! assert!(table.get(0, 15, 0).is_err());
//! ```

use crate::{Axis, MunsellError, MunsellResult, HUE_STEPS, VALUE_STEPS, wrap_hue};
use tracing::debug;

/// Three linear color channels. Not necessarily within [0, 1].
pub type Rgb = [f32; 3];

/// A table cell: a defined color, or `None` outside the gamut.
pub type Entry = Option<Rgb>;

/// Immutable lookup table over the Munsell grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    data: Vec<Entry>,
    chroma_steps: usize,
}

impl ColorTable {
    /// Builds a table from hue-major flat data.
    ///
    /// `data` must hold exactly `40 * 15 * chroma_steps` entries, ordered
    /// with chroma fastest.
    pub fn from_flat(chroma_steps: usize, data: Vec<Entry>) -> MunsellResult<Self> {
        if chroma_steps == 0 {
            return Err(MunsellError::malformed("chroma axis is empty"));
        }
        let expected = HUE_STEPS * VALUE_STEPS * chroma_steps;
        if data.len() != expected {
            return Err(MunsellError::malformed(format!(
                "expected {} entries for chroma size {}, got {}",
                expected,
                chroma_steps,
                data.len()
            )));
        }
        if let Some(pos) = data
            .iter()
            .position(|e| e.is_some_and(|rgb| rgb.iter().any(|c| !c.is_finite())))
        {
            let (i, j, k) = unflatten(pos, chroma_steps);
            return Err(MunsellError::malformed(format!(
                "entry ({}, {}, {}) has a non-finite channel",
                i, j, k
            )));
        }

        let table = Self { data, chroma_steps };
        debug!(
            chroma_steps,
            defined = table.defined_count(),
            "Built color table"
        );
        Ok(table)
    }

    /// Builds a table from a nested `[hue][value][chroma]` structure.
    ///
    /// The hue axis must have 40 slices and every hue must have 15 value
    /// rows. All chroma rows must share one non-zero length.
    pub fn from_nested(nested: Vec<Vec<Vec<Entry>>>) -> MunsellResult<Self> {
        if nested.is_empty() {
            return Err(MunsellError::malformed("hue axis is empty"));
        }
        if nested.len() != HUE_STEPS {
            return Err(MunsellError::malformed(format!(
                "expected {} hue slices, got {}",
                HUE_STEPS,
                nested.len()
            )));
        }

        let chroma_steps = nested
            .first()
            .and_then(|rows| rows.first())
            .map(Vec::len)
            .unwrap_or(0);
        let mut data = Vec::with_capacity(HUE_STEPS * VALUE_STEPS * chroma_steps);

        for (i, rows) in nested.into_iter().enumerate() {
            if rows.len() != VALUE_STEPS {
                return Err(MunsellError::malformed(format!(
                    "hue {} has {} value rows, expected {}",
                    i,
                    rows.len(),
                    VALUE_STEPS
                )));
            }
            for (j, row) in rows.into_iter().enumerate() {
                if row.len() != chroma_steps {
                    return Err(MunsellError::malformed(format!(
                        "row ({}, {}) has {} chroma entries, expected {}",
                        i,
                        j,
                        row.len(),
                        chroma_steps
                    )));
                }
                data.extend(row);
            }
        }

        Self::from_flat(chroma_steps, data)
    }

    /// Builds a table by evaluating `f(hue, value, chroma)` for every cell.
    pub fn from_fn<F>(chroma_steps: usize, mut f: F) -> MunsellResult<Self>
    where
        F: FnMut(usize, usize, usize) -> Entry,
    {
        let mut data = Vec::with_capacity(HUE_STEPS * VALUE_STEPS * chroma_steps);
        for i in 0..HUE_STEPS {
            for j in 0..VALUE_STEPS {
                for k in 0..chroma_steps {
                    data.push(f(i, j, k));
                }
            }
        }
        Self::from_flat(chroma_steps, data)
    }

    /// Number of chroma steps in this table.
    #[inline]
    pub fn chroma_steps(&self) -> usize {
        self.chroma_steps
    }

    /// Grid dimensions as `(hue, value, chroma)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (HUE_STEPS, VALUE_STEPS, self.chroma_steps)
    }

    /// Cardinality of one axis.
    pub fn len_of(&self, axis: Axis) -> usize {
        match axis {
            Axis::Hue => HUE_STEPS,
            Axis::Value => VALUE_STEPS,
            Axis::Chroma => self.chroma_steps,
        }
    }

    /// Looks up the entry at an integer grid cell.
    ///
    /// `i` wraps modulo 40. `j` and `k` must lie within the value and chroma
    /// ranges, otherwise [`MunsellError::IndexOutOfRange`] is returned.
    #[inline]
    pub fn get(&self, i: i64, j: i64, k: i64) -> MunsellResult<Entry> {
        let j = self.check(Axis::Value, j)?;
        let k = self.check(Axis::Chroma, k)?;
        Ok(self.data[self.index(wrap_hue(i), j, k)])
    }

    /// Returns the chroma row of a (hue, value) slice.
    pub fn row(&self, i: i64, j: i64) -> MunsellResult<&[Entry]> {
        let j = self.check(Axis::Value, j)?;
        let start = self.index(wrap_hue(i), j, 0);
        Ok(&self.data[start..start + self.chroma_steps])
    }

    /// First undefined chroma index in a (hue, value) slice.
    ///
    /// Returns `chroma_steps` when the whole row is defined.
    pub fn gamut_edge(&self, i: i64, j: i64) -> MunsellResult<usize> {
        let row = self.row(i, j)?;
        Ok(row.iter().position(Option::is_none).unwrap_or(row.len()))
    }

    /// Number of defined (in-gamut) entries.
    pub fn defined_count(&self) -> usize {
        self.data.iter().filter(|e| e.is_some()).count()
    }

    /// All entries in hue-major order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.data
    }

    /// Converts back into a nested `[hue][value][chroma]` structure.
    pub fn to_nested(&self) -> Vec<Vec<Vec<Entry>>> {
        self.data
            .chunks(VALUE_STEPS * self.chroma_steps)
            .map(|slice| slice.chunks(self.chroma_steps).map(<[Entry]>::to_vec).collect())
            .collect()
    }

    #[inline]
    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * VALUE_STEPS + j) * self.chroma_steps + k
    }

    #[inline]
    fn check(&self, axis: Axis, index: i64) -> MunsellResult<usize> {
        let len = self.len_of(axis);
        if index < 0 || index as usize >= len {
            return Err(MunsellError::IndexOutOfRange { axis, index, len });
        }
        Ok(index as usize)
    }
}

fn unflatten(pos: usize, chroma_steps: usize) -> (usize, usize, usize) {
    let k = pos % chroma_steps;
    let rest = pos / chroma_steps;
    (rest / VALUE_STEPS, rest % VALUE_STEPS, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(chroma_steps: usize) -> ColorTable {
        ColorTable::from_fn(chroma_steps, |i, j, k| {
            (k <= j).then(|| [i as f32 / 40.0, j as f32 / 14.0, k as f32])
        })
        .unwrap()
    }

    #[test]
    fn test_get_wraps_hue() {
        let table = gradient(13);
        assert_eq!(table.get(40, 3, 1).unwrap(), table.get(0, 3, 1).unwrap());
        assert_eq!(table.get(-1, 3, 1).unwrap(), table.get(39, 3, 1).unwrap());
        assert_eq!(table.get(-81, 3, 1).unwrap(), table.get(39, 3, 1).unwrap());
    }

    #[test]
    fn test_get_rejects_value_and_chroma() {
        let table = gradient(13);
        assert!(matches!(
            table.get(0, -1, 0),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Value, index: -1, len: 15 })
        ));
        assert!(matches!(
            table.get(0, 15, 0),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Value, .. })
        ));
        assert!(matches!(
            table.get(0, 0, 13),
            Err(MunsellError::IndexOutOfRange { axis: Axis::Chroma, index: 13, len: 13 })
        ));
    }

    #[test]
    fn test_layout() {
        let table = gradient(26);
        assert_eq!(table.dims(), (40, 15, 26));
        assert_eq!(table.get(5, 10, 3).unwrap(), Some([5.0 / 40.0, 10.0 / 14.0, 3.0]));
        assert_eq!(table.get(5, 2, 3).unwrap(), None);
    }

    #[test]
    fn test_gamut_edge() {
        let table = gradient(13);
        assert_eq!(table.gamut_edge(0, 0).unwrap(), 1);
        assert_eq!(table.gamut_edge(7, 4).unwrap(), 5);
        assert_eq!(table.gamut_edge(7, 14).unwrap(), 13);
        assert!(table.gamut_edge(0, 15).is_err());
    }

    #[test]
    fn test_defined_count() {
        let table = ColorTable::from_fn(2, |_, _, k| (k == 0).then_some([0.5; 3])).unwrap();
        assert_eq!(table.defined_count(), 40 * 15);
    }

    #[test]
    fn test_nested_roundtrip() {
        let table = gradient(4);
        let rebuilt = ColorTable::from_nested(table.to_nested()).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_from_flat_wrong_len() {
        let err = ColorTable::from_flat(2, vec![None; 10]).unwrap_err();
        assert!(matches!(err, MunsellError::MalformedTable { .. }));
    }

    #[test]
    fn test_zero_chroma_rejected() {
        assert!(ColorTable::from_flat(0, Vec::new()).is_err());
        let nested = vec![vec![Vec::new(); VALUE_STEPS]; HUE_STEPS];
        assert!(ColorTable::from_nested(nested).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let mut nested = gradient(3).to_nested();
        nested[12][4].pop();
        let err = ColorTable::from_nested(nested).unwrap_err();
        assert!(err.to_string().contains("row (12, 4)"));
    }

    #[test]
    fn test_wrong_hue_count_rejected() {
        let mut nested = gradient(3).to_nested();
        nested.pop();
        assert!(ColorTable::from_nested(nested).is_err());
        assert!(ColorTable::from_nested(Vec::new()).is_err());
    }

    #[test]
    fn test_wrong_value_count_rejected() {
        let mut nested = gradient(3).to_nested();
        nested[0].push(vec![None; 3]);
        assert!(ColorTable::from_nested(nested).is_err());
    }

    #[test]
    fn test_non_finite_entry_rejected() {
        let err = ColorTable::from_fn(2, |i, j, k| {
            if (i, j, k) == (3, 4, 1) {
                Some([0.0, f32::NAN, 0.0])
            } else {
                Some([0.0; 3])
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("(3, 4, 1)"));
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorTable>();
    }
}
