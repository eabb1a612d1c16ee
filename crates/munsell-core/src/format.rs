//! JSON table asset format.
//!
//! A table is stored as a nested array indexed `[hue][value][chroma]`.
//! Each leaf is either an `[r, g, b]` triple or `null` for a cell outside
//! the gamut:
//!
//! ```text
//! [                       // 40 hues
//!   [                     // 15 values
//!     [[0.1, 0.1, 0.1], [0.12, 0.09, 0.1], null, ...],
//!     ...
//!   ],
//!   ...
//! ]
//! ```
//!
//! Parsing checks only JSON syntax and leaf shape. Dimensions are validated by
//! [`ColorTable::from_nested`].

use crate::{ColorTable, Entry, MunsellResult};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

type Nested = Vec<Vec<Vec<Entry>>>;

/// Reads a table asset from a file.
pub fn read_json<P: AsRef<Path>>(path: P) -> MunsellResult<ColorTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading color table");
    let reader = BufReader::new(fs::File::open(path)?);
    let nested: Nested = serde_json::from_reader(reader)?;
    ColorTable::from_nested(nested)
}

/// Parses a table asset from a string.
pub fn parse_json(json: &str) -> MunsellResult<ColorTable> {
    let nested: Nested = serde_json::from_str(json)?;
    ColorTable::from_nested(nested)
}

/// Serializes a table to a JSON string.
pub fn to_json_string(table: &ColorTable) -> MunsellResult<String> {
    Ok(serde_json::to_string(&table.to_nested())?)
}

/// Writes a table asset to a file.
pub fn write_json<P: AsRef<Path>>(path: P, table: &ColorTable) -> MunsellResult<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer(&mut writer, &table.to_nested())?;
    writer.flush()?;
    Ok(())
}
