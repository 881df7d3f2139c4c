//! Tour file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Writes tour ids separated by single spaces, without a trailing newline.
///
/// # Examples
///
/// ```
/// use u_tsp::tsplib::write_tour;
///
/// let mut out = Vec::new();
/// write_tour(&mut out, &[1, 3, 2]).unwrap();
/// assert_eq!(out, b"1 3 2");
/// ```
pub fn write_tour<W: Write>(mut writer: W, ids: &[i64]) -> Result<()> {
    for (k, id) in ids.iter().enumerate() {
        if k > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{id}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the tour ids into it.
pub fn write_tour_path(path: impl AsRef<Path>, ids: &[i64]) -> Result<()> {
    let file = File::create(path)?;
    write_tour(BufWriter::new(file), ids)
}
