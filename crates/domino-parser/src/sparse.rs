//! Sparse pixelmap file decoding.
//!
//! A pixelmap data file holds one `(index, value)` record per line, where
//! `index` is a 1-based flat position into the row-major PT grid. Cells a
//! file does not list stay at zero. Duplicate indices overwrite: the last
//! record for a position wins.

use pixmap_common::{PixelGrid, PixmapError, PixmapResult};
use std::path::Path;
use tracing::debug;

/// Decode a sparse pixelmap file into a dense `rows × cols` grid.
pub fn decode_sparse_grid(
    path: impl AsRef<Path>,
    rows: usize,
    cols: usize,
) -> PixmapResult<PixelGrid> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .map_err(|e| PixmapError::sparse(&name, format!("cannot read: {}", e)))?;
    decode_sparse_str(&text, rows, cols, &name)
}

/// Decode sparse record text into a dense grid. `name` labels errors.
pub fn decode_sparse_str(
    text: &str,
    rows: usize,
    cols: usize,
    name: &str,
) -> PixmapResult<PixelGrid> {
    let mut grid = PixelGrid::zeros(rows, cols);
    let cells = rows * cols;
    let mut records = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let index_field = fields.next();
        let value_field = fields.next();
        let (index_field, value_field) = match (index_field, value_field) {
            (Some(i), Some(v)) => (i, v),
            _ => {
                return Err(PixmapError::sparse(
                    name,
                    format!("record at line {} has fewer than two fields", line_no + 1),
                ))
            }
        };

        let index: usize = index_field.parse().map_err(|_| {
            PixmapError::sparse(
                name,
                format!("non-numeric index '{}' at line {}", index_field, line_no + 1),
            )
        })?;
        let value: f64 = value_field.parse().map_err(|_| {
            PixmapError::sparse(
                name,
                format!("non-numeric value '{}' at line {}", value_field, line_no + 1),
            )
        })?;

        if index < 1 || index > cells {
            return Err(PixmapError::sparse(
                name,
                format!(
                    "index {} at line {} outside [1, {}]",
                    index,
                    line_no + 1,
                    cells
                ),
            ));
        }

        // indices are 1-based in the file
        grid.set_flat(index - 1, value);
        records += 1;
    }

    debug!(file = name, records, cells, "decoded sparse pixelmap");
    Ok(grid)
}
