//! `pixinfo` metadata parsing.
//!
//! The `pixinfo` file is written by Domino with a fixed line layout; the
//! offsets below are a direct contract with that output format and must not
//! be rearranged.
//!
//! Line layout (0-based, every line trimmed of surrounding whitespace):
//! - Line 2: four floats `T_min T_max P_min P_max`
//! - Line 4: leading two integers = (temperature steps, pressure steps)
//! - Line 5: one integer `header_skip`, the number of header lines to skip
//!   before the bulk-composition block
//! - Line `7 + header_skip`: the bulk composition string
//! - Line `7 + header_skip - 1`: integer number of lines the composition
//!   block occupies
//! - Lines `7 + header_skip + composition lines` .. EOF: names of the
//!   calculated pixelmap files, one per line

use pixmap_common::{GridSpec, PixmapError, PixmapResult};
use std::path::Path;
use tracing::debug;

/// Line holding `T_min T_max P_min P_max`.
const PT_RANGE_LINE: usize = 2;
/// Line whose leading two integers are the grid step counts.
const GRID_STEPS_LINE: usize = 4;
/// Line holding the header-skip count.
const HEADER_SKIP_LINE: usize = 5;
/// The bulk composition sits at `BULK_BASE_OFFSET + header_skip`.
const BULK_BASE_OFFSET: usize = 7;

/// Parse a `pixinfo` file into a [`GridSpec`].
pub fn parse_pixinfo(path: impl AsRef<Path>) -> PixmapResult<GridSpec> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        PixmapError::metadata(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_pixinfo_str(&text)
}

/// Parse `pixinfo` contents into a [`GridSpec`].
pub fn parse_pixinfo_str(text: &str) -> PixmapResult<GridSpec> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.is_empty() {
        return Err(PixmapError::metadata("pixinfo is empty"));
    }

    // PT range: four whitespace-separated floats
    let range_fields = split_floats(line_at(&lines, PT_RANGE_LINE, "PT range")?)?;
    if range_fields.len() < 4 {
        return Err(PixmapError::metadata(format!(
            "PT range line has {} fields, expected 4",
            range_fields.len()
        )));
    }
    let temperature_range = (range_fields[0], range_fields[1]);
    let pressure_range = (range_fields[2], range_fields[3]);

    // Step counts: leading two integers of the grid line
    let steps_line = line_at(&lines, GRID_STEPS_LINE, "grid steps")?;
    let mut steps = steps_line.split_whitespace();
    let temperature_steps = parse_usize(steps.next(), "temperature steps")?;
    let pressure_steps = parse_usize(steps.next(), "pressure steps")?;

    // Header skip count, then the bulk composition at its computed offset
    let header_skip = parse_usize(
        Some(line_at(&lines, HEADER_SKIP_LINE, "header skip")?),
        "header skip",
    )?;
    let bulk_line = BULK_BASE_OFFSET + header_skip;
    let bulk_composition = line_at(&lines, bulk_line, "bulk composition")?.to_string();

    // The line just before the bulk composition counts the composition block
    let composition_lines = parse_usize(
        Some(line_at(&lines, bulk_line - 1, "composition line count")?),
        "composition line count",
    )?;

    // Everything after the composition block names a calculated pixelmap
    let files_start = bulk_line + composition_lines;
    let available_variable_files = lines
        .iter()
        .skip(files_start)
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();

    let spec = GridSpec {
        temperature_range,
        pressure_range,
        temperature_steps,
        pressure_steps,
        bulk_composition,
        available_variable_files,
    };
    debug!(
        t_steps = spec.temperature_steps,
        p_steps = spec.pressure_steps,
        files = spec.available_variable_files.len(),
        "parsed pixinfo"
    );
    Ok(spec)
}

fn line_at<'a>(lines: &[&'a str], index: usize, what: &str) -> PixmapResult<&'a str> {
    lines.get(index).copied().ok_or_else(|| {
        PixmapError::metadata(format!(
            "line {} ({}) is past end of file ({} lines)",
            index,
            what,
            lines.len()
        ))
    })
}

fn split_floats(line: &str) -> PixmapResult<Vec<f64>> {
    line.split_whitespace()
        .map(|f| {
            f.parse::<f64>()
                .map_err(|_| PixmapError::metadata(format!("non-numeric field '{}'", f)))
        })
        .collect()
}

fn parse_usize(field: Option<&str>, what: &str) -> PixmapResult<usize> {
    let field =
        field.ok_or_else(|| PixmapError::metadata(format!("missing {} field", what)))?;
    field.parse::<usize>().map_err(|_| {
        PixmapError::metadata(format!("non-numeric {} field '{}'", what, field))
    })
}
