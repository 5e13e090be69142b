//! Contour rendering: filled bands and marching-squares isolines.

use crate::gradient::{flip_rows, viridis_color, Color};
use pixmap_common::PixelGrid;

/// A point in 2D space (grid coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Generate `count` contour levels evenly spaced strictly inside
/// `(min_value, max_value)`.
pub fn generate_levels(min_value: f64, max_value: f64, count: usize) -> Vec<f64> {
    if count == 0 || max_value <= min_value {
        return vec![];
    }
    let step = (max_value - min_value) / (count + 1) as f64;
    (1..=count).map(|i| min_value + i as f64 * step).collect()
}

/// Generate contour levels at multiples of `interval` within the data range.
pub fn generate_levels_by_interval(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || max_value <= min_value {
        return vec![];
    }

    // start from the first multiple of interval above min_value
    let start = (min_value / interval).ceil() * interval;
    let mut levels = Vec::new();
    let mut level = start;
    while level <= max_value {
        levels.push(level);
        level += interval;
    }
    levels
}

/// Marching squares: extract the isoline segments of `level` from a grid.
///
/// Points are in grid coordinates: x along columns, y along rows. Cells
/// touching a non-finite corner are skipped.
pub fn march_squares(data: &[f64], width: usize, height: usize, level: f64) -> Vec<Segment> {
    if width < 2 || height < 2 || data.len() != width * height {
        return vec![];
    }

    let mut segments = Vec::new();

    for y in 0..(height - 1) {
        for x in 0..(width - 1) {
            let tl = data[y * width + x];
            let tr = data[y * width + x + 1];
            let bl = data[(y + 1) * width + x];
            let br = data[(y + 1) * width + x + 1];

            if !(tl.is_finite() && tr.is_finite() && bl.is_finite() && br.is_finite()) {
                continue;
            }

            // cell index (0-15) from which corners sit above the level
            let mut cell_index = 0u8;
            if tl >= level {
                cell_index |= 1;
            }
            if tr >= level {
                cell_index |= 2;
            }
            if br >= level {
                cell_index |= 4;
            }
            if bl >= level {
                cell_index |= 8;
            }

            segments.extend(cell_segments(
                cell_index, x as f64, y as f64, tl, tr, br, bl, level,
            ));
        }
    }

    segments
}

/// Extract isolines for every level; returns `(level, segments)` pairs.
pub fn extract_isolines(grid: &PixelGrid, levels: &[f64]) -> Vec<(f64, Vec<Segment>)> {
    levels
        .iter()
        .map(|&level| {
            (
                level,
                march_squares(grid.as_slice(), grid.cols(), grid.rows(), level),
            )
        })
        .collect()
}

/// Segments for one marching-squares cell, contour crossings interpolated
/// along the cell edges.
#[allow(clippy::too_many_arguments)]
fn cell_segments(
    cell_index: u8,
    x: f64,
    y: f64,
    tl: f64,
    tr: f64,
    br: f64,
    bl: f64,
    level: f64,
) -> Vec<Segment> {
    let top = interpolate_edge(x, y, x + 1.0, y, tl, tr, level);
    let right = interpolate_edge(x + 1.0, y, x + 1.0, y + 1.0, tr, br, level);
    let bottom = interpolate_edge(x, y + 1.0, x + 1.0, y + 1.0, bl, br, level);
    let left = interpolate_edge(x, y, x, y + 1.0, tl, bl, level);

    match cell_index {
        0 | 15 => vec![], // all corners on the same side
        1 | 14 => vec![Segment { start: left, end: top }],
        2 | 13 => vec![Segment { start: top, end: right }],
        3 | 12 => vec![Segment { start: left, end: right }],
        4 | 11 => vec![Segment { start: right, end: bottom }],
        5 => vec![
            // saddle
            Segment { start: left, end: top },
            Segment { start: right, end: bottom },
        ],
        6 | 9 => vec![Segment { start: top, end: bottom }],
        7 | 8 => vec![Segment { start: left, end: bottom }],
        10 => vec![
            // saddle
            Segment { start: top, end: right },
            Segment { start: left, end: bottom },
        ],
        _ => vec![],
    }
}

/// Linearly interpolate the crossing point along a cell edge.
fn interpolate_edge(x1: f64, y1: f64, x2: f64, y2: f64, val1: f64, val2: f64, level: f64) -> Point {
    if (val2 - val1).abs() < 1e-12 {
        return Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0);
    }
    let t = ((level - val1) / (val2 - val1)).clamp(0.0, 1.0);
    Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1))
}

/// Render a filled-contour (banded) image of the grid, origin at the lower
/// left. Each cell is colored by the band its value falls into; non-finite
/// cells are transparent.
pub fn render_bands(grid: &PixelGrid, levels: &[f64]) -> Vec<u8> {
    let width = grid.cols();
    let height = grid.rows();
    let flipped = flip_rows(grid);
    let bands = levels.len() + 1;

    let mut pixels = vec![0u8; width * height * 4];
    for (idx, &value) in flipped.iter().enumerate() {
        let color = if value.is_finite() {
            let band = levels.iter().filter(|&&l| value >= l).count();
            viridis_color(band as f64 / (bands - 1).max(1) as f64)
        } else {
            Color::transparent()
        };
        let pixel_idx = idx * 4;
        pixels[pixel_idx] = color.r;
        pixels[pixel_idx + 1] = color.g;
        pixels[pixel_idx + 2] = color.b;
        pixels[pixel_idx + 3] = color.a;
    }
    pixels
}

/// Draw isoline segments onto an RGBA buffer in place.
///
/// Segment coordinates are grid coordinates in the flipped (image) frame;
/// use [`flip_segments`] first when the segments were extracted from the
/// unflipped grid.
pub fn draw_segments(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    segments: &[Segment],
    color: Color,
) {
    for segment in segments {
        draw_line(pixels, width, height, segment, color);
    }
}

/// Mirror segment y coordinates for a lower-left-origin image.
pub fn flip_segments(segments: &[Segment], height: usize) -> Vec<Segment> {
    let max_y = (height - 1) as f64;
    segments
        .iter()
        .map(|s| Segment {
            start: Point::new(s.start.x, max_y - s.start.y),
            end: Point::new(s.end.x, max_y - s.end.y),
        })
        .collect()
}

fn draw_line(pixels: &mut [u8], width: usize, height: usize, segment: &Segment, color: Color) {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let steps = (dx.abs().max(dy.abs()).ceil() as usize).max(1) * 2;

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = (segment.start.x + t * dx).round() as isize;
        let y = (segment.start.y + t * dy).round() as isize;
        if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
            continue;
        }
        let idx = (y as usize * width + x as usize) * 4;
        pixels[idx] = color.r;
        pixels[idx + 1] = color.g;
        pixels[idx + 2] = color.b;
        pixels[idx + 3] = color.a;
    }
}
