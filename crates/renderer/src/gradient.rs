//! Gradient/heatmap rendering for dense PT grids.

use pixmap_common::PixelGrid;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f64 * t_inv) + (color2.r as f64 * t)) as u8,
        ((color1.g as f64 * t_inv) + (color2.g as f64 * t)) as u8,
        ((color1.b as f64 * t_inv) + (color2.b as f64 * t)) as u8,
        ((color1.a as f64 * t_inv) + (color2.a as f64 * t)) as u8,
    )
}

/// Viridis anchor colors at evenly spaced positions over [0, 1].
const VIRIDIS_ANCHORS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 74, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (109, 205, 89),
    (253, 231, 37),
];

/// Viridis color ramp for a normalized value in [0, 1].
pub fn viridis_color(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS_ANCHORS.len() - 1);

    let (r1, g1, b1) = VIRIDIS_ANCHORS[lower];
    let (r2, g2, b2) = VIRIDIS_ANCHORS[upper];
    interpolate_color(
        Color::new(r1, g1, b1, 255),
        Color::new(r2, g2, b2, 255),
        scaled - lower as f64,
    )
}

/// Render grid data as a gradient image.
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `min_val`, `max_val`: Value range for color scaling
/// - `color_fn`: Function mapping a normalized value (0-1) to a color
///
/// Non-finite cells (the unguarded volume-fraction division can produce
/// NaN/inf) render as transparent pixels.
///
/// # Returns
/// RGBA pixel data (4 bytes per pixel)
pub fn render_grid<F>(
    data: &[f64],
    width: usize,
    height: usize,
    min_val: f64,
    max_val: f64,
    color_fn: F,
) -> Vec<u8>
where
    F: Fn(f64) -> Color,
{
    let mut pixels = vec![0u8; width * height * 4];

    let range = max_val - min_val;
    let range = if range.abs() < 1e-12 { 1.0 } else { range };

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if idx >= data.len() {
                continue;
            }
            let value = data[idx];

            let color = if value.is_finite() {
                let normalized = ((value - min_val) / range).clamp(0.0, 1.0);
                color_fn(normalized)
            } else {
                Color::transparent()
            };

            let pixel_idx = idx * 4;
            pixels[pixel_idx] = color.r;
            pixels[pixel_idx + 1] = color.g;
            pixels[pixel_idx + 2] = color.b;
            pixels[pixel_idx + 3] = color.a;
        }
    }

    pixels
}

/// Render a pixelmap grid as a viridis heatmap with the origin at the lower
/// left: image row 0 holds the highest temperature row.
///
/// The color scale spans the grid's finite value range. A grid with no
/// finite cells renders fully transparent.
pub fn render_heatmap(grid: &PixelGrid) -> Vec<u8> {
    let (min_val, max_val) = grid.value_range().unwrap_or((0.0, 1.0));
    render_heatmap_scaled(grid, min_val, max_val)
}

/// Render a heatmap with an explicit color scale range.
pub fn render_heatmap_scaled(grid: &PixelGrid, min_val: f64, max_val: f64) -> Vec<u8> {
    let flipped = flip_rows(grid);
    render_grid(
        &flipped,
        grid.cols(),
        grid.rows(),
        min_val,
        max_val,
        viridis_color,
    )
}

/// Reverse the row order so the first grid row lands at the image bottom.
pub(crate) fn flip_rows(grid: &PixelGrid) -> Vec<f64> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut flipped = Vec::with_capacity(rows * cols);
    for row in (0..rows).rev() {
        for col in 0..cols {
            flipped.push(grid.get(row, col));
        }
    }
    flipped
}
