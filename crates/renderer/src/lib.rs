//! Image rendering for pixelmap visualization.
//!
//! Consumes the dense grids and axis ranges produced by the ingestion
//! crates and renders:
//! - Gradient heatmaps (linear color ramp over the grid)
//! - Filled contour bands and marching-squares isolines
//!
//! Output is RGBA pixel data or encoded PNG bytes; axis placement follows
//! the PT convention with the grid origin at the lower left.

pub mod contour;
pub mod gradient;
pub mod png;
