//! Common types shared across the pixelmap crates.

pub mod error;
pub mod grid;
pub mod pixel_grid;

pub use error::{PixmapError, PixmapResult};
pub use grid::GridSpec;
pub use pixel_grid::PixelGrid;
