//! Pixelmap assembly over Domino PT grids.
//!
//! A mineral that forms a solid solution is spread across several
//! endmember-specific pixelmap files; their element-wise sum is the mineral's
//! total value at each grid point. This crate resolves a (variable, mineral)
//! query to the candidate files, reconstructs and sums the dense grids, and
//! for the `vol` variable normalizes by the total solids volume to yield a
//! volume fraction.
//!
//! # Example
//!
//! ```ignore
//! use pixmap_processor::{EndmemberSource, PixelMap};
//!
//! let pixmap = PixelMap::open("_pixelmaps", EndmemberSource::preset("jun92d"))?;
//! let grid = pixmap.load_variable("vol", "garnet")?;
//! for value in grid.as_slice() {
//!     // ...
//! }
//! ```

pub mod endmembers;
pub mod reader;
pub mod registry;

pub use endmembers::{EndmemberGroup, EndmemberMap};
pub use reader::{EndmemberSource, PixelMap};
pub use registry::EndmemberRegistry;
