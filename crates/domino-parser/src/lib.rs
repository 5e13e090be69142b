//! Parsers for Theriak-Domino pixelmap output files.
//!
//! Domino writes a pixelmap directory as one fixed-format `pixinfo` metadata
//! file plus one sparse data file per calculated variable. This crate reads
//! both: `pixinfo` recovers the PT grid geometry and the list of available
//! data files, `sparse` reconstructs a dense grid from a data file's
//! (1-based flat index, value) records.

pub mod pixinfo;
pub mod sparse;

pub use pixinfo::parse_pixinfo;
pub use sparse::decode_sparse_grid;
