//! File type support for the `cctile-rs` project.

mod error;

pub mod tis;

// Re-export unified error type
pub use error::TisError;

// Re-export main file types
pub use tis::{
	DEFAULT_TILE_SIZE, File as TisFile, FileBuilder as TisFileBuilder, TilesetSpec,
	Version as TisVersion,
};
