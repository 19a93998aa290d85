//! `cctile-rs` packs tile-graphics resources and their metadata into the
//! `.tis` tileset containers consumed by the Chip's Challenge editors, and
//! reads such containers back.
//!
//! The format support lives in [`cctile_types`]; this crate re-exports it
//! and hosts the `tis_utils` command-line utility (`demos/tis_utils`).

pub use cctile_types;

// Re-export commonly used types at crate root
pub use cctile_types::file::{
	DEFAULT_TILE_SIZE, TilesetSpec, TisError, TisFile, TisFileBuilder, TisVersion,
};

/// `use cctile_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use cctile_types::prelude::*;
}
