//! Prelude module for `cctile_types`.
//!
//! This module provides a convenient way to import commonly used types and constants.
//!
//! # Examples
//!
//! ```no_run
//! use cctile_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let tileset = TisFile::open("TW32.tis")?;
//! let builder = TisFileBuilder::new().name("My Tiles");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Constants
	DEFAULT_TILE_SIZE,

	// Spec types
	TilesetSpec,
	TisError,

	// TIS types
	TisFile,
	TisFileBuilder,
	TisVersion,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
