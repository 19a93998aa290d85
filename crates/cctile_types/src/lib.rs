//! This crate provides core data types and file format support for the `cctile-rs` project.
//!
//! # File Formats
//!
//! - **TIS**: Tileset container files embedding the base, overlay and optional CC2
//!   graphics of an editor tileset together with its display metadata
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use cctile_types::prelude::*;
//!
//! // Load an existing tileset
//! let tileset = TisFile::open("TW32.tis")?;
//! println!("{}", tileset);
//!
//! // Build a new one
//! let tileset = TisFileBuilder::new()
//!     .name("TileWorld/Editor 32x32")
//!     .description("Default 32x32 TileWorld Editor Graphics")
//!     .base_image(std::fs::read("TW32_base.png")?)
//!     .overlay_image(std::fs::read("TW32_overlay.png")?)
//!     .build()?;
//! tileset.save("TW32.tis")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use cctile_types::file::{TisFile, TisVersion};
//!
//! let tileset = TisFile::open("CC2.tis")?;
//! assert_eq!(tileset.version(), TisVersion::V2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod file;

/// `use cctile_types::prelude::*;` to import commonly used items.
pub mod prelude;
