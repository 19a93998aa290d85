//! Tileset spec descriptions.
//!
//! A spec file is a small JSON document that names a tileset and points at
//! the image files to embed:
//!
//! ```json
//! {
//!   "name": "TileWorld/Editor 32x32",
//!   "desc": "Default 32x32 TileWorld Editor Graphics",
//!   "size": 32,
//!   "base": "TW32_base.png",
//!   "overlay": "TW32_overlay.png",
//!   "cc2": "TW32_cc2.png"
//! }
//! ```
//!
//! `size`, `cc2` and `version` are optional: the tile size defaults to 32,
//! and a spec without an explicit version is packed as CCTILE02 when a CC2
//! image is given and as CCTILE01 otherwise. Image paths are resolved
//! relative to the directory the spec file lives in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::file::TisError;

use super::{File, FileBuilder, Version};

/// Extension of packed tileset files
const OUTPUT_EXTENSION: &str = "tis";

/// A tileset description loaded from a spec file.
///
/// Deserialize one with `serde_json`, then [`resolve`](Self::resolve) it
/// against the spec file's directory to read the referenced images and
/// obtain a packable [`File`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilesetSpec {
	/// Display name of the tileset
	pub name: String,
	/// Description text
	pub desc: String,
	/// Tile edge length in pixels, defaults to 32
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size: Option<u8>,
	/// Path to the base image, relative to the spec file
	pub base: PathBuf,
	/// Path to the overlay image, relative to the spec file
	pub overlay: PathBuf,
	/// Path to the CC2 image, relative to the spec file
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cc2: Option<PathBuf>,
	/// Container version number (1 or 2); inferred from `cc2` when omitted
	#[serde(skip_serializing_if = "Option::is_none")]
	pub version: Option<u8>,
}

impl TilesetSpec {
	/// Returns the container version this spec packs to.
	///
	/// An explicit `version` wins; otherwise a spec with a CC2 image packs
	/// as version 2 and one without as version 1.
	pub fn resolve_version(&self) -> Result<Version, TisError> {
		match self.version {
			Some(number) => Version::from_number(number),
			None if self.cc2.is_some() => Ok(Version::V2),
			None => Ok(Version::V1),
		}
	}

	/// Reads the referenced image files and builds the tileset record.
	///
	/// # Arguments
	///
	/// * `base_dir` - Directory relative image paths are resolved against,
	///   normally the directory containing the spec file
	///
	/// # Errors
	///
	/// Returns an error if a referenced image cannot be read or the spec
	/// names an unknown version.
	pub fn resolve(&self, base_dir: impl AsRef<Path>) -> Result<File, TisError> {
		let base_dir = base_dir.as_ref();
		let version = self.resolve_version()?;

		let mut builder = FileBuilder::new()
			.version(version)
			.name(self.name.clone())
			.description(self.desc.clone())
			.base_image(std::fs::read(base_dir.join(&self.base))?)
			.overlay_image(std::fs::read(base_dir.join(&self.overlay))?);
		if let Some(size) = self.size {
			builder = builder.tile_size(size);
		}
		if let Some(cc2) = &self.cc2 {
			builder = builder.cc2_image(std::fs::read(base_dir.join(cc2))?);
		}

		builder.build()
	}

	/// Derives the output path for a spec file by swapping its extension
	/// to `.tis`.
	pub fn output_path(spec_path: impl AsRef<Path>) -> PathBuf {
		spec_path.as_ref().with_extension(OUTPUT_EXTENSION)
	}
}
