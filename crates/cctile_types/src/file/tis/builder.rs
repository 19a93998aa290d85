//! Tileset construction.
//!
//! [`FileBuilder`] assembles a [`File`] from its parts and validates the
//! record before it is handed out, so every built tileset can be encoded.

use std::path::Path;

use crate::file::TisError;

use super::{DEFAULT_TILE_SIZE, File, Version};

/// Builder for creating tileset files.
///
/// Defaults to an empty version 2 record with the standard 32 pixel tile
/// size. All setters consume and return the builder, so construction chains:
///
/// ```no_run
/// use cctile_types::file::tis::FileBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tileset = FileBuilder::new()
///     .name("MSCC/Editor Color")
///     .description("Microsoft WEP Default 32x32 Editor Graphics")
///     .base_image(std::fs::read("MSCC_base.png")?)
///     .overlay_image(std::fs::read("MSCC_overlay.png")?)
///     .build()?;
/// tileset.save("WEP.tis")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileBuilder {
	version: Version,
	name: String,
	description: String,
	tile_size: Option<u8>,
	base_image: Vec<u8>,
	overlay_image: Vec<u8>,
	cc2_image: Option<Vec<u8>>,
}

impl FileBuilder {
	/// Creates a new empty tileset builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the container version.
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Sets the description text.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the tile edge length in pixels.
	pub fn tile_size(mut self, tile_size: u8) -> Self {
		self.tile_size = Some(tile_size);
		self
	}

	/// Sets the base image blob.
	pub fn base_image(mut self, data: Vec<u8>) -> Self {
		self.base_image = data;
		self
	}

	/// Sets the overlay image blob.
	pub fn overlay_image(mut self, data: Vec<u8>) -> Self {
		self.overlay_image = data;
		self
	}

	/// Sets the CC2 image blob.
	///
	/// An empty blob is treated as no image at all.
	pub fn cc2_image(mut self, data: Vec<u8>) -> Self {
		self.cc2_image = (!data.is_empty()).then_some(data);
		self
	}

	/// Builds the tileset record.
	///
	/// # Errors
	///
	/// Returns [`TisError::Cc2ImageUnsupported`] if a CC2 image was supplied
	/// for a version 1 tileset.
	pub fn build(self) -> Result<File, TisError> {
		if self.version == Version::V1 && self.cc2_image.is_some() {
			return Err(TisError::Cc2ImageUnsupported);
		}

		Ok(File {
			version: self.version,
			name: self.name,
			description: self.description,
			tile_size: self.tile_size.unwrap_or(DEFAULT_TILE_SIZE),
			base_image: self.base_image,
			overlay_image: self.overlay_image,
			cc2_image: self.cc2_image,
		})
	}

	/// Builds the tileset and saves it directly.
	///
	/// # Errors
	///
	/// Returns an error if the record is invalid or the file cannot be
	/// written.
	pub fn save(self, path: impl AsRef<Path>) -> Result<File, TisError> {
		let file = self.build()?;
		file.save(path)?;
		Ok(file)
	}
}
