//! `.tis` tileset container support for the `cctile-rs` project.
//!
//! A `.tis` file bundles the graphics of an editor tileset (a base image, an
//! overlay image and, for CC2-capable tilesets, an optional third image) with
//! its display metadata into a single flat container. The embedded images are
//! opaque blobs to this module; the editors that consume them expect an image
//! container format such as PNG.
//!
//! ## File Structure
//!
//! All multi-byte integers are little-endian. Every variable-length field is
//! preceded by its byte length as a u32.
//!
//! | Field        | Size           | Description                                |
//! |--------------|----------------|--------------------------------------------|
//! | `magic`      | 8 bytes ASCII  | `"CCTILE01"` or `"CCTILE02"`               |
//! | `name_len`   | 4              | Byte length of `name`                      |
//! | `name`       | `name_len`     | Display name, UTF-8                        |
//! | `desc_len`   | 4              | Byte length of `desc`                      |
//! | `desc`       | `desc_len`     | Description text, UTF-8                    |
//! | `tile_size`  | 1              | Tile edge length in pixels                 |
//! | `base_len`   | 4              | Byte length of the base image blob         |
//! | `base`       | `base_len`     | Base graphics                              |
//! | `overlay_len`| 4              | Byte length of the overlay image blob      |
//! | `overlay`    | `overlay_len`  | Overlay graphics                           |
//! | `cc2_len`    | 4 (v02 only)   | Byte length of the CC2 image blob, 0 if absent |
//! | `cc2`        | `cc2_len` (v02 only) | CC2 graphics, present only if `cc2_len` > 0 |
//!
//! A `"CCTILE01"` file ends after the overlay blob; the CC2 field exists only
//! under `"CCTILE02"`, where a zero length encodes an absent image.
//!
//! ## Usage
//!
//! ```no_run
//! use cctile_types::file::tis::{File, FileBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tileset = FileBuilder::new()
//!     .version(Version::V2)
//!     .name("TileWorld/Editor 32x32")
//!     .description("Default 32x32 TileWorld Editor Graphics")
//!     .base_image(std::fs::read("TW32_base.png")?)
//!     .overlay_image(std::fs::read("TW32_overlay.png")?)
//!     .build()?;
//! tileset.save("TW32.tis")?;
//!
//! let loaded = File::open("TW32.tis")?;
//! assert_eq!(loaded, tileset);
//! # Ok(())
//! # }
//! ```

mod builder;
mod decode;
mod encode;
mod spec;

#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::io::Read;
use std::path::Path;

use crate::file::TisError;

pub use builder::FileBuilder;
pub use spec::TilesetSpec;

pub(crate) mod constants {
	/// Magic tag for version 1 tileset files
	pub const MAGIC_V1: [u8; 8] = *b"CCTILE01";

	/// Magic tag for version 2 tileset files
	pub const MAGIC_V2: [u8; 8] = *b"CCTILE02";

	/// Size of the magic tag in bytes
	pub const MAGIC_SIZE: usize = 8;

	/// Size of each field length prefix in bytes
	pub const LEN_PREFIX_SIZE: usize = 4;

	/// Smallest possible record: magic, two empty text fields, tile size,
	/// two empty image blobs
	pub const MIN_RECORD_SIZE: usize = MAGIC_SIZE + 4 * LEN_PREFIX_SIZE + 1;
}

/// Tile edge length written by the original tileset generator
pub const DEFAULT_TILE_SIZE: u8 = 32;

/// Tileset container versions
///
/// The version is carried in the 8-byte magic tag at the start of the file
/// and determines which fields follow. Version 2 appends an optional CC2
/// image field after the overlay image; version 1 ends at the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Version {
	/// `"CCTILE01"`, base and overlay images only
	V1 = 1,
	/// `"CCTILE02"`, adds an optional CC2 image
	V2 = 2,
}

impl Version {
	/// Returns the 8-byte magic tag for this version
	pub fn magic(self) -> [u8; 8] {
		match self {
			Version::V1 => constants::MAGIC_V1,
			Version::V2 => constants::MAGIC_V2,
		}
	}

	/// Resolves a magic tag to a version
	pub fn from_magic(magic: [u8; 8]) -> Result<Self, TisError> {
		match magic {
			constants::MAGIC_V1 => Ok(Version::V1),
			constants::MAGIC_V2 => Ok(Version::V2),
			_ => Err(TisError::InvalidMagic(magic)),
		}
	}

	/// Converts a version number to a `Version`
	pub fn from_number(value: u8) -> Result<Self, TisError> {
		match value {
			1 => Ok(Version::V1),
			2 => Ok(Version::V2),
			_ => Err(TisError::InvalidVersion(value)),
		}
	}

	/// Converts `Version` to its version number
	pub fn number(self) -> u8 {
		self as u8
	}
}

impl Default for Version {
	fn default() -> Self {
		Self::V2
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Version::V1 => write!(f, "CCTILE01"),
			Version::V2 => write!(f, "CCTILE02"),
		}
	}
}

/// TIS file structure, representing a complete tileset container.
///
/// The record is fully buffered in memory; loading parses the whole file and
/// saving serializes it back in one pass. The embedded images are kept as raw
/// byte blobs and never interpreted.
///
/// The CC2 image is always `None` for version 1 files. For version 2 files a
/// zero-length field on the wire decodes to `None`, and `None` encodes back
/// as a zero-length field, so absence survives a round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// Container version, determines the magic tag and trailing field
	version: Version,
	/// Display name of the tileset
	name: String,
	/// Description text
	description: String,
	/// Tile edge length in pixels
	tile_size: u8,
	/// Base graphics blob
	base_image: Vec<u8>,
	/// Overlay graphics blob
	overlay_image: Vec<u8>,
	/// CC2 graphics blob, version 2 only
	cc2_image: Option<Vec<u8>>,
}

impl File {
	/// Creates a new empty tileset with the given version.
	pub fn new(version: Version) -> Self {
		Self {
			version,
			name: String::new(),
			description: String::new(),
			tile_size: DEFAULT_TILE_SIZE,
			base_image: Vec::new(),
			overlay_image: Vec::new(),
			cc2_image: None,
		}
	}

	/// Opens a `.tis` file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not contain a
	/// valid tileset record.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TisError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Loads a `.tis` file from any reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, TisError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Saves the tileset to disk.
	///
	/// The record is written to a temporary sibling file and renamed into
	/// place on success, so a failed save never leaves a partial `.tis`
	/// behind.
	///
	/// # Errors
	///
	/// Returns an error if the record cannot be serialized or the file
	/// cannot be written.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TisError> {
		let path = path.as_ref();
		let data = self.to_bytes()?;

		let mut tmp = path.as_os_str().to_owned();
		tmp.push(".tmp");
		let tmp = std::path::PathBuf::from(tmp);

		std::fs::write(&tmp, &data)?;
		if let Err(err) = std::fs::rename(&tmp, path) {
			let _ = std::fs::remove_file(&tmp);
			return Err(err.into());
		}
		Ok(())
	}

	/// Returns the container version.
	#[inline]
	pub fn version(&self) -> Version {
		self.version
	}

	/// Sets the container version.
	///
	/// Switching a record that carries a CC2 image to version 1 does not
	/// drop the image; `to_bytes` rejects such a record instead.
	pub fn set_version(&mut self, version: Version) {
		self.version = version;
	}

	/// Returns the display name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets the display name.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Returns the description text.
	#[inline]
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Sets the description text.
	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = description.into();
	}

	/// Returns the tile edge length in pixels.
	#[inline]
	pub fn tile_size(&self) -> u8 {
		self.tile_size
	}

	/// Sets the tile edge length in pixels.
	///
	/// Tile sizes above 255 pixels cannot be represented by the format.
	pub fn set_tile_size(&mut self, tile_size: u8) {
		self.tile_size = tile_size;
	}

	/// Returns the base image blob.
	#[inline]
	pub fn base_image(&self) -> &[u8] {
		&self.base_image
	}

	/// Sets the base image blob.
	pub fn set_base_image(&mut self, data: Vec<u8>) {
		self.base_image = data;
	}

	/// Returns the overlay image blob.
	#[inline]
	pub fn overlay_image(&self) -> &[u8] {
		&self.overlay_image
	}

	/// Sets the overlay image blob.
	pub fn set_overlay_image(&mut self, data: Vec<u8>) {
		self.overlay_image = data;
	}

	/// Returns the CC2 image blob if present.
	#[inline]
	pub fn cc2_image(&self) -> Option<&[u8]> {
		self.cc2_image.as_deref()
	}

	/// Sets or clears the CC2 image blob.
	///
	/// An empty blob normalizes to `None`; on the wire both encode as a
	/// zero-length field.
	pub fn set_cc2_image(&mut self, data: Option<Vec<u8>>) {
		self.cc2_image = data.filter(|d| !d.is_empty());
	}
}

impl Default for File {
	fn default() -> Self {
		Self::new(Version::default())
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} tileset \"{}\" ({}x{} px tiles)",
			self.version, self.name, self.tile_size, self.tile_size
		)
	}
}
