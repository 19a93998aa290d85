//! Tileset record serialization.
//!
//! Writes the flat byte stream described in the module documentation: the
//! magic tag first, then every field in fixed order, each variable-length
//! field preceded by a u32 little-endian length prefix that exactly covers
//! the bytes that follow.

use crate::file::TisError;

use super::{File, Version, constants};

/// Appends a length-prefixed block to the output buffer
fn write_block(buffer: &mut Vec<u8>, field: &'static str, data: &[u8]) -> Result<(), TisError> {
	let len = u32::try_from(data.len()).map_err(|_| TisError::FieldTooLarge {
		field,
		size: data.len(),
	})?;
	buffer.extend_from_slice(&len.to_le_bytes());
	buffer.extend_from_slice(data);
	Ok(())
}

impl File {
	/// Serializes the tileset record to bytes.
	///
	/// # Errors
	///
	/// Returns [`TisError::FieldTooLarge`] if any field exceeds its 32-bit
	/// length prefix, or [`TisError::Cc2ImageUnsupported`] if a version 1
	/// record carries a CC2 image.
	pub fn to_bytes(&self) -> Result<Vec<u8>, TisError> {
		if self.version == Version::V1 && self.cc2_image.is_some() {
			return Err(TisError::Cc2ImageUnsupported);
		}

		let mut capacity = constants::MIN_RECORD_SIZE
			+ self.name.len()
			+ self.description.len()
			+ self.base_image.len()
			+ self.overlay_image.len();
		if self.version == Version::V2 {
			capacity += constants::LEN_PREFIX_SIZE
				+ self.cc2_image.as_ref().map_or(0, Vec::len);
		}
		let mut buffer = Vec::with_capacity(capacity);

		buffer.extend_from_slice(&self.version.magic());
		write_block(&mut buffer, "name", self.name.as_bytes())?;
		write_block(&mut buffer, "description", self.description.as_bytes())?;
		buffer.push(self.tile_size);
		write_block(&mut buffer, "base_image", &self.base_image)?;
		write_block(&mut buffer, "overlay_image", &self.overlay_image)?;

		// Absent CC2 image encodes as a zero-length field under version 2
		if self.version == Version::V2 {
			write_block(&mut buffer, "cc2_image", self.cc2_image.as_deref().unwrap_or(&[]))?;
		}

		Ok(buffer)
	}
}
