//! Tileset record parsing.
//!
//! Reads the flat byte stream back into a [`File`]. The magic tag is read
//! and validated first and selects the schema; every length-prefixed field
//! is bounds-checked against the remaining input before it is consumed.

use crate::file::TisError;

use super::{File, Version, constants};

/// Bounds-checked sequential reader over the raw record bytes
struct FieldReader<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> FieldReader<'a> {
	fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			position: 0,
		}
	}

	/// Takes the next `count` bytes, failing if fewer remain
	fn take(&mut self, count: usize) -> Result<&'a [u8], TisError> {
		if count > self.data.len() - self.position {
			return Err(TisError::InsufficientData {
				expected: self.position.saturating_add(count),
				actual: self.data.len(),
			});
		}
		let bytes = &self.data[self.position..self.position + count];
		self.position += count;
		Ok(bytes)
	}

	fn read_u8(&mut self) -> Result<u8, TisError> {
		Ok(self.take(1)?[0])
	}

	fn read_u32(&mut self) -> Result<u32, TisError> {
		let bytes = self.take(constants::LEN_PREFIX_SIZE)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}

	/// Reads a length prefix and the block of bytes it covers
	fn read_block(&mut self) -> Result<&'a [u8], TisError> {
		let len = self.read_u32()? as usize;
		self.take(len)
	}

	/// Reads a length-prefixed UTF-8 text field
	fn read_text(&mut self, field: &'static str) -> Result<String, TisError> {
		let bytes = self.read_block()?;
		String::from_utf8(bytes.to_vec()).map_err(|_| TisError::InvalidText {
			field,
		})
	}

	fn remaining(&self) -> usize {
		self.data.len() - self.position
	}
}

impl File {
	/// Parses a tileset record from a byte slice.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The first 8 bytes are not a known magic tag
	/// - Any declared field length exceeds the remaining data
	/// - The name or description is not valid UTF-8
	/// - Bytes remain after the final field of the record
	pub fn from_bytes(data: &[u8]) -> Result<Self, TisError> {
		let mut reader = FieldReader::new(data);

		let mut magic = [0u8; constants::MAGIC_SIZE];
		magic.copy_from_slice(reader.take(constants::MAGIC_SIZE)?);
		let version = Version::from_magic(magic)?;

		let name = reader.read_text("name")?;
		let description = reader.read_text("description")?;
		let tile_size = reader.read_u8()?;
		let base_image = reader.read_block()?.to_vec();
		let overlay_image = reader.read_block()?.to_vec();

		// Version 1 files end at the overlay image; version 2 carries one
		// trailing CC2 field where a zero length means no image
		let cc2_image = match version {
			Version::V1 => None,
			Version::V2 => {
				let blob = reader.read_block()?;
				(!blob.is_empty()).then(|| blob.to_vec())
			}
		};

		if reader.remaining() > 0 {
			return Err(TisError::TrailingData {
				remaining: reader.remaining(),
			});
		}

		Ok(Self {
			version,
			name,
			description,
			tile_size,
			base_image,
			overlay_image,
			cc2_image,
		})
	}
}
