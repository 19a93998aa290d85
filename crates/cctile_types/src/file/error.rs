//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing or building `.tis` tileset files
#[derive(Debug, Error)]
pub enum TisError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Invalid magic tag
	#[error("Invalid magic tag: {0:02X?}")]
	InvalidMagic([u8; 8]),

	/// Unknown version number
	#[error("Unknown tileset version: {0}")]
	InvalidVersion(u8),

	/// A field exceeds the capacity of its 32-bit length prefix
	#[error("Field `{field}` too large: {size} bytes does not fit a 32-bit length prefix")]
	FieldTooLarge {
		/// Name of the offending field
		field: &'static str,
		/// Size of the field in bytes
		size: usize,
	},

	/// A text field does not contain valid UTF-8
	#[error("Field `{field}` is not valid UTF-8")]
	InvalidText {
		/// Name of the offending field
		field: &'static str,
	},

	/// Bytes remain after the last field of the record
	#[error("Trailing data: {remaining} bytes left after the final field")]
	TrailingData {
		/// Number of unconsumed bytes
		remaining: usize,
	},

	/// A CC2 image was supplied for a CCTILE01 tileset
	#[error("CC2 images require a CCTILE02 tileset")]
	Cc2ImageUnsupported,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
