//! Unit tests for tileset file operations

use super::*;

fn sample_v2() -> File {
	FileBuilder::new()
		.version(Version::V2)
		.name("T")
		.description("D")
		.tile_size(32)
		.base_image(vec![0x01, 0x02])
		.overlay_image(vec![0x03])
		.build()
		.unwrap()
}

/// Builds the byte stream for `sample_v2` by hand
fn sample_v2_bytes() -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(b"CCTILE02");
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(b"T");
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(b"D");
	data.push(0x20);
	data.extend_from_slice(&2u32.to_le_bytes());
	data.extend_from_slice(&[0x01, 0x02]);
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(&[0x03]);
	data.extend_from_slice(&0u32.to_le_bytes());
	data
}

#[test]
fn test_encode_v2_golden() {
	let encoded = sample_v2().to_bytes().unwrap();
	assert_eq!(encoded, sample_v2_bytes());
}

#[test]
fn test_encode_v1_omits_cc2_field() {
	let mut tileset = sample_v2();
	tileset.set_version(Version::V1);
	let encoded = tileset.to_bytes().unwrap();

	// Identical stream except for the magic tag and the missing
	// trailing zero-length CC2 field
	let mut expected = sample_v2_bytes();
	expected[..8].copy_from_slice(b"CCTILE01");
	expected.truncate(expected.len() - 4);
	assert_eq!(encoded, expected);
}

#[test]
fn test_roundtrip_v2_without_cc2() {
	let tileset = sample_v2();
	let decoded = File::from_bytes(&tileset.to_bytes().unwrap()).unwrap();
	assert_eq!(decoded, tileset);
	assert_eq!(decoded.cc2_image(), None);
}

#[test]
fn test_roundtrip_v2_with_cc2() {
	let tileset = FileBuilder::new()
		.version(Version::V2)
		.name("CC2 Editor")
		.description("Tiles for the sequel")
		.tile_size(48)
		.base_image(vec![0xAA; 64])
		.overlay_image(vec![0xBB; 32])
		.cc2_image(vec![0xCC, 0xDD])
		.build()
		.unwrap();

	let decoded = File::from_bytes(&tileset.to_bytes().unwrap()).unwrap();
	assert_eq!(decoded, tileset);
	assert_eq!(decoded.cc2_image(), Some([0xCC, 0xDD].as_slice()));
}

#[test]
fn test_roundtrip_v1() {
	let tileset = FileBuilder::new()
		.version(Version::V1)
		.name("TileWorld/Editor 32x32")
		.description("Default 32x32 TileWorld Editor Graphics")
		.base_image(vec![0x89, 0x50, 0x4E, 0x47])
		.overlay_image(Vec::new())
		.build()
		.unwrap();

	let decoded = File::from_bytes(&tileset.to_bytes().unwrap()).unwrap();
	assert_eq!(decoded, tileset);
	assert_eq!(decoded.version(), Version::V1);
}

#[test]
fn test_roundtrip_unicode_text() {
	let tileset = FileBuilder::new()
		.name("タイル")
		.description("日本語の説明 — ütf-8")
		.base_image(vec![1])
		.overlay_image(vec![2])
		.build()
		.unwrap();

	let decoded = File::from_bytes(&tileset.to_bytes().unwrap()).unwrap();
	assert_eq!(decoded.name(), "タイル");
	assert_eq!(decoded.description(), "日本語の説明 — ütf-8");
}

#[test]
fn test_length_prefixes_cover_fields() {
	let bytes = sample_v2_bytes();

	// name length prefix at offset 8 covers exactly the name bytes
	let name_len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
	assert_eq!(&bytes[12..12 + name_len], b"T");

	let decoded = File::from_bytes(&bytes).unwrap();
	assert_eq!(decoded.base_image().len(), 2);
	assert_eq!(decoded.overlay_image().len(), 1);
}

#[test]
fn test_decode_v1_stops_at_overlay() {
	// A version 1 stream stops at the overlay; nothing after it is read
	let mut data = sample_v2_bytes();
	data[..8].copy_from_slice(b"CCTILE01");
	data.truncate(data.len() - 4);

	let decoded = File::from_bytes(&data).unwrap();
	assert_eq!(decoded.version(), Version::V1);
	assert_eq!(decoded.cc2_image(), None);
}

#[test]
fn test_decode_zero_length_cc2_is_absent() {
	let decoded = File::from_bytes(&sample_v2_bytes()).unwrap();
	assert_eq!(decoded.cc2_image(), None);
}

#[test]
fn test_decode_unknown_magic() {
	let mut data = sample_v2_bytes();
	data[..8].copy_from_slice(b"CCTILE99");

	let result = File::from_bytes(&data);
	assert!(matches!(result, Err(TisError::InvalidMagic(magic)) if &magic == b"CCTILE99"));
}

#[test]
fn test_decode_truncated_blob() {
	let mut data = sample_v2_bytes();
	// Cut the final field's bytes short of its declared length
	data.truncate(data.len() - 1);

	let result = File::from_bytes(&data);
	assert!(matches!(result, Err(TisError::InsufficientData { .. })));
}

#[test]
fn test_decode_length_beyond_input() {
	let mut data = Vec::new();
	data.extend_from_slice(b"CCTILE01");
	data.extend_from_slice(&1000u32.to_le_bytes());
	data.extend_from_slice(b"oops");

	let result = File::from_bytes(&data);
	assert!(matches!(
		result,
		Err(TisError::InsufficientData { expected, actual }) if expected == 1012 && actual == 16
	));
}

#[test]
fn test_decode_empty_input() {
	let result = File::from_bytes(&[]);
	assert!(matches!(result, Err(TisError::InsufficientData { .. })));
}

#[test]
fn test_decode_trailing_data() {
	let mut data = sample_v2_bytes();
	data.push(0xFF);

	let result = File::from_bytes(&data);
	assert!(matches!(result, Err(TisError::TrailingData { remaining: 1 })));
}

#[test]
fn test_decode_invalid_utf8_name() {
	let mut data = Vec::new();
	data.extend_from_slice(b"CCTILE01");
	data.extend_from_slice(&2u32.to_le_bytes());
	data.extend_from_slice(&[0xFF, 0xFE]);
	data.extend_from_slice(&0u32.to_le_bytes());
	data.push(32);
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());

	let result = File::from_bytes(&data);
	assert!(matches!(result, Err(TisError::InvalidText { field: "name" })));
}

#[test]
fn test_from_reader() {
	let mut cursor = std::io::Cursor::new(sample_v2_bytes());
	let decoded = File::from_reader(&mut cursor).unwrap();
	assert_eq!(decoded, sample_v2());
}

#[test]
fn test_new_defaults() {
	let tileset = File::new(Version::V1);
	assert_eq!(tileset.version(), Version::V1);
	assert_eq!(tileset.name(), "");
	assert_eq!(tileset.tile_size(), DEFAULT_TILE_SIZE);
	assert!(tileset.base_image().is_empty());
	assert_eq!(tileset.cc2_image(), None);

	assert_eq!(File::default().version(), Version::V2);
}

#[test]
fn test_builder_normalizes_empty_cc2() {
	let tileset = FileBuilder::new()
		.version(Version::V2)
		.cc2_image(Vec::new())
		.build()
		.unwrap();
	assert_eq!(tileset.cc2_image(), None);
}

#[test]
fn test_builder_rejects_cc2_on_v1() {
	let result = FileBuilder::new().version(Version::V1).cc2_image(vec![1]).build();
	assert!(matches!(result, Err(TisError::Cc2ImageUnsupported)));
}

#[test]
fn test_encode_rejects_cc2_on_v1() {
	let mut tileset = sample_v2();
	tileset.set_cc2_image(Some(vec![1, 2, 3]));
	tileset.set_version(Version::V1);

	let result = tileset.to_bytes();
	assert!(matches!(result, Err(TisError::Cc2ImageUnsupported)));
}

#[test]
fn test_set_cc2_image_normalizes_empty() {
	let mut tileset = sample_v2();
	tileset.set_cc2_image(Some(Vec::new()));
	assert_eq!(tileset.cc2_image(), None);
}

#[test]
fn test_version_magic_mapping() {
	assert_eq!(Version::V1.magic(), *b"CCTILE01");
	assert_eq!(Version::V2.magic(), *b"CCTILE02");
	assert_eq!(Version::from_magic(*b"CCTILE01").unwrap(), Version::V1);
	assert_eq!(Version::from_magic(*b"CCTILE02").unwrap(), Version::V2);
	assert!(Version::from_magic(*b"CCTILE03").is_err());
}

#[test]
fn test_version_numbers() {
	assert_eq!(Version::V1.number(), 1);
	assert_eq!(Version::V2.number(), 2);
	assert_eq!(Version::from_number(1).unwrap(), Version::V1);
	assert_eq!(Version::from_number(2).unwrap(), Version::V2);
	assert!(matches!(Version::from_number(3), Err(TisError::InvalidVersion(3))));
}

#[test]
fn test_display() {
	assert_eq!(Version::V2.to_string(), "CCTILE02");
	assert_eq!(sample_v2().to_string(), "CCTILE02 tileset \"T\" (32x32 px tiles)");
}

#[test]
fn test_spec_version_inference() {
	let spec = TilesetSpec {
		name: "x".into(),
		desc: "y".into(),
		size: None,
		base: "base.png".into(),
		overlay: "overlay.png".into(),
		cc2: None,
		version: None,
	};
	assert_eq!(spec.resolve_version().unwrap(), Version::V1);

	let with_cc2 = TilesetSpec {
		cc2: Some("cc2.png".into()),
		..spec.clone()
	};
	assert_eq!(with_cc2.resolve_version().unwrap(), Version::V2);

	let explicit = TilesetSpec {
		version: Some(1),
		..with_cc2
	};
	assert_eq!(explicit.resolve_version().unwrap(), Version::V1);

	let unknown = TilesetSpec {
		version: Some(7),
		..spec
	};
	assert!(unknown.resolve_version().is_err());
}

#[test]
fn test_spec_output_path() {
	assert_eq!(
		TilesetSpec::output_path("tilesets/TW32.json"),
		std::path::PathBuf::from("tilesets/TW32.tis")
	);
	assert_eq!(TilesetSpec::output_path("WEP"), std::path::PathBuf::from("WEP.tis"));
}
