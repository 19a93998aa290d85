//! TIS Tileset CLI Utility
//!
//! A command-line tool for packing, unpacking, inspecting and verifying
//! `.tis` tileset containers.
//!
//! # Features
//!
//! - **pack**: Build `.tis` files from JSON spec files that reference the images to embed
//! - **unpack**: Extract the embedded images and write a spec that packs back to the same file
//! - **info**: Print tileset metadata and embedded image properties
//! - **verify**: Validate tileset decoder/encoder round-trip accuracy
//!
//! # Spec Format
//!
//! A spec is a JSON file next to the images it references:
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
//! The output file is the spec path with its extension swapped to `.tis`.
//!
//! # Usage
//!
//! ```bash
//! # Pack one or more spec files
//! cargo run --example tis_utils pack TW32.json WEP.json
//!
//! # Unpack a tileset (auto output: input_assets/)
//! cargo run --example tis_utils unpack TW32.tis
//!
//! # Show tileset metadata
//! cargo run --example tis_utils info TW32.tis
//!
//! # Verify decoder/encoder correctness
//! cargo run --example tis_utils verify TW32.tis
//! ```

use cctile_rs::prelude::*;
use clap::{Parser, Subcommand};
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tis_utils")]
#[command(author = "cctile-rs project")]
#[command(version = "1.0")]
#[command(about = "Tileset utility - pack, unpack, inspect and verify .tis files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Pack JSON spec files into .tis tilesets
	Pack {
		/// Input spec file paths
		#[arg(value_name = "SPEC_JSON", required = true)]
		specs: Vec<PathBuf>,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Unpack a .tis tileset into its images and a spec file
	Unpack {
		/// Input tileset file path
		#[arg(value_name = "INPUT_TIS")]
		input: PathBuf,

		/// Output directory path (optional, defaults to `input_assets/`)
		#[arg(value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Print tileset metadata
	Info {
		/// Input tileset file path
		#[arg(value_name = "INPUT_TIS")]
		input: PathBuf,
	},

	/// Verify tileset decoder/encoder round-trip accuracy
	Verify {
		/// Input tileset file path to verify
		#[arg(value_name = "INPUT_TIS")]
		input: PathBuf,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},
}

/// Describes an embedded image blob for info/verbose output
fn describe_blob(data: &[u8]) -> String {
	match image::load_from_memory(data) {
		Ok(img) => format!("{} bytes, {}x{} px", data.len(), img.width(), img.height()),
		Err(_) => format!("{} bytes, not a recognized image format", data.len()),
	}
}

/// Handle pack command
fn handle_pack(specs: Vec<PathBuf>, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
	let total = specs.len();
	let mut failures = 0;

	for spec_path in specs {
		match pack_one(&spec_path, verbose) {
			Ok(output) => {
				println!("✓ Packed {} -> {}", spec_path.display(), output.display());
			}
			Err(err) => {
				log::error!("failed to pack {}: {}", spec_path.display(), err);
				failures += 1;
			}
		}
	}

	if failures > 0 {
		return Err(format!("{failures} of {total} tileset(s) failed to pack").into());
	}
	Ok(())
}

/// Packs a single spec file, returning the output path
fn pack_one(spec_path: &Path, verbose: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
	if verbose {
		println!("🔒 Packing tileset spec");
		println!("   Input: {}", spec_path.display());
	}

	let json = fs::read_to_string(spec_path)?;
	let spec: TilesetSpec = serde_json::from_str(&json)?;

	// Image paths inside the spec are relative to the spec file
	let base_dir = spec_path.parent().unwrap_or_else(|| Path::new("."));
	let tileset = spec.resolve(base_dir)?;

	if verbose {
		println!("   ✓ Resolved {}", tileset);
		println!("   - Base image:    {}", describe_blob(tileset.base_image()));
		println!("   - Overlay image: {}", describe_blob(tileset.overlay_image()));
		if let Some(cc2) = tileset.cc2_image() {
			println!("   - CC2 image:     {}", describe_blob(cc2));
		}
	}

	let output = TilesetSpec::output_path(spec_path);
	tileset.save(&output)?;

	if verbose {
		let size = fs::metadata(&output)?.len();
		println!("   ✓ Saved {} ({} bytes)", output.display(), size);
	}

	Ok(output)
}

/// Handle unpack command
fn handle_unpack(
	input: PathBuf,
	output: Option<PathBuf>,
	verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	// Generate output directory if not specified
	let output_dir = output.unwrap_or_else(|| {
		let stem = input.file_stem().unwrap_or_default();
		PathBuf::from(format!("{}_assets", stem.to_string_lossy()))
	});

	if verbose {
		println!("🔓 Unpacking tileset");
		println!("   Input:  {}", input.display());
		println!("   Output: {}", output_dir.display());
	}

	let tileset = TisFile::open(&input)?;

	if verbose {
		println!("   ✓ Loaded {}", tileset);
	}

	fs::create_dir_all(&output_dir)?;

	let mut written = Vec::new();
	for (filename, blob) in [
		("base.png", Some(tileset.base_image())),
		("overlay.png", Some(tileset.overlay_image())),
		("cc2.png", tileset.cc2_image()),
	] {
		let Some(blob) = blob else {
			continue;
		};
		if image::load_from_memory(blob).is_err() {
			log::warn!("{filename} does not decode as an image, writing raw bytes anyway");
		}
		fs::write(output_dir.join(filename), blob)?;
		written.push(filename);

		if verbose {
			println!("   ✓ {}: {}", filename, describe_blob(blob));
		}
	}

	// Write a spec that packs back to an equivalent tileset
	let spec = TilesetSpec {
		name: tileset.name().to_owned(),
		desc: tileset.description().to_owned(),
		size: Some(tileset.tile_size()),
		base: PathBuf::from("base.png"),
		overlay: PathBuf::from("overlay.png"),
		cc2: tileset.cc2_image().map(|_| PathBuf::from("cc2.png")),
		version: Some(tileset.version().number()),
	};
	let spec_path = output_dir.join("tileset.json");
	fs::write(&spec_path, serde_json::to_string_pretty(&spec)?)?;

	if verbose {
		println!("   ✓ Saved spec: {}", spec_path.display());
		println!("\n✅ Unpacking completed successfully!");
	} else {
		println!(
			"✓ Unpacked {} -> {} ({} images)",
			input.display(),
			output_dir.display(),
			written.len()
		);
	}

	Ok(())
}

/// Handle info command
fn handle_info(input: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
	let tileset = TisFile::open(&input)?;

	println!("{}", input.display());
	println!("   Name:        {}", tileset.name());
	println!("   Description: {}", tileset.description());
	println!("   Version:     {}", tileset.version());
	println!("   Tile size:   {}x{} px", tileset.tile_size(), tileset.tile_size());
	println!("   Base image:    {}", describe_blob(tileset.base_image()));
	println!("   Overlay image: {}", describe_blob(tileset.overlay_image()));
	match tileset.cc2_image() {
		Some(cc2) => println!("   CC2 image:     {}", describe_blob(cc2)),
		None => println!("   CC2 image:     absent"),
	}

	Ok(())
}

/// Handle verify command
fn handle_verify(input: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
	if verbose {
		println!("🔍 Verifying tileset decoder/encoder round-trip");
		println!("   Input: {}", input.display());
	}

	let original = fs::read(&input)?;
	let tileset = TisFile::from_bytes(&original)?;

	if verbose {
		println!("   ✓ Decoded {}", tileset);
	}

	let reencoded = tileset.to_bytes()?;

	if reencoded == original {
		println!("✅ Verification PASSED: {} re-encodes byte-for-byte", input.display());
		println!("   - {} bytes", original.len());
		Ok(())
	} else {
		println!("❌ Verification FAILED: re-encoded stream differs!");
		println!("   - Original size:   {} bytes", original.len());
		println!("   - Re-encoded size: {} bytes", reencoded.len());
		Err("Verification failed".into())
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Pack {
			specs,
			verbose,
		} => handle_pack(specs, verbose),

		Commands::Unpack {
			input,
			output,
			verbose,
		} => handle_unpack(input, output, verbose),

		Commands::Info {
			input,
		} => handle_info(input),

		Commands::Verify {
			input,
			verbose,
		} => handle_verify(input, verbose),
	}
}
