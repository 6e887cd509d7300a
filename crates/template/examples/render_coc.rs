//! Generate a certificate from a JSON form submission
//! Run with: cargo run --example render_coc -- <input.json> [output-dir] [logo.png]
//!
//! Defaults to the bundled Maria Santos submission and the current
//! directory. Set RUST_LOG=debug to follow the pipeline.

use anyhow::Context;
use coc_template::{CocGenerator, LogoAsset};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/input/maria_santos.json")
    });
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let logo = match args.next() {
        Some(path) => LogoAsset::from_path(path),
        None => LogoAsset::none(),
    };

    println!("=== Certificate of Confirmation ===\n");

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    println!("1. Loaded form: {}", input.display());

    let generator = CocGenerator::new(Arc::new(logo));
    let generated = generator
        .generate_from_str(&text)
        .with_context(|| format!("generating from {}", input.display()))?;
    println!(
        "2. Generated {} bytes for {}",
        generated.bytes.len(),
        generated.record.personal_info.full_name
    );

    if generated.is_complete() {
        println!("3. All required fields present");
    } else {
        println!("3. Missing fields:");
        for path in &generated.validation.missing_fields {
            println!("   - {path}");
        }
        for (page, result) in &generated.page_validation {
            for path in &result.missing_fields {
                println!("   - {page}: {path}");
            }
        }
    }

    std::fs::create_dir_all(&output_dir)?;
    let path = output_dir.join(&generated.file_name);
    std::fs::write(&path, &generated.bytes)?;
    println!("4. Saved -> {}", path.display());

    Ok(())
}
