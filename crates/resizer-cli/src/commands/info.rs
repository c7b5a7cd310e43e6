use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use resizer_core::io::image_io::image_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = image_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color type:  {:?}", info.color_type);
    println!("Alpha:       {}", if info.has_alpha { "yes" } else { "no" });
    match info.format {
        Some(format) => println!("Format:      {:?}", format),
        None => println!("Format:      unknown"),
    }

    let bytes = info.width as u64 * info.height as u64 * info.color_type.bytes_per_pixel() as u64;
    println!("Decoded:     {:.1} MB", bytes as f64 / (1024.0 * 1024.0));

    Ok(())
}
