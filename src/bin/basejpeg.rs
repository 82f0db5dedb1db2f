//! basejpeg CLI - BMP to baseline JPEG converter.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use basejpeg::{Bitmap, Encoder, PixelSource};

/// Convert a 24-bit BMP image to a baseline JPEG file.
#[derive(Parser, Debug)]
#[command(name = "basejpeg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input BMP file (24-bit uncompressed)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output JPEG file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// JPEG quality (0-100, higher = better quality)
    #[arg(
        value_name = "QUALITY",
        default_value = "75",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    quality: u8,

    /// Embed a JFIF APP0 segment in the output
    #[arg(long)]
    jfif: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let load_start = Instant::now();
    let bitmap = Bitmap::from_file(&args.input)?;
    let load_time = load_start.elapsed();

    if args.verbose {
        eprintln!("Loaded: {:?}", args.input);
        eprintln!("  Dimensions: {}x{}", bitmap.width(), bitmap.height());
        eprintln!("  Load time: {:.2?}", load_time);
    }

    let encode_start = Instant::now();
    let jpeg_data = Encoder::new()
        .quality(args.quality)
        .jfif(args.jfif)
        .encode(&bitmap)?;
    let encode_time = encode_start.elapsed();

    fs::write(&args.output, &jpeg_data)?;

    let input_size = fs::metadata(&args.input)?.len();
    let output_size = jpeg_data.len() as u64;
    let ratio = if input_size > 0 {
        (output_size as f64 / input_size as f64) * 100.0
    } else {
        0.0
    };

    if args.verbose {
        eprintln!("Output: {:?}", args.output);
        eprintln!("  Quality: {}", args.quality);
        eprintln!("  Encode time: {:.2?}", encode_time);
        eprintln!(
            "  Size: {} -> {} ({:.1}%)",
            format_size(input_size),
            format_size(output_size),
            ratio
        );
    } else {
        println!(
            "{} -> {} ({:.1}%)",
            format_size(input_size),
            format_size(output_size),
            ratio
        );
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
