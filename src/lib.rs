//! # basejpeg
//!
//! Baseline JPEG encoder in pure Rust: turns 24-bit BMP files or raw RGB
//! buffers into baseline sequential DCT JPEG streams (ITU-T T.81).
//!
//! The pipeline is the classic one: BT.601 color conversion, 4:2:0 chroma
//! subsampling, AAN floating-point DCT, Annex K quantization tables scaled
//! by a 0-100 quality setting, and Huffman entropy coding with the standard
//! Annex K.3 tables. Output is a single interleaved scan every baseline
//! decoder understands.
//!
//! ## Quick Start
//!
//! The [`Encoder`] struct is the main entry point:
//!
//! ```
//! use basejpeg::Encoder;
//!
//! # fn main() -> Result<(), basejpeg::Error> {
//! // RGB pixel data (3 bytes per pixel, row-major order)
//! let rgb_pixels: Vec<u8> = vec![0; 64 * 48 * 3];
//!
//! let jpeg_data = Encoder::new()
//!     .quality(85)
//!     .encode_rgb(&rgb_pixels, 64, 48)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding a BMP File
//!
//! ```no_run
//! use basejpeg::{Bitmap, Encoder};
//!
//! # fn main() -> Result<(), basejpeg::Error> {
//! let bitmap = Bitmap::from_file("input.bmp")?;
//! let jpeg_data = Encoder::new().quality(90).encode(&bitmap)?;
//! std::fs::write("output.jpg", &jpeg_data)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Pixel Sources
//!
//! Anything that can answer "what color is the pixel at (x, y)?" can be
//! encoded by implementing [`PixelSource`]:
//!
//! ```
//! use basejpeg::{Encoder, PixelSource};
//!
//! struct Gradient;
//!
//! impl PixelSource for Gradient {
//!     fn width(&self) -> u32 { 32 }
//!     fn height(&self) -> u32 { 32 }
//!     fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
//!         [(8 * x) as u8, (8 * y) as u8, 0]
//!     }
//! }
//!
//! # fn main() -> Result<(), basejpeg::Error> {
//! let jpeg_data = Encoder::new().encode(&Gradient)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// ============================================================================
// Internal modules - hidden from public docs but accessible for tests
// ============================================================================
// These modules contain internal implementation details. They are exposed
// for testing and benchmarks but are not part of the stable API.

/// Bitstream writing with byte stuffing (internal).
#[doc(hidden)]
pub mod bitstream;

/// Color conversion utilities (internal).
#[doc(hidden)]
pub mod color;

/// Constants and fixed coding tables (internal).
#[doc(hidden)]
pub mod consts;

/// Forward DCT transform (internal).
#[doc(hidden)]
pub mod dct;

/// Entropy encoding (internal).
#[doc(hidden)]
pub mod entropy;

/// Huffman table derivation (internal).
#[doc(hidden)]
pub mod huffman;

/// JPEG marker writing (internal).
#[doc(hidden)]
pub mod marker;

/// Quantization utilities (internal).
#[doc(hidden)]
pub mod quant;

/// Block extraction and chroma subsampling (internal).
#[doc(hidden)]
pub mod sample;

/// Shared type definitions (internal).
#[doc(hidden)]
pub mod types;

// Main API modules (not hidden)
mod bmp;
mod encode;
mod error;

// ============================================================================
// Public API
// ============================================================================

/// The JPEG encoder, plus the pixel-access abstraction it consumes.
///
/// Configure with the builder methods, then call
/// [`encode_rgb()`](Encoder::encode_rgb) for packed buffers or
/// [`encode()`](Encoder::encode) for any [`PixelSource`].
///
/// # Example
///
/// ```
/// use basejpeg::Encoder;
///
/// # fn main() -> Result<(), basejpeg::Error> {
/// let pixels: Vec<u8> = vec![0; 16 * 16 * 3];
///
/// let jpeg = Encoder::new()
///     .quality(85)
///     .encode_rgb(&pixels, 16, 16)?;
/// # Ok(())
/// # }
/// ```
pub use encode::{Encoder, PixelSource, RgbPixels};

/// 24-bit BMP reading.
///
/// [`Bitmap`] parses uncompressed 24-bit BMP data and plugs straight into
/// [`Encoder::encode`] as a [`PixelSource`], handling bottom-up rows,
/// mirrored widths and row padding on access.
pub use bmp::Bitmap;

/// Error type for encoding operations.
///
/// # Example
///
/// ```
/// use basejpeg::{Encoder, Error};
///
/// let result = Encoder::new().encode_rgb(&[], 0, 0);
/// match result {
///     Ok(data) => println!("Encoded {} bytes", data.len()),
///     Err(Error::InvalidDimensions { width, height }) => {
///         eprintln!("Invalid dimensions: {}x{}", width, height);
///     }
///     Err(e) => eprintln!("Encoding failed: {}", e),
/// }
/// ```
pub use error::Error;

/// Result type alias for encoding operations.
///
/// Equivalent to `std::result::Result<T, basejpeg::Error>`.
pub use error::Result;
