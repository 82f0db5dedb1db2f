//! JPEG encoder pipeline.
//!
//! [`Encoder`] drives the whole baseline pipeline: marker emission, MCU
//! traversal, color conversion, forward DCT, quantization and entropy
//! coding, producing one interleaved 4:2:0 scan.
//!
//! Pixels come from a [`PixelSource`]; [`RgbPixels`] adapts a packed RGB
//! buffer and the BMP reader implements it directly.
//!
//! # Examples
//!
//! ```
//! use basejpeg::Encoder;
//!
//! let pixels = vec![128u8; 64 * 48 * 3];
//! let jpeg = Encoder::new().quality(85).encode_rgb(&pixels, 64, 48)?;
//! assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
//! # Ok::<(), basejpeg::Error>(())
//! ```

use crate::bitstream::BitWriter;
use crate::consts::{DCTSIZE2, MAX_DIMENSION, MCU_HEIGHT, MCU_WIDTH};
use crate::dct;
use crate::entropy::EntropyEncoder;
use crate::error::{Error, Result};
use crate::marker::MarkerWriter;
use crate::quant::{quantize_block, QuantTables};
use crate::sample;
use crate::types::{Component, FloatBlock};

/// Pixel access for an encode pass.
///
/// Implementors expose a width x height grid of RGB pixels with (0, 0) at
/// the top-left corner. The encoder only asks for positions within the
/// reported bounds.
pub trait PixelSource {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// The pixel at (x, y), as `[r, g, b]`.
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];
}

/// Borrowed RGB buffer, 3 bytes per pixel in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct RgbPixels<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbPixels<'a> {
    /// Wrap a buffer, checking its length against the dimensions.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(Error::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbPixels {
            data,
            width,
            height,
        })
    }
}

impl PixelSource for RgbPixels<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let pos = 3 * (y as usize * self.width as usize + x as usize);
        [self.data[pos], self.data[pos + 1], self.data[pos + 2]]
    }
}

/// Baseline JPEG encoder with configurable quality.
#[derive(Debug, Clone)]
pub struct Encoder {
    /// Quality level (0-100)
    quality: u8,
    /// Emit a JFIF APP0 segment after SOI
    jfif: bool,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Create an encoder with default settings: quality 75, no APP0.
    pub fn new() -> Self {
        Encoder {
            quality: 75,
            jfif: false,
        }
    }

    /// Set the quality level (0-100, higher keeps more detail).
    ///
    /// Out-of-range values are reported by [`encode`](Self::encode).
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Emit a JFIF APP0 segment (version 1.01, 1:1 aspect, no thumbnail).
    pub fn jfif(mut self, jfif: bool) -> Self {
        self.jfif = jfif;
        self
    }

    /// Encode a packed RGB buffer (3 bytes per pixel, row-major).
    pub fn encode_rgb(&self, rgb_data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        let source = RgbPixels::new(rgb_data, width, height)?;
        self.encode(&source)
    }

    /// Encode any pixel source into a fresh JPEG byte vector.
    pub fn encode<P: PixelSource>(&self, source: &P) -> Result<Vec<u8>> {
        if self.quality > 100 {
            return Err(Error::InvalidQuality(self.quality));
        }

        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::InvalidDimensions { width, height });
        }

        // Header plus a rough quarter-byte-per-pixel scan estimate; the
        // writer grows past it when the image compresses poorly.
        let capacity = 1024 + (width as usize * height as usize) / 4;
        let mut writer = BitWriter::with_capacity(capacity)?;

        let quant_tables = QuantTables::build(self.quality);

        let mut markers = MarkerWriter::new(&mut writer);
        markers.write_soi()?;
        if self.jfif {
            markers.write_jfif_app0()?;
        }
        markers.write_sof0(width as u16, height as u16)?;
        markers.write_dqt(&quant_tables)?;
        markers.write_dht()?;
        markers.write_sos()?;

        // Partial MCUs at the right and bottom edges still get coded, with
        // out-of-bounds samples reading as black.
        let mcus_x = width.div_ceil(MCU_WIDTH);
        let mcus_y = height.div_ceil(MCU_HEIGHT);

        let mut entropy = EntropyEncoder::new(&mut writer);
        let mut block: FloatBlock = [0.0; DCTSIZE2];
        for mcu_y in 0..mcus_y {
            for mcu_x in 0..mcus_x {
                for component in Component::ALL {
                    let (h_samp, v_samp) = component.sampling_factors();
                    for block_y in 0..v_samp {
                        for block_x in 0..h_samp {
                            sample::fill_block(
                                source, component, mcu_x, mcu_y, block_x, block_y, &mut block,
                            );
                            dct::forward_dct_8x8(&mut block);
                            let coeffs = quantize_block(&block, quant_tables.table(component));
                            entropy.encode_block(&coeffs, component)?;
                        }
                    }
                }
            }
        }
        entropy.finish()?;

        let mut markers = MarkerWriter::new(&mut writer);
        markers.write_eoi()?;

        Ok(writer.into_bytes())
    }
}
