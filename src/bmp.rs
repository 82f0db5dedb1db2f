//! Uncompressed 24-bit BMP reading.
//!
//! Parses the 54-byte BITMAPFILEHEADER + BITMAPINFOHEADER pair and exposes
//! the pixel array as a [`PixelSource`]. Rows are stored bottom-up unless
//! the height is negative, columns run right-to-left when the width is
//! negative, samples sit in BGR order, and every row is padded to a
//! 4-byte boundary. The pixel array starts wherever `bfOffBits` points.
//!
//! Only the layout the encoder consumes is supported: 24 bits per pixel,
//! no compression.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::encode::PixelSource;
use crate::error::{Error, Result};

/// Size of the two fixed headers in front of a classic BMP.
const HEADER_SIZE: usize = 54;

/// Byte offset of the pixel-array offset field (`bfOffBits`).
const OFFSET_POS: usize = 10;

/// Byte offset of the signed width field.
const WIDTH_POS: usize = 18;

/// Byte offset of the signed height field.
const HEIGHT_POS: usize = 22;

/// Byte offset of the bits-per-pixel field.
const DEPTH_POS: usize = 28;

/// A decoded 24-bit BMP, oriented on access rather than up front.
#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<u8>,
    width: i32,
    height: i32,
    pixel_offset: usize,
    stride: usize,
}

impl Bitmap {
    /// Parse a BMP from a full in-memory file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::TruncatedBmp {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }
        if &data[..2] != b"BM" {
            return Err(Error::InvalidBmpSignature);
        }

        let depth = read_u16(&data, DEPTH_POS);
        if depth != 24 {
            return Err(Error::UnsupportedBmpDepth(depth));
        }

        let pixel_offset = read_u32(&data, OFFSET_POS) as usize;
        let width = read_i32(&data, WIDTH_POS);
        let height = read_i32(&data, HEIGHT_POS);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: width.unsigned_abs(),
                height: height.unsigned_abs(),
            });
        }

        // Rows are padded to 4-byte multiples.
        let stride = (3 + width.unsigned_abs() as usize * 3) & !3;

        let required = (pixel_offset as u64)
            + u64::from(height.unsigned_abs()) * (stride as u64);
        if (data.len() as u64) < required {
            return Err(Error::TruncatedBmp {
                expected: required as usize,
                actual: data.len(),
            });
        }

        Ok(Bitmap {
            data,
            width,
            height,
            pixel_offset,
            stride,
        })
    }

    /// Parse a BMP from a reader, consuming it to the end.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Parse a BMP file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }
}

impl PixelSource for Bitmap {
    fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        // Positive heights store the bottom row first; negative widths
        // mirror the columns.
        let row = if self.height < 0 {
            y
        } else {
            self.height.unsigned_abs() - 1 - y
        };
        let col = if self.width > 0 {
            x
        } else {
            self.width.unsigned_abs() - 1 - x
        };

        let pos = self.pixel_offset + row as usize * self.stride + col as usize * 3;
        [self.data[pos + 2], self.data[pos + 1], self.data[pos]]
    }
}

fn read_u16(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn read_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

fn read_i32(data: &[u8], pos: usize) -> i32 {
    read_u32(data, pos) as i32
}
