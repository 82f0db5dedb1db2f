//! Constants for baseline JPEG encoding.
//!
//! Contains the fixed tables the encoder embeds verbatim:
//! - Annex K.1 base quantization tables (luma and chroma)
//! - Annex K.3 Huffman table specifications (bits / huffval pairs)
//! - The zig-zag scan permutation
//! - AAN DCT post-scale factors
//! - Marker codes used by the segment writers
//!
//! Reference: ITU-T T.81 Annex K.

/// The basic DCT block is 8x8 samples.
pub const DCTSIZE: usize = 8;

/// Number of elements in a DCT block.
pub const DCTSIZE2: usize = 64;

/// Maximum image dimension encodable in a SOF0 segment (16-bit field).
pub const MAX_DIMENSION: u32 = 65535;

/// Largest sampling factor in either direction (the 4:2:0 luma factor).
pub const MAX_SAMP_FACTOR: u32 = 2;

/// MCU width in pixels for 4:2:0 subsampling.
pub const MCU_WIDTH: u32 = DCTSIZE as u32 * MAX_SAMP_FACTOR;

/// MCU height in pixels for 4:2:0 subsampling.
pub const MCU_HEIGHT: u32 = DCTSIZE as u32 * MAX_SAMP_FACTOR;

// =============================================================================
// Marker codes (second byte after 0xFF)
// =============================================================================

/// Start of image
pub const JPEG_SOI: u8 = 0xD8;
/// End of image
pub const JPEG_EOI: u8 = 0xD9;
/// Start of frame, baseline sequential DCT
pub const JPEG_SOF0: u8 = 0xC0;
/// Define quantization table(s)
pub const JPEG_DQT: u8 = 0xDB;
/// Define Huffman table(s)
pub const JPEG_DHT: u8 = 0xC4;
/// Start of scan
pub const JPEG_SOS: u8 = 0xDA;
/// Application segment 0 (JFIF)
pub const JPEG_APP0: u8 = 0xE0;

// =============================================================================
// Zig-zag scan order
// =============================================================================

/// Map from zig-zag scan position to natural (row-major) block index.
///
/// `JPEG_NATURAL_ORDER[k]` is the natural index of the k-th coefficient
/// in zig-zag order; position 0 is the DC coefficient.
pub const JPEG_NATURAL_ORDER: [usize; DCTSIZE2] = [
    0, 1, 8, 16, 9, 2, 3, 10, //
    17, 24, 32, 25, 18, 11, 4, 5, //
    12, 19, 26, 33, 40, 48, 41, 34, //
    27, 20, 13, 6, 7, 14, 21, 28, //
    35, 42, 49, 56, 57, 50, 43, 36, //
    29, 22, 15, 23, 30, 37, 44, 51, //
    58, 59, 52, 45, 38, 31, 39, 46, //
    53, 60, 61, 54, 47, 55, 62, 63,
];

// =============================================================================
// Annex K.1 base quantization tables (natural order)
// =============================================================================

/// Luminance base quantization table (T.81 Table K.1).
pub const QUANT_BASE_LUMA: [u16; DCTSIZE2] = [
    16, 11, 10, 16, 24, 40, 51, 61, //
    12, 12, 14, 19, 26, 58, 60, 55, //
    14, 13, 16, 24, 40, 57, 69, 56, //
    14, 17, 22, 29, 51, 87, 80, 62, //
    18, 22, 37, 56, 68, 109, 103, 77, //
    24, 35, 55, 64, 81, 104, 113, 92, //
    49, 64, 78, 87, 103, 121, 120, 101, //
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Chrominance base quantization table (T.81 Table K.2).
pub const QUANT_BASE_CHROMA: [u16; DCTSIZE2] = [
    17, 18, 24, 47, 99, 99, 99, 99, //
    18, 21, 26, 66, 99, 99, 99, 99, //
    24, 26, 56, 99, 99, 99, 99, 99, //
    47, 66, 99, 99, 99, 99, 99, 99, //
    99, 99, 99, 99, 99, 99, 99, 99, //
    99, 99, 99, 99, 99, 99, 99, 99, //
    99, 99, 99, 99, 99, 99, 99, 99, //
    99, 99, 99, 99, 99, 99, 99, 99,
];

// =============================================================================
// Annex K.3 Huffman table specifications
// =============================================================================
//
// `bits[n]` (n in 1..=16) counts the codes of length n; index 0 is unused.
// The huffval arrays list symbols in order of increasing code length.

/// Luminance DC code-length counts (T.81 Table K.3).
pub const DC_LUMINANCE_BITS: [u8; 17] =
    [0, 0, 1, 5, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0];

/// Luminance DC symbols.
pub const DC_LUMINANCE_VALUES: [u8; 12] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
];

/// Chrominance DC code-length counts (T.81 Table K.4).
pub const DC_CHROMINANCE_BITS: [u8; 17] =
    [0, 0, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0];

/// Chrominance DC symbols.
pub const DC_CHROMINANCE_VALUES: [u8; 12] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
];

/// Luminance AC code-length counts (T.81 Table K.5).
pub const AC_LUMINANCE_BITS: [u8; 17] =
    [0, 0, 2, 1, 3, 3, 2, 4, 3, 5, 5, 4, 4, 0, 0, 1, 125];

/// Luminance AC symbols.
pub const AC_LUMINANCE_VALUES: [u8; 162] = [
    0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, //
    0x21, 0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, //
    0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08, //
    0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, //
    0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A, 0x16, //
    0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, //
    0x29, 0x2A, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, //
    0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, //
    0x4A, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, //
    0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, //
    0x6A, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, //
    0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, //
    0x8A, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, //
    0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, //
    0xA8, 0xA9, 0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, //
    0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, //
    0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, //
    0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2, //
    0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, //
    0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, //
    0xF9, 0xFA,
];

/// Chrominance AC code-length counts (T.81 Table K.6).
pub const AC_CHROMINANCE_BITS: [u8; 17] =
    [0, 0, 2, 1, 2, 4, 4, 3, 4, 7, 5, 4, 4, 0, 1, 2, 119];

/// Chrominance AC symbols.
pub const AC_CHROMINANCE_VALUES: [u8; 162] = [
    0x00, 0x01, 0x02, 0x03, 0x11, 0x04, 0x05, 0x21, //
    0x31, 0x06, 0x12, 0x41, 0x51, 0x07, 0x61, 0x71, //
    0x13, 0x22, 0x32, 0x81, 0x08, 0x14, 0x42, 0x91, //
    0xA1, 0xB1, 0xC1, 0x09, 0x23, 0x33, 0x52, 0xF0, //
    0x15, 0x62, 0x72, 0xD1, 0x0A, 0x16, 0x24, 0x34, //
    0xE1, 0x25, 0xF1, 0x17, 0x18, 0x19, 0x1A, 0x26, //
    0x27, 0x28, 0x29, 0x2A, 0x35, 0x36, 0x37, 0x38, //
    0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, //
    0x49, 0x4A, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, //
    0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, //
    0x69, 0x6A, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, //
    0x79, 0x7A, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, //
    0x88, 0x89, 0x8A, 0x92, 0x93, 0x94, 0x95, 0x96, //
    0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, //
    0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xB2, 0xB3, 0xB4, //
    0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, //
    0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xD2, //
    0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, //
    0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, //
    0xEA, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, //
    0xF9, 0xFA,
];

// =============================================================================
// AAN scale factors
// =============================================================================

/// Post-scale factors for the AAN DCT: `1.0` then `cos(k*pi/16) * sqrt(2)`
/// for k = 1..7. A 2-D coefficient at (i, j) is descaled by
/// `AAN_SCALE_FACTOR[i] * AAN_SCALE_FACTOR[j] * 8`.
pub const AAN_SCALE_FACTOR: [f32; DCTSIZE] = [
    1.000_000_0,
    1.387_039_8,
    1.306_563_0,
    1.175_875_6,
    1.000_000_0,
    0.785_694_96,
    0.541_196_1,
    0.275_899_38,
];
