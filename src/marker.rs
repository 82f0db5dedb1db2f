//! JPEG marker emission.
//!
//! Writes the marker segments framing a baseline scan:
//! - SOI (Start of Image)
//! - APP0 (JFIF header, optional)
//! - SOF0 (Start of Frame, baseline DCT)
//! - DQT (Define Quantization Table)
//! - DHT (Define Huffman Table)
//! - SOS (Start of Scan)
//! - EOI (End of Image)
//!
//! Segment lengths are fixed by the baseline layout, so every length field
//! is computed before its body goes out.
//!
//! Reference: ITU-T T.81 Section B

use crate::bitstream::BitWriter;
use crate::consts::{
    AC_CHROMINANCE_BITS, AC_CHROMINANCE_VALUES, AC_LUMINANCE_BITS, AC_LUMINANCE_VALUES,
    DC_CHROMINANCE_BITS, DC_CHROMINANCE_VALUES, DC_LUMINANCE_BITS, DC_LUMINANCE_VALUES, DCTSIZE2,
    JPEG_APP0, JPEG_DHT, JPEG_DQT, JPEG_EOI, JPEG_NATURAL_ORDER, JPEG_SOF0, JPEG_SOI, JPEG_SOS,
};
use crate::error::Result;
use crate::quant::QuantTables;
use crate::types::Component;

/// JFIF identifier string.
const JFIF_ID: [u8; 5] = *b"JFIF\0";

/// JFIF version 1.01.
const JFIF_VERSION: [u8; 2] = [1, 1];

/// Sample precision of a baseline frame.
const SAMPLE_PRECISION: u8 = 8;

/// Marker writer emitting into the shared output stream.
pub struct MarkerWriter<'a> {
    writer: &'a mut BitWriter,
}

impl<'a> MarkerWriter<'a> {
    /// Create a marker writer on top of `writer`.
    pub fn new(writer: &'a mut BitWriter) -> Self {
        Self { writer }
    }

    /// Write a single byte.
    fn emit_byte(&mut self, byte: u8) -> Result<()> {
        self.writer.write_bytes(&[byte])
    }

    /// Write a 2-byte value in big-endian order.
    fn emit_2bytes(&mut self, value: u16) -> Result<()> {
        self.writer.write_bytes(&[(value >> 8) as u8, value as u8])
    }

    /// Write a marker (0xFF followed by the marker code).
    fn emit_marker(&mut self, marker: u8) -> Result<()> {
        self.writer.write_bytes(&[0xFF, marker])
    }

    /// Write the Start of Image marker.
    pub fn write_soi(&mut self) -> Result<()> {
        self.emit_marker(JPEG_SOI)
    }

    /// Write the End of Image marker.
    pub fn write_eoi(&mut self) -> Result<()> {
        self.emit_marker(JPEG_EOI)
    }

    /// Write the APP0 (JFIF) segment: version 1.01, aspect ratio 1:1 with
    /// no density unit, no thumbnail.
    pub fn write_jfif_app0(&mut self) -> Result<()> {
        self.emit_marker(JPEG_APP0)?;

        // Length: 2 (length) + 5 (identifier) + 2 (version) + 1 (units) +
        //         2 (x_density) + 2 (y_density) + 1 (thumbnail_width) +
        //         1 (thumbnail_height) = 16
        self.emit_2bytes(16)?;

        self.writer.write_bytes(&JFIF_ID)?;
        self.writer.write_bytes(&JFIF_VERSION)?;

        self.emit_byte(0)?; // no density unit, densities give aspect only
        self.emit_2bytes(1)?;
        self.emit_2bytes(1)?;

        self.emit_byte(0)?; // thumbnail width
        self.emit_byte(0) // thumbnail height
    }

    /// Write both quantization tables in one DQT segment, zigzag order,
    /// 8-bit precision. Luma goes to slot 0, chroma to slot 1.
    pub fn write_dqt(&mut self, tables: &QuantTables) -> Result<()> {
        self.emit_marker(JPEG_DQT)?;
        self.emit_2bytes(2 + 2 * (1 + DCTSIZE2 as u16))?;

        for id in [0u8, 1] {
            self.emit_byte(id)?; // Pq = 0 (8-bit), Tq = id
            let table = tables.table_by_id(id);
            for &natural in JPEG_NATURAL_ORDER.iter() {
                self.emit_byte(table[natural])?;
            }
        }
        Ok(())
    }

    /// Write the SOF0 frame header for an 8-bit YCbCr 4:2:0 frame.
    pub fn write_sof0(&mut self, width: u16, height: u16) -> Result<()> {
        self.emit_marker(JPEG_SOF0)?;
        self.emit_2bytes(2 + 6 + 3 * Component::ALL.len() as u16)?;

        self.emit_byte(SAMPLE_PRECISION)?;
        // Number of lines first, then samples per line (B.2.2).
        self.emit_2bytes(height)?;
        self.emit_2bytes(width)?;

        self.emit_byte(Component::ALL.len() as u8)?;
        for component in Component::ALL {
            self.emit_byte(component.id())?;
            let (h, v) = component.sampling_factors();
            self.emit_byte(((h as u8) << 4) | v as u8)?;
            self.emit_byte(component.quant_table_id())?;
        }
        Ok(())
    }

    /// Write all four standard Huffman tables in one DHT segment.
    pub fn write_dht(&mut self) -> Result<()> {
        let tables: [(u8, &[u8; 17], &[u8]); 4] = [
            (0x00, &DC_LUMINANCE_BITS, &DC_LUMINANCE_VALUES),
            (0x10, &AC_LUMINANCE_BITS, &AC_LUMINANCE_VALUES),
            (0x01, &DC_CHROMINANCE_BITS, &DC_CHROMINANCE_VALUES),
            (0x11, &AC_CHROMINANCE_BITS, &AC_CHROMINANCE_VALUES),
        ];

        let mut length = 2u16;
        for (_, _, values) in &tables {
            length += 1 + 16 + values.len() as u16;
        }

        self.emit_marker(JPEG_DHT)?;
        self.emit_2bytes(length)?;

        for (class_id, bits, values) in tables {
            self.emit_byte(class_id)?; // Tc in the high nibble, Th in the low
            self.writer.write_bytes(&bits[1..])?;
            self.writer.write_bytes(values)?;
        }
        Ok(())
    }

    /// Write the SOS header for the single interleaved baseline scan.
    pub fn write_sos(&mut self) -> Result<()> {
        self.emit_marker(JPEG_SOS)?;
        self.emit_2bytes(2 + 1 + 2 * Component::ALL.len() as u16 + 3)?;

        self.emit_byte(Component::ALL.len() as u8)?;
        for component in Component::ALL {
            self.emit_byte(component.id())?;
            let (dc, ac) = component.huff_table_ids();
            self.emit_byte((dc << 4) | ac)?;
        }

        self.emit_byte(0)?; // Ss
        self.emit_byte(63)?; // Se
        self.emit_byte(0) // Ah/Al
    }
}
