//! Huffman entropy encoder for the scan body.
//!
//! Implements baseline Huffman encoding of quantized DCT coefficients:
//! - DC coefficients with differential coding against the previous block
//! - AC coefficients with run-length coding in zigzag order
//! - EOB (End of Block) and ZRL (Zero Run Length) escape symbols
//!
//! Reference: ITU-T T.81 Section F.1.2

use crate::bitstream::BitWriter;
use crate::consts::{DCTSIZE2, JPEG_NATURAL_ORDER};
use crate::error::Result;
use crate::huffman::{HuffmanTables, VliTable};
use crate::types::{CoefBlock, Component};

/// EOB (End of Block) symbol, run=0 size=0.
const EOB: u8 = 0x00;

/// ZRL (Zero Run Length) symbol, 16 consecutive zeros.
const ZRL: u8 = 0xF0;

/// Entropy encoder state for a single scan.
///
/// Owns the derived Huffman and VLI tables and tracks one DC predictor per
/// component. Blocks must arrive in MCU interleave order; the predictors
/// start at zero and are never reset since baseline scans without restart
/// markers run the whole image as one entropy segment.
pub struct EntropyEncoder<'a> {
    writer: &'a mut BitWriter,
    tables: HuffmanTables,
    vli: VliTable,
    last_dc_val: [i32; 3],
}

impl<'a> EntropyEncoder<'a> {
    /// Create an encoder writing into `writer`, with freshly derived tables.
    pub fn new(writer: &'a mut BitWriter) -> Self {
        EntropyEncoder {
            writer,
            tables: HuffmanTables::standard(),
            vli: VliTable::build(),
            last_dc_val: [0; 3],
        }
    }

    /// Encode one quantized 8x8 block.
    ///
    /// `block` holds coefficients in natural (row-major) order; the zigzag
    /// reordering happens during the AC walk.
    pub fn encode_block(&mut self, block: &CoefBlock, component: Component) -> Result<()> {
        self.encode_dc(i32::from(block[0]), component)?;
        self.encode_ac(block, component)
    }

    /// Pad the scan to a byte boundary. Call once after the last block.
    pub fn finish(self) -> Result<()> {
        self.writer.finish()
    }

    /// Encode the DC coefficient as a difference from the previous block of
    /// the same component (Section F.1.2.1).
    fn encode_dc(&mut self, dc: i32, component: Component) -> Result<()> {
        let diff = dc - self.last_dc_val[component.index()];
        self.last_dc_val[component.index()] = dc;

        let amplitude = self.vli.get(diff);
        let code = self.tables.dc(component).get_code(amplitude.nbits());
        self.writer.put_bits(code)?;
        self.writer.put_bits(amplitude)
    }

    /// Encode the 63 AC coefficients with run-length coding
    /// (Section F.1.2.2).
    fn encode_ac(&mut self, block: &CoefBlock, component: Component) -> Result<()> {
        let ac_table = self.tables.ac(component);
        let mut run = 0u32;

        for &natural in &JPEG_NATURAL_ORDER[1..DCTSIZE2] {
            let coeff = block[natural];
            if coeff == 0 {
                run += 1;
                continue;
            }

            // A run longer than 15 needs ZRL escapes first.
            while run > 15 {
                self.writer.put_bits(ac_table.get_code(ZRL))?;
                run -= 16;
            }

            let amplitude = self.vli.get(i32::from(coeff));
            let symbol = ((run as u8) << 4) | amplitude.nbits();
            self.writer.put_bits(ac_table.get_code(symbol))?;
            self.writer.put_bits(amplitude)?;
            run = 0;
        }

        // Trailing zeros collapse into a single EOB.
        if run > 0 {
            self.writer.put_bits(ac_table.get_code(EOB))?;
        }
        Ok(())
    }
}
