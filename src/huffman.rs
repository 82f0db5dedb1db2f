//! Huffman code derivation for baseline entropy coding.
//!
//! Builds canonical code/length pairs from the standard BITS/HUFFVAL table
//! descriptions, plus a precomputed table of VLI amplitude codes covering
//! every coefficient value the baseline pipeline can produce.
//!
//! Reference: ITU-T T.81 Annex C (code derivation), Section F.1.2.1 (VLI).

use crate::consts::{
    AC_CHROMINANCE_BITS, AC_CHROMINANCE_VALUES, AC_LUMINANCE_BITS, AC_LUMINANCE_VALUES,
    DC_CHROMINANCE_BITS, DC_CHROMINANCE_VALUES, DC_LUMINANCE_BITS, DC_LUMINANCE_VALUES,
};
use crate::types::{BitCode, Component};

/// Entry count of the VLI lookup table: covers values -2048..=2047.
const VLI_SIZE: usize = 4096;

/// Mask folding a signed coefficient into its VLI table slot.
const VLI_MASK: i32 = 0xFFF;

/// A Huffman table expanded into per-symbol codes.
///
/// Unassigned symbols hold [`BitCode::EMPTY`]; the standard tables assign
/// every symbol the encoder can emit.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    codes: [BitCode; 256],
}

impl DerivedTable {
    /// Expand a BITS array (index 0 unused) and HUFFVAL list into codes.
    ///
    /// Codes are assigned in value-list order, counting up within a length
    /// and shifting left when the length grows, per Annex C.
    pub fn build(bits: &[u8; 17], values: &[u8]) -> Self {
        let mut codes = [BitCode::EMPTY; 256];
        // u32 so the trailing shift cannot overflow after the 16-bit codes.
        let mut code: u32 = 0;
        let mut k = 0;
        for len in 1..=16u8 {
            for _ in 0..bits[usize::from(len)] {
                codes[usize::from(values[k])] = BitCode::new(code as u16, len);
                code += 1;
                k += 1;
            }
            code <<= 1;
        }
        DerivedTable { codes }
    }

    /// Code for a symbol.
    #[inline]
    pub fn get_code(&self, symbol: u8) -> BitCode {
        self.codes[usize::from(symbol)]
    }
}

/// The four standard tables, selected per component.
#[derive(Debug, Clone)]
pub struct HuffmanTables {
    dc_luma: DerivedTable,
    ac_luma: DerivedTable,
    dc_chroma: DerivedTable,
    ac_chroma: DerivedTable,
}

impl HuffmanTables {
    /// Derive the Annex K.3 tables.
    pub fn standard() -> Self {
        HuffmanTables {
            dc_luma: DerivedTable::build(&DC_LUMINANCE_BITS, &DC_LUMINANCE_VALUES),
            ac_luma: DerivedTable::build(&AC_LUMINANCE_BITS, &AC_LUMINANCE_VALUES),
            dc_chroma: DerivedTable::build(&DC_CHROMINANCE_BITS, &DC_CHROMINANCE_VALUES),
            ac_chroma: DerivedTable::build(&AC_CHROMINANCE_BITS, &AC_CHROMINANCE_VALUES),
        }
    }

    /// DC table serving a component.
    #[inline]
    pub fn dc(&self, component: Component) -> &DerivedTable {
        if component.is_luma() {
            &self.dc_luma
        } else {
            &self.dc_chroma
        }
    }

    /// AC table serving a component.
    #[inline]
    pub fn ac(&self, component: Component) -> &DerivedTable {
        if component.is_luma() {
            &self.ac_luma
        } else {
            &self.ac_chroma
        }
    }
}

/// Category (bit count) of a coefficient amplitude.
///
/// 0 maps to 0 bits, otherwise the bit length of the magnitude.
#[inline]
pub fn vli_nbits(value: i32) -> u8 {
    if value == 0 {
        return 0;
    }
    (32 - value.unsigned_abs().leading_zeros()) as u8
}

/// Precomputed VLI amplitude codes for -2048..=2047.
///
/// DC differences span twice the coefficient range, so 12 bits of index
/// cover every value the scan can ask for.
#[derive(Debug, Clone)]
pub struct VliTable {
    codes: Box<[BitCode]>,
}

impl VliTable {
    /// Build the full table.
    ///
    /// Negative values store `value - 1` truncated to the category width,
    /// which is the one's-complement form Section F.1.2.1 calls for.
    pub fn build() -> Self {
        let mut codes = vec![BitCode::EMPTY; VLI_SIZE].into_boxed_slice();
        for value in -2048i32..=2047 {
            let nbits = vli_nbits(value);
            let raw = if value < 0 { value - 1 } else { value };
            codes[(value & VLI_MASK) as usize] = BitCode::new(raw as u16, nbits);
        }
        VliTable { codes }
    }

    /// Amplitude code for a coefficient or DC difference in -2048..=2047.
    #[inline]
    pub fn get(&self, value: i32) -> BitCode {
        self.codes[(value & VLI_MASK) as usize]
    }
}
