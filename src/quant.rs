//! Quantization: quality-scaled table derivation and coefficient rounding.
//!
//! Tables derive from the Annex K bases via the libjpeg quality curve:
//! quality 50 keeps the base tables, lower qualities scale them up, higher
//! qualities scale them down (quality 100 degenerates to all-ones).
//!
//! Reference: ITU-T T.81 Annex K.1.

use crate::consts::{DCTSIZE2, QUANT_BASE_CHROMA, QUANT_BASE_LUMA};
use crate::types::{CoefBlock, Component, FloatBlock};

/// The pair of derived quantization tables, natural order, entries 1..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantTables {
    luma: [u8; DCTSIZE2],
    chroma: [u8; DCTSIZE2],
}

impl QuantTables {
    /// Derive both tables for a quality setting.
    ///
    /// Total for quality 0..=100; the encoder rejects larger values before
    /// calling this.
    pub fn build(quality: u8) -> Self {
        let factor = scale_factor(quality);
        QuantTables {
            luma: scale_table(&QUANT_BASE_LUMA, factor),
            chroma: scale_table(&QUANT_BASE_CHROMA, factor),
        }
    }

    /// The table serving a component.
    #[inline]
    pub fn table(&self, component: Component) -> &[u8; DCTSIZE2] {
        if component.is_luma() {
            &self.luma
        } else {
            &self.chroma
        }
    }

    /// The table for a DQT destination id (0 luma, 1 chroma).
    #[inline]
    pub fn table_by_id(&self, id: u8) -> &[u8; DCTSIZE2] {
        if id == 0 {
            &self.luma
        } else {
            &self.chroma
        }
    }
}

/// Percentage scaling factor for a quality setting.
fn scale_factor(quality: u8) -> i32 {
    let quality = i32::from(quality);
    if quality <= 0 {
        5000
    } else if quality < 50 {
        5000 / quality
    } else if quality <= 100 {
        200 - quality * 2
    } else {
        0
    }
}

/// Scale one base table, clamping entries into 1..=255.
fn scale_table(base: &[u16; DCTSIZE2], factor: i32) -> [u8; DCTSIZE2] {
    let mut table = [0u8; DCTSIZE2];
    for (out, &b) in table.iter_mut().zip(base.iter()) {
        let scaled = (i32::from(b) * factor + 50) / 100;
        *out = scaled.clamp(1, 255) as u8;
    }
    table
}

/// Quantize a block of DCT coefficients against a table.
///
/// Valid DCT output lands in -1024..=1023 after division by entries >= 1.
pub fn quantize_block(coeffs: &FloatBlock, table: &[u8; DCTSIZE2]) -> CoefBlock {
    let mut out = [0i16; DCTSIZE2];
    for (i, q) in out.iter_mut().enumerate() {
        *q = quantize(coeffs[i], table[i]);
    }
    out
}

/// Round `coeff / divisor` to the nearest integer.
///
/// The 0x4000 bias moves the value away from zero before the truncating
/// cast, so the result is floor(q + 0.5) for either sign.
#[inline]
fn quantize(coeff: f32, divisor: u8) -> i16 {
    const BIAS: i32 = 0x4000;
    let q = coeff / f32::from(divisor);
    ((f64::from(q) + f64::from(BIAS) + 0.5) as i32 - BIAS) as i16
}
