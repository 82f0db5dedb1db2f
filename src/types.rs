//! Core type definitions for the encoder.

use std::fmt;

use crate::consts::DCTSIZE2;

// =============================================================================
// Bit codes
// =============================================================================

/// A variable-length bit code: the low `nbits` bits of `value`, emitted
/// MSB-first.
///
/// Invariants: `nbits <= 16` and all bits of `value` above `nbits` are zero.
/// Both Huffman codes and VLI-encoded integers are carried in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitCode {
    value: u16,
    nbits: u8,
}

impl BitCode {
    /// The empty code (zero bits). Table slots for unused symbols hold this.
    pub const EMPTY: BitCode = BitCode { value: 0, nbits: 0 };

    /// Create a bit code, masking `value` to its low `nbits` bits.
    #[inline]
    pub const fn new(value: u16, nbits: u8) -> Self {
        debug_assert!(nbits <= 16);
        let value = if nbits == 16 {
            value
        } else {
            value & ((1 << nbits) - 1)
        };
        BitCode { value, nbits }
    }

    /// The code bits, right-aligned.
    #[inline]
    pub const fn value(self) -> u16 {
        self.value
    }

    /// Number of significant bits.
    #[inline]
    pub const fn nbits(self) -> u8 {
        self.nbits
    }

    /// Whether this slot carries a code at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.nbits == 0
    }
}

impl fmt::Display for BitCode {
    /// Renders the code MSB-first as `0`/`1` characters, e.g. `"110"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.nbits).rev() {
            f.write_str(if (self.value >> i) & 1 == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

// =============================================================================
// Components
// =============================================================================

/// The three image components of a baseline YCbCr scan.
///
/// The 4:2:0 three-component layout is fixed, so the per-component plan
/// (identifiers, sampling factors, table selectors) lives here as const
/// methods rather than in runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Luminance
    Y,
    /// Blue-difference chrominance
    Cb,
    /// Red-difference chrominance
    Cr,
}

impl Component {
    /// All components in scan order.
    pub const ALL: [Component; 3] = [Component::Y, Component::Cb, Component::Cr];

    /// Index into per-component state arrays (`prev_dc` etc.).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Component::Y => 0,
            Component::Cb => 1,
            Component::Cr => 2,
        }
    }

    /// Component identifier written in SOF0/SOS (1-based).
    #[inline]
    pub const fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// `(h_samp_factor, v_samp_factor)` under 4:2:0: luma 2x2, chroma 1x1.
    #[inline]
    pub const fn sampling_factors(self) -> (u32, u32) {
        match self {
            Component::Y => (2, 2),
            Component::Cb | Component::Cr => (1, 1),
        }
    }

    /// Quantization table destination selector (0 luma, 1 chroma).
    #[inline]
    pub const fn quant_table_id(self) -> u8 {
        match self {
            Component::Y => 0,
            Component::Cb | Component::Cr => 1,
        }
    }

    /// `(dc, ac)` Huffman table destination selectors.
    #[inline]
    pub const fn huff_table_ids(self) -> (u8, u8) {
        match self {
            Component::Y => (0, 0),
            Component::Cb | Component::Cr => (1, 1),
        }
    }

    /// Whether this component uses the luminance tables.
    #[inline]
    pub const fn is_luma(self) -> bool {
        matches!(self, Component::Y)
    }
}

// =============================================================================
// Block types
// =============================================================================

/// An 8x8 block of samples or DCT coefficients in natural (row-major)
/// order, in the pipeline's working precision.
pub type FloatBlock = [f32; DCTSIZE2];

/// An 8x8 block of quantized coefficients in natural order.
pub type CoefBlock = [i16; DCTSIZE2];
