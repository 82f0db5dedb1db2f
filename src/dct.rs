//! Forward DCT (Discrete Cosine Transform) implementation.
//!
//! This implements the Arai-Agui-Nakajima algorithm for the 8x8 DCT in
//! floating point: 5 multiplies and 29 adds per 1-D transform, with the
//! remaining scale factors removed in a single pass at the end. A 2-D DCT
//! is done by 1-D DCT on rows followed by 1-D DCT on columns.
//!
//! After the scale pass the output holds true ITU-T T.81 A.3.3 coefficient
//! values, so quantization tables apply unmodified.
//!
//! Reference: Arai, Y., Agui, T. and Nakajima, M., "A Fast DCT-SQ Scheme
//! for Images", Transactions IEICE, E-71, 1988, pp. 1095-1097.

use crate::consts::{AAN_SCALE_FACTOR, DCTSIZE, DCTSIZE2};
use crate::types::FloatBlock;
use multiversion::multiversion;

// Butterfly constants: cosines at 16ths of a circle.
const F_0_707106781: f32 = 0.707_106_781_186_547_5; // cos(4pi/16)
const F_0_541196100: f32 = 0.541_196_100_146_197; // cos(2pi/16) - cos(6pi/16)
const F_1_306562965: f32 = 1.306_562_964_876_376_5; // cos(2pi/16) + cos(6pi/16)
const F_0_382683433: f32 = 0.382_683_432_365_089_77; // cos(6pi/16)

/// Perform the forward DCT on one 8x8 block, in place.
///
/// Input: 64 level-shifted samples in row-major order, nominally -128..=127.
/// Output: 64 DCT coefficients in row-major order, DC at index 0.
///
/// Uses `multiversion` for automatic SIMD optimization via autovectorization.
#[multiversion(targets(
    "x86_64+avx2",
    "x86_64+sse4.1",
    "x86+avx2",
    "x86+sse4.1",
    "aarch64+neon",
))]
pub fn forward_dct_8x8(block: &mut FloatBlock) {
    // Pass 1: process rows.
    for row in 0..DCTSIZE {
        let base = row * DCTSIZE;

        let tmp0 = block[base] + block[base + 7];
        let tmp7 = block[base] - block[base + 7];
        let tmp1 = block[base + 1] + block[base + 6];
        let tmp6 = block[base + 1] - block[base + 6];
        let tmp2 = block[base + 2] + block[base + 5];
        let tmp5 = block[base + 2] - block[base + 5];
        let tmp3 = block[base + 3] + block[base + 4];
        let tmp4 = block[base + 3] - block[base + 4];

        // Even part
        let tmp10 = tmp0 + tmp3;
        let tmp13 = tmp0 - tmp3;
        let tmp11 = tmp1 + tmp2;
        let tmp12 = tmp1 - tmp2;

        block[base] = tmp10 + tmp11;
        block[base + 4] = tmp10 - tmp11;

        let z1 = (tmp12 + tmp13) * F_0_707106781;
        block[base + 2] = tmp13 + z1;
        block[base + 6] = tmp13 - z1;

        // Odd part
        let tmp10 = tmp4 + tmp5;
        let tmp11 = tmp5 + tmp6;
        let tmp12 = tmp6 + tmp7;

        let z5 = (tmp10 - tmp12) * F_0_382683433;
        let z2 = F_0_541196100 * tmp10 + z5;
        let z4 = F_1_306562965 * tmp12 + z5;
        let z3 = tmp11 * F_0_707106781;

        let z11 = tmp7 + z3;
        let z13 = tmp7 - z3;

        block[base + 5] = z13 + z2;
        block[base + 3] = z13 - z2;
        block[base + 1] = z11 + z4;
        block[base + 7] = z11 - z4;
    }

    // Pass 2: process columns.
    for col in 0..DCTSIZE {
        let tmp0 = block[col] + block[col + 56];
        let tmp7 = block[col] - block[col + 56];
        let tmp1 = block[col + 8] + block[col + 48];
        let tmp6 = block[col + 8] - block[col + 48];
        let tmp2 = block[col + 16] + block[col + 40];
        let tmp5 = block[col + 16] - block[col + 40];
        let tmp3 = block[col + 24] + block[col + 32];
        let tmp4 = block[col + 24] - block[col + 32];

        // Even part
        let tmp10 = tmp0 + tmp3;
        let tmp13 = tmp0 - tmp3;
        let tmp11 = tmp1 + tmp2;
        let tmp12 = tmp1 - tmp2;

        block[col] = tmp10 + tmp11;
        block[col + 32] = tmp10 - tmp11;

        let z1 = (tmp12 + tmp13) * F_0_707106781;
        block[col + 16] = tmp13 + z1;
        block[col + 48] = tmp13 - z1;

        // Odd part
        let tmp10 = tmp4 + tmp5;
        let tmp11 = tmp5 + tmp6;
        let tmp12 = tmp6 + tmp7;

        let z5 = (tmp10 - tmp12) * F_0_382683433;
        let z2 = F_0_541196100 * tmp10 + z5;
        let z4 = F_1_306562965 * tmp12 + z5;
        let z3 = tmp11 * F_0_707106781;

        let z11 = tmp7 + z3;
        let z13 = tmp7 - z3;

        block[col + 40] = z13 + z2;
        block[col + 24] = z13 - z2;
        block[col + 8] = z11 + z4;
        block[col + 56] = z11 - z4;
    }

    // Remove the AAN scaling so coefficients match the textbook transform.
    for row in 0..DCTSIZE {
        for col in 0..DCTSIZE {
            block[row * DCTSIZE + col] /=
                AAN_SCALE_FACTOR[row] * AAN_SCALE_FACTOR[col] * DCTSIZE as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Textbook O(n^4) DCT in f64, straight from the A.3.3 definition.
    fn reference_dct(samples: &FloatBlock) -> [f64; DCTSIZE2] {
        let mut out = [0.0f64; DCTSIZE2];
        for v in 0..DCTSIZE {
            for u in 0..DCTSIZE {
                let cu = if u == 0 { 1.0 / 2f64.sqrt() } else { 1.0 };
                let cv = if v == 0 { 1.0 / 2f64.sqrt() } else { 1.0 };
                let mut sum = 0.0;
                for y in 0..DCTSIZE {
                    for x in 0..DCTSIZE {
                        sum += f64::from(samples[y * DCTSIZE + x])
                            * (((2 * x + 1) * u) as f64 * PI / 16.0).cos()
                            * (((2 * y + 1) * v) as f64 * PI / 16.0).cos();
                    }
                }
                out[v * DCTSIZE + u] = 0.25 * cu * cv * sum;
            }
        }
        out
    }

    fn pseudo_random_block(seed: u32) -> FloatBlock {
        let mut state = seed;
        let mut block = [0.0f32; DCTSIZE2];
        for value in block.iter_mut() {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            *value = ((state >> 16) & 0xFF) as f32 - 128.0;
        }
        block
    }

    #[test]
    fn test_constant_block_concentrates_in_dc() {
        let mut block = [100.0f32; DCTSIZE2];
        forward_dct_8x8(&mut block);
        assert!((block[0] - 800.0).abs() < 1e-2, "dc = {}", block[0]);
        for (i, &ac) in block.iter().enumerate().skip(1) {
            assert!(ac.abs() < 1e-3, "ac[{}] = {}", i, ac);
        }
    }

    #[test]
    fn test_extreme_blocks_stay_in_coefficient_range() {
        let mut low = [-128.0f32; DCTSIZE2];
        forward_dct_8x8(&mut low);
        assert!((low[0] + 1024.0).abs() < 1e-2);

        let mut high = [127.0f32; DCTSIZE2];
        forward_dct_8x8(&mut high);
        assert!((high[0] - 1016.0).abs() < 1e-2);
    }

    #[test]
    fn test_matches_textbook_transform() {
        for seed in [1u32, 0x2F6E_2B1, 0xDEAD_BEEF] {
            let samples = pseudo_random_block(seed);
            let expected = reference_dct(&samples);
            let mut actual = samples;
            forward_dct_8x8(&mut actual);
            for i in 0..DCTSIZE2 {
                let diff = (f64::from(actual[i]) - expected[i]).abs();
                assert!(
                    diff < 0.1,
                    "seed {:#x} coeff {}: fast {} vs reference {}",
                    seed,
                    i,
                    actual[i],
                    expected[i]
                );
            }
        }
    }

    #[test]
    fn test_horizontal_cosine_hits_single_coefficient() {
        // s(x, y) = cos((2x+1) * 3pi/16) should land entirely in F(3, 0).
        let mut block = [0.0f32; DCTSIZE2];
        for y in 0..DCTSIZE {
            for x in 0..DCTSIZE {
                block[y * DCTSIZE + x] =
                    (100.0 * ((2 * x + 1) as f64 * 3.0 * PI / 16.0).cos()) as f32;
            }
        }
        forward_dct_8x8(&mut block);
        // F(3,0) = (1/4) * C(3) * C(0) * 8 * 4 * 100 = 800 / sqrt(2)
        let expected = (800.0 / 2f64.sqrt()) as f32;
        for (i, &coeff) in block.iter().enumerate() {
            if i == 3 {
                assert!((coeff - expected).abs() < 0.05, "F(3,0) = {}", coeff);
            } else {
                assert!(coeff.abs() < 0.05, "coeff[{}] = {}", i, coeff);
            }
        }
    }

    #[test]
    fn test_linearity() {
        let a = pseudo_random_block(7);
        let b = pseudo_random_block(99);
        let mut sum = [0.0f32; DCTSIZE2];
        for i in 0..DCTSIZE2 {
            sum[i] = 0.5 * (a[i] + b[i]);
        }

        let (mut ta, mut tb, mut tsum) = (a, b, sum);
        forward_dct_8x8(&mut ta);
        forward_dct_8x8(&mut tb);
        forward_dct_8x8(&mut tsum);

        for i in 0..DCTSIZE2 {
            let expected = 0.5 * (ta[i] + tb[i]);
            assert!((tsum[i] - expected).abs() < 0.05, "coeff {}", i);
        }
    }
}
