//! Block extraction with 4:2:0 chroma subsampling.
//!
//! Fills 8x8 sample blocks straight from the pixel source: luma reads one
//! pixel per sample, chroma reads every second pixel in both directions
//! (nearest sample, no averaging). Samples are level-shifted to -128..=127
//! on the way in, and positions past the image edge read as black.
//!
//! Reference: ITU-T T.81 A.1.1 (sampling factors), A.3.1 (level shift).

use crate::color;
use crate::consts::{DCTSIZE, MAX_SAMP_FACTOR, MCU_HEIGHT, MCU_WIDTH};
use crate::encode::PixelSource;
use crate::types::{Component, FloatBlock};

/// Mid-point of the 8-bit sample range, removed before the DCT.
const LEVEL_SHIFT: f32 = 128.0;

/// One pixel, with positions past the edge reading as black.
#[inline]
fn sample_rgb<P: PixelSource>(source: &P, x: u32, y: u32) -> [u8; 3] {
    if x < source.width() && y < source.height() {
        source.rgb(x, y)
    } else {
        [0, 0, 0]
    }
}

/// Fill one component block of the MCU at (`mcu_x`, `mcu_y`).
///
/// `block_x` and `block_y` select the block within the component's sampling
/// grid: 0..2 each for luma, always 0 for chroma. Output samples are in
/// row-major order, level-shifted.
pub fn fill_block<P: PixelSource>(
    source: &P,
    component: Component,
    mcu_x: u32,
    mcu_y: u32,
    block_x: u32,
    block_y: u32,
    block: &mut FloatBlock,
) {
    let (h_samp, v_samp) = component.sampling_factors();
    let x_step = MAX_SAMP_FACTOR / h_samp;
    let y_step = MAX_SAMP_FACTOR / v_samp;
    let x_base = mcu_x * MCU_WIDTH + block_x * DCTSIZE as u32;
    let y_base = mcu_y * MCU_HEIGHT + block_y * DCTSIZE as u32;

    for b in 0..DCTSIZE {
        for a in 0..DCTSIZE {
            let x = x_base + a as u32 * x_step;
            let y = y_base + b as u32 * y_step;
            let rgb = sample_rgb(source, x, y);
            block[b * DCTSIZE + a] = color::ycbcr_component(rgb, component) - LEVEL_SHIFT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestImage {
        width: u32,
        height: u32,
        pixels: Vec<[u8; 3]>,
    }

    impl TestImage {
        fn from_fn<F: Fn(u32, u32) -> [u8; 3]>(width: u32, height: u32, f: F) -> Self {
            let mut pixels = Vec::new();
            for y in 0..height {
                for x in 0..width {
                    pixels.push(f(x, y));
                }
            }
            TestImage {
                width,
                height,
                pixels,
            }
        }
    }

    impl PixelSource for TestImage {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
            self.pixels[(y * self.width + x) as usize]
        }
    }

    fn gray(v: u8) -> [u8; 3] {
        [v, v, v]
    }

    #[test]
    fn test_luma_reads_every_pixel() {
        // Gray value encodes the position, so luma equals it exactly.
        let image = TestImage::from_fn(16, 16, |x, y| gray((16 * y + x) as u8));
        let mut block = [0.0f32; 64];
        fill_block(&image, Component::Y, 0, 0, 0, 0, &mut block);
        for b in 0..DCTSIZE {
            for a in 0..DCTSIZE {
                let expected = (16 * b + a) as f32 - 128.0;
                assert!((block[b * DCTSIZE + a] - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_luma_block_offsets_cover_the_mcu() {
        let image = TestImage::from_fn(16, 16, |x, y| gray((16 * y + x) as u8));
        let mut block = [0.0f32; 64];

        fill_block(&image, Component::Y, 0, 0, 1, 0, &mut block);
        assert!((block[0] - (8.0 - 128.0)).abs() < 1e-3);

        fill_block(&image, Component::Y, 0, 0, 0, 1, &mut block);
        assert!((block[0] - (128.0 - 128.0)).abs() < 1e-3);

        fill_block(&image, Component::Y, 0, 0, 1, 1, &mut block);
        assert!((block[0] - (136.0 - 128.0)).abs() < 1e-3);
    }

    #[test]
    fn test_chroma_takes_nearest_sample_not_average() {
        // Even columns solid red, odd columns solid green: chroma must see
        // only the even-column red pixels.
        let image = TestImage::from_fn(16, 16, |x, _| {
            if x % 2 == 0 {
                [255, 0, 0]
            } else {
                [0, 255, 0]
            }
        });
        let mut block = [0.0f32; 64];
        fill_block(&image, Component::Cr, 0, 0, 0, 0, &mut block);
        let expected = color::chroma_red(255, 0, 0) - 128.0;
        for &sample in block.iter() {
            assert!((sample - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_mcu_origin_advances_in_pixels() {
        let image = TestImage::from_fn(48, 16, |x, _| gray(if x >= 16 { 200 } else { 10 }));
        let mut block = [0.0f32; 64];
        fill_block(&image, Component::Y, 1, 0, 0, 0, &mut block);
        assert!((block[0] - (200.0 - 128.0)).abs() < 1e-3);

        fill_block(&image, Component::Cb, 1, 0, 0, 0, &mut block);
        // Gray is achromatic, so chroma sits at the 128 center.
        assert!(block[0].abs() < 1e-3);
    }

    #[test]
    fn test_out_of_bounds_reads_black() {
        let image = TestImage::from_fn(4, 4, |_, _| gray(250));
        let mut block = [0.0f32; 64];

        fill_block(&image, Component::Y, 0, 0, 0, 0, &mut block);
        // Inside the image: bright. Outside: black, level-shifted to -128.
        assert!((block[0] - (250.0 - 128.0)).abs() < 1e-3);
        assert!((block[7] + 128.0).abs() < 1e-3);
        assert!((block[63] + 128.0).abs() < 1e-3);

        fill_block(&image, Component::Cb, 0, 0, 0, 0, &mut block);
        // Black is achromatic too; padding chroma lands on the center.
        assert!(block[7].abs() < 1e-3);
    }

    #[test]
    fn test_second_luma_block_row_of_small_image_is_all_padding() {
        let image = TestImage::from_fn(4, 4, |_, _| gray(77));
        let mut block = [0.0f32; 64];
        fill_block(&image, Component::Y, 0, 0, 0, 1, &mut block);
        for &sample in block.iter() {
            assert!((sample + 128.0).abs() < 1e-3);
        }
    }
}
