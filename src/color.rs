//! Color space conversion routines.
//!
//! RGB to YCbCr conversion following the CCIR 601-1 (BT.601) standard over
//! the full 0..=255 range, as used by JPEG. All three channels come out in
//! floating point so the forward DCT sees unrounded samples.
//!
//! The conversion equations are:
//! ```text
//! Y  =  0.299 * R + 0.587 * G + 0.114 * B
//! Cb = -0.168735892 * R - 0.331264108 * G + 0.5 * B + 128
//! Cr =  0.5 * R - 0.418687589 * G - 0.081312411 * B + 128
//! ```
//!
//! Luma covers 0..=255; both chroma channels are centered on 128 and land in
//! 0.5..=255.5.

use crate::types::Component;

const Y_R: f32 = 0.299;
const Y_G: f32 = 0.587;
const Y_B: f32 = 0.114;

const CB_R: f32 = -0.168_735_892;
const CB_G: f32 = -0.331_264_108;
const CB_B: f32 = 0.5;

const CR_R: f32 = 0.5;
const CR_G: f32 = -0.418_687_589;
const CR_B: f32 = -0.081_312_411;

/// Center value for Cb/Cr.
const CBCR_CENTER: f32 = 128.0;

/// Luma for one RGB pixel.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    Y_R * f32::from(r) + Y_G * f32::from(g) + Y_B * f32::from(b)
}

/// Blue-difference chroma for one RGB pixel.
#[inline]
pub fn chroma_blue(r: u8, g: u8, b: u8) -> f32 {
    CB_R * f32::from(r) + CB_G * f32::from(g) + CB_B * f32::from(b) + CBCR_CENTER
}

/// Red-difference chroma for one RGB pixel.
#[inline]
pub fn chroma_red(r: u8, g: u8, b: u8) -> f32 {
    CR_R * f32::from(r) + CR_G * f32::from(g) + CR_B * f32::from(b) + CBCR_CENTER
}

/// The channel of `component` for one `[r, g, b]` pixel.
#[inline]
pub fn ycbcr_component(rgb: [u8; 3], component: Component) -> f32 {
    let [r, g, b] = rgb;
    match component {
        Component::Y => luma(r, g, b),
        Component::Cb => chroma_blue(r, g, b),
        Component::Cr => chroma_red(r, g, b),
    }
}
