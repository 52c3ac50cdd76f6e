//! Color temperature and chromaticity conversions.
//!
//! Converts correlated color temperature (Kelvin) to CIE 1931 xy via the
//! Krystek polynomial approximation of the Planckian locus, and on to
//! gamma-encoded 8-bit sRGB. The inverse sRGB-to-xy path exists for
//! consistency checks.
//!
//! Out-of-gamut inputs are clamped, never an error: for every Kelvin value
//! in the supported range the full pipeline yields channels in [0, 255].

use crate::constants::{PLANCKIAN_MAX_K, PLANCKIAN_MIN_K};

// sRGB piecewise gamma boundaries
const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;
const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Reciprocal color temperature in mireds. Perceptual color difference is
/// closer to linear in mireds than in Kelvin.
pub fn kelvin_to_mired(kelvin: f64) -> f64 {
    if kelvin > 0.0 { 1e6 / kelvin } else { 0.0 }
}

/// Convert color temperature to CIE 1931 xy chromaticity.
///
/// Uses the Krystek & Moritz polynomial approximations of the Planckian
/// locus, accurate from 1000K to 25000K; input outside that range is
/// clamped.
///
/// Reference: Krystek, M. (1985). "An algorithm to calculate correlated
/// colour temperature". Color Research & Application, 10(1), 38-40.
pub fn cct_to_xy(kelvin: f64) -> (f64, f64) {
    let t = kelvin.clamp(PLANCKIAN_MIN_K, PLANCKIAN_MAX_K);

    // Reciprocal temperature in thousands of Kelvin for numerical stability
    let inv_t = 1000.0 / t;

    let x = if t <= 4000.0 {
        -0.2661239 * inv_t.powi(3) - 0.2343589 * inv_t.powi(2) + 0.8776956 * inv_t + 0.179910
    } else {
        -3.0258469 * inv_t.powi(3) + 2.1070379 * inv_t.powi(2) + 0.2226347 * inv_t + 0.240390
    };

    let y = if t <= 2222.0 {
        -1.1063814 * x.powi(3) - 1.34811020 * x.powi(2) + 2.18555832 * x - 0.20219683
    } else if t <= 4000.0 {
        -0.9549476 * x.powi(3) - 1.37418593 * x.powi(2) + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x.powi(3) - 5.87338670 * x.powi(2) + 3.75112997 * x - 0.37001483
    };

    (x, y)
}

/// Convert CIE xy chromaticity to gamma-encoded 8-bit sRGB.
///
/// Treats Y=1, recovers XYZ, applies the XYZ-to-linear-sRGB matrix, clamps
/// negatives, rescales uniformly when any channel exceeds 1 (preserving
/// hue/saturation ratios), then gamma-encodes and quantizes.
pub fn xy_to_rgb(x: f64, y: f64) -> [u8; 3] {
    let (x_big, y_big, z_big) = if y != 0.0 {
        (x / y, 1.0, (1.0 - x - y) / y)
    } else {
        (0.0, 1.0, 0.0)
    };

    let mut r = 3.2404542 * x_big - 1.5371385 * y_big - 0.4985314 * z_big;
    let mut g = -0.9692660 * x_big + 1.8760108 * y_big + 0.0415560 * z_big;
    let mut b = 0.0556434 * x_big - 0.2040259 * y_big + 1.0572252 * z_big;

    r = r.max(0.0);
    g = g.max(0.0);
    b = b.max(0.0);

    // Rescale uniformly so the brightest channel saturates instead of clipping
    let max_component = r.max(g).max(b);
    if max_component > 1.0 {
        r /= max_component;
        g /= max_component;
        b /= max_component;
    }

    [
        quantize(linear_to_srgb(r)),
        quantize(linear_to_srgb(g)),
        quantize(linear_to_srgb(b)),
    ]
}

/// Convert color temperature straight through to 8-bit sRGB.
pub fn cct_to_rgb(kelvin: f64) -> [u8; 3] {
    let (x, y) = cct_to_xy(kelvin);
    xy_to_rgb(x, y)
}

/// Convert gamma-encoded 8-bit sRGB back to CIE xy chromaticity.
pub fn rgb_to_xy(rgb: [u8; 3]) -> (f64, f64) {
    let r = srgb_to_linear(f64::from(rgb[0]) / 255.0);
    let g = srgb_to_linear(f64::from(rgb[1]) / 255.0);
    let b = srgb_to_linear(f64::from(rgb[2]) / 255.0);

    let x_big = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y_big = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z_big = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    let sum = x_big + y_big + z_big;
    if sum == 0.0 {
        return (0.0, 0.0);
    }
    (x_big / sum, y_big / sum)
}

/// sRGB piecewise gamma encoding: linear segment below the threshold,
/// power-law above.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB piecewise gamma decoding.
fn srgb_to_linear(c: f64) -> f64 {
    if c > SRGB_DECODE_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn quantize(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
