//! sRGB transfer function and its inverse.
//!
//! The codec does all of its arithmetic in linear light and only touches
//! gamma-encoded sRGB bytes at the edges. Both directions reproduce the
//! reference implementation exactly: `linear_to_srgb` truncates
//! `v * 255 + 0.5` rather than rounding, because encoded hashes must
//! byte-match across implementations.

use std::sync::LazyLock;

/// Exact sRGB-to-linear table for all 256 byte values, built on first use.
static SRGB_TO_LINEAR_LUT: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut lut = [0.0f64; 256];
    for (byte, slot) in lut.iter_mut().enumerate() {
        let v = byte as f64 / 255.0;
        *slot = if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        };
    }
    lut
});

/// Convert a gamma-encoded sRGB byte (0..=255) to linear light (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use previewhash_core::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    SRGB_TO_LINEAR_LUT[value as usize]
}

/// Convert linear light to a gamma-encoded sRGB byte.
///
/// Input is clamped to \[0.0, 1.0\]. The `+ 0.5` followed by truncation
/// reproduces the reference's `Math.trunc(v * 255 + 0.5)` exactly; keep
/// the operation sequence as-is or encoded hashes stop byte-matching.
///
/// # Examples
///
/// ```
/// use previewhash_core::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(-0.5), 0);
/// assert_eq!(linear_to_srgb(1.5), 255);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let scaled = if v <= 0.003_130_8 {
        v * 12.92 * 255.0 + 0.5
    } else {
        (1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5
    };
    scaled.trunc() as u8
}

/// Compute `sign(value) * |value|^exp`.
///
/// Used for the perceptual companding of AC components: magnitudes are
/// square-rooted before quantization and squared after dequantization.
///
/// # Examples
///
/// ```
/// use previewhash_core::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-12);
/// assert!((sign_pow(-4.0, 0.5) + 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_to_linear_matches_closed_form() {
        for byte in 0..=255u8 {
            let v = byte as f64 / 255.0;
            let expected = if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            };
            assert_eq!(srgb_to_linear(byte), expected, "mismatch at {byte}");
        }
    }

    #[test]
    fn srgb_to_linear_is_monotonic() {
        let mut prev = srgb_to_linear(0);
        for byte in 1..=255u8 {
            let curr = srgb_to_linear(byte);
            assert!(curr > prev, "not monotonic at {byte}");
            prev = curr;
        }
    }

    #[test]
    fn linear_to_srgb_boundaries() {
        assert_eq!(linear_to_srgb(0.0), 0);
        assert_eq!(linear_to_srgb(1.0), 255);
        assert_eq!(linear_to_srgb(-1.0), 0);
        assert_eq!(linear_to_srgb(2.0), 255);
    }

    #[test]
    fn linear_to_srgb_threshold_is_continuous_enough() {
        let below = linear_to_srgb(0.0031);
        let above = linear_to_srgb(0.0032);
        assert!(above >= below);
        assert!(above - below <= 1);
    }

    #[test]
    fn byte_roundtrip_is_identity() {
        // The forward table is exact and the inverse rounds to nearest,
        // so every byte must survive a full roundtrip unchanged.
        for byte in 0..=255u8 {
            assert_eq!(linear_to_srgb(srgb_to_linear(byte)), byte);
        }
    }

    #[test]
    fn sign_pow_preserves_sign() {
        assert!((sign_pow(9.0, 0.5) - 3.0).abs() < 1e-12);
        assert!((sign_pow(-9.0, 0.5) + 3.0).abs() < 1e-12);
        assert_eq!(sign_pow(0.0, 2.0), 0.0);
        assert!((sign_pow(-0.5, 2.0) + 0.25).abs() < 1e-12);
    }
}
