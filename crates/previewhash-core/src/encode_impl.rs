//! BlurHash encoding: RGBA thumbnail in, compact base83 string out.

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow};
use crate::dct::{self, BYTES_PER_PIXEL};
use crate::error::CodecError;

/// Largest width or height the codec will accept. Cost grows as
/// O(width * height * components), so callers are expected to hand in
/// downscaled thumbnails; this cap just bounds the damage if they don't.
pub(crate) const MAX_DIMENSION: u32 = 10_000;

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0",
        });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CodecError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be <= 10000",
        });
    }
    Ok(())
}

/// Pack a DC triplet into the 24-bit sRGB integer the format stores.
fn encode_dc(value: &[f64; 3]) -> u64 {
    let r = linear_to_srgb(value[0]) as u64;
    let g = linear_to_srgb(value[1]) as u64;
    let b = linear_to_srgb(value[2]) as u64;
    (r << 16) | (g << 8) | b
}

/// Quantize an AC triplet into a base-19^3 packed integer (0..=6858).
///
/// Each channel is companded with a square root, mapped onto the 19
/// quantization levels centred on 9 (zero), floored and clamped.
fn encode_ac(value: &[f64; 3], maximum_value: f64) -> u64 {
    let quantize = |channel: f64| -> u64 {
        (sign_pow(channel / maximum_value, 0.5) * 9.0 + 9.5)
            .floor()
            .clamp(0.0, 18.0) as u64
    };
    quantize(value[0]) * 19 * 19 + quantize(value[1]) * 19 + quantize(value[2])
}

/// Encode an RGBA image into a BlurHash string.
///
/// # Arguments
///
/// * `pixels` - Flat RGBA bytes in row-major order (4 bytes per pixel,
///   non-premultiplied; the alpha byte is ignored).
/// * `width` / `height` - Image dimensions in pixels.
/// * `components_x` / `components_y` - Detail level per axis (1..=9).
///
/// The result is always `4 + 2 * components_x * components_y`
/// characters long.
///
/// # Errors
///
/// Fails with [`CodecError::ComponentCountOutOfRange`] for component
/// counts outside 1..=9, [`CodecError::PixelBufferMismatch`] when the
/// buffer is not `width * height * 4` bytes, and
/// [`CodecError::InvalidDimensions`] for zero or oversized dimensions.
///
/// # Examples
///
/// ```
/// use previewhash_core::encode;
/// // A 2x2 solid red image, RGBA.
/// let pixels = [255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255];
/// let hash = encode(&pixels, 2, 2, 4, 3).unwrap();
/// assert_eq!(hash.len(), 4 + 2 * 4 * 3);
/// ```
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> Result<String, CodecError> {
    check_dimensions(width, height)?;
    if !(1..=9).contains(&components_x) {
        return Err(CodecError::ComponentCountOutOfRange {
            axis: "x",
            value: components_x,
        });
    }
    if !(1..=9).contains(&components_y) {
        return Err(CodecError::ComponentCountOutOfRange {
            axis: "y",
            value: components_y,
        });
    }

    let expected_len = (width as u64)
        .checked_mul(height as u64)
        .and_then(|v| v.checked_mul(BYTES_PER_PIXEL as u64))
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(CodecError::InvalidDimensions {
            width,
            height,
            reason: "dimensions overflow buffer size calculation",
        })?;
    if pixels.len() != expected_len {
        return Err(CodecError::PixelBufferMismatch {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let factors = dct::multiply_basis(
        pixels,
        width as usize,
        height as usize,
        components_x as usize,
        components_y as usize,
    );
    let dc = &factors[0];
    let ac = &factors[1..];

    let size_flag = (components_x - 1) + (components_y - 1) * 9;
    let mut hash = String::with_capacity(4 + 2 * factors.len());
    hash.push_str(&base83::encode(size_flag as u64, 1)?);

    // The quantized maximum fixes the scale every AC channel is encoded
    // against; a 1x1 grid has no AC terms and stores a literal zero.
    if ac.is_empty() {
        hash.push_str(&base83::encode(0, 1)?);
        hash.push_str(&base83::encode(encode_dc(dc), 4)?);
    } else {
        let actual_maximum = ac
            .iter()
            .flatten()
            .fold(0.0f64, |acc, &channel| acc.max(channel.abs()));
        let quantised_maximum = (actual_maximum * 166.0 - 0.5).floor().clamp(0.0, 82.0) as u64;
        let maximum_value = (quantised_maximum as f64 + 1.0) / 166.0;

        hash.push_str(&base83::encode(quantised_maximum, 1)?);
        hash.push_str(&base83::encode(encode_dc(dc), 4)?);
        for factor in ac {
            hash.push_str(&base83::encode(encode_ac(factor, maximum_value), 2)?);
        }
    }

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        pixels
    }

    #[test]
    fn size_flag_encodes_the_grid() {
        let pixels = solid_rgba(4, 4, [0, 0, 0]);
        let hash = encode(&pixels, 4, 4, 4, 3).unwrap();
        // (4-1) + (3-1)*9 = 21
        assert_eq!(base83::decode(&hash[0..1]).unwrap(), 21);
    }

    #[test]
    fn hash_length_follows_component_grid() {
        let pixels = solid_rgba(4, 4, [128, 128, 128]);
        for cx in 1..=9u32 {
            for cy in 1..=9u32 {
                let hash = encode(&pixels, 4, 4, cx, cy).unwrap();
                assert_eq!(hash.len(), 4 + 2 * (cx * cy) as usize, "grid {cx}x{cy}");
            }
        }
    }

    #[test]
    fn dc_only_grid_has_zero_maximum_digit() {
        let pixels = solid_rgba(2, 2, [100, 150, 200]);
        let hash = encode(&pixels, 2, 2, 1, 1).unwrap();
        assert_eq!(hash.len(), 6);
        assert_eq!(&hash[1..2], "0");
    }

    #[test]
    fn component_counts_are_validated() {
        let pixels = solid_rgba(4, 4, [0, 0, 0]);
        assert!(matches!(
            encode(&pixels, 4, 4, 0, 3),
            Err(CodecError::ComponentCountOutOfRange { axis: "x", value: 0 })
        ));
        assert!(matches!(
            encode(&pixels, 4, 4, 10, 3),
            Err(CodecError::ComponentCountOutOfRange { axis: "x", value: 10 })
        ));
        assert!(encode(&pixels, 4, 4, 4, 0).is_err());
        assert!(encode(&pixels, 4, 4, 4, 10).is_err());
    }

    #[test]
    fn buffer_length_is_validated() {
        let pixels = vec![0u8; 4 * 4 * 3]; // RGB, not RGBA
        assert!(matches!(
            encode(&pixels, 4, 4, 4, 3),
            Err(CodecError::PixelBufferMismatch {
                expected: 64,
                actual: 48
            })
        ));
    }

    #[test]
    fn dimensions_are_validated() {
        assert!(encode(&[], 0, 4, 4, 3).is_err());
        assert!(encode(&[], 4, 0, 4, 3).is_err());
        let pixels = solid_rgba(1, 1, [0, 0, 0]);
        assert!(encode(&pixels, 20_000, 1, 4, 3).is_err());
    }

    #[test]
    fn solid_black_has_zero_dc() {
        let pixels = solid_rgba(4, 4, [0, 0, 0]);
        let hash = encode(&pixels, 4, 4, 2, 2).unwrap();
        // DC digits 2..6 encode the packed sRGB color, here 0x000000.
        assert_eq!(&hash[2..6], "0000");
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut pixels = Vec::new();
        for i in 0..(8 * 8) {
            pixels.extend_from_slice(&[(i * 3) as u8, (i * 5) as u8, (i * 7) as u8, 255]);
        }
        let a = encode(&pixels, 8, 8, 4, 4).unwrap();
        let b = encode(&pixels, 8, 8, 4, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_pure_base83() {
        let mut pixels = Vec::new();
        for i in 0..(16 * 16) {
            pixels.extend_from_slice(&[(i % 256) as u8, (i * 2 % 256) as u8, 128, 255]);
        }
        let hash = encode(&pixels, 16, 16, 4, 4).unwrap();
        for c in hash.chars() {
            assert!(
                base83::ALPHABET.contains(&(c as u8)),
                "character {c:?} is not base83"
            );
        }
    }
}
