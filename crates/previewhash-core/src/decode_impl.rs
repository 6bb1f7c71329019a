//! BlurHash decoding: base83 string in, RGBA placeholder image out.

use crate::base83;
use crate::color::{sign_pow, srgb_to_linear};
use crate::dct;
use crate::encode_impl::check_dimensions;
use crate::error::CodecError;
use crate::validate::validate;

/// Unpack the 24-bit DC integer into a linear-light triplet.
fn decode_dc(value: u64) -> [f64; 3] {
    [
        srgb_to_linear((value >> 16) as u8),
        srgb_to_linear(((value >> 8) & 255) as u8),
        srgb_to_linear((value & 255) as u8),
    ]
}

/// Unpack a base-19^3 AC integer and rescale it to linear light.
fn decode_ac(value: u64, maximum_value: f64) -> [f64; 3] {
    let quant_r = (value / (19 * 19)) as f64;
    let quant_g = ((value / 19) % 19) as f64;
    let quant_b = (value % 19) as f64;
    [
        sign_pow((quant_r - 9.0) / 9.0, 2.0) * maximum_value,
        sign_pow((quant_g - 9.0) / 9.0, 2.0) * maximum_value,
        sign_pow((quant_b - 9.0) / 9.0, 2.0) * maximum_value,
    ]
}

/// Decode a BlurHash string into a flat RGBA byte buffer.
///
/// # Arguments
///
/// * `blurhash` - The hash to decode.
/// * `width` / `height` - Desired output dimensions; any size works,
///   the hash carries no aspect ratio of its own.
/// * `punch` - Contrast multiplier applied to the AC components.
///   `1.0` reproduces the encoded image; `2.0` doubles the detail
///   contrast. A value of exactly `0.0` is treated as `1.0` — the
///   reference implementation cannot distinguish "omitted" from "zero",
///   and that behavior is preserved deliberately.
///
/// # Returns
///
/// `width * height * 4` bytes of non-premultiplied RGBA in row-major
/// order, with every alpha byte set to 255.
///
/// # Errors
///
/// Fails with [`CodecError::HashTooShort`] or
/// [`CodecError::LengthMismatch`] for structurally bad hashes,
/// [`CodecError::InvalidBase83Character`] for payload characters outside
/// the alphabet, and [`CodecError::InvalidDimensions`] for zero or
/// oversized output dimensions.
///
/// # Examples
///
/// ```
/// use previewhash_core::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
/// assert_eq!(pixels.len(), 32 * 32 * 4);
/// assert!(pixels.chunks(4).all(|px| px[3] == 255));
/// ```
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, CodecError> {
    validate(blurhash)?;
    check_dimensions(width, height)?;

    let punch = if punch == 0.0 { 1.0 } else { punch };

    let size_flag = base83::decode(&blurhash[0..1])?;
    let num_y = (size_flag / 9) as usize + 1;
    let num_x = (size_flag % 9) as usize + 1;

    let quantised_maximum = base83::decode(&blurhash[1..2])?;
    let maximum_value = (quantised_maximum as f64 + 1.0) / 166.0;

    let mut colors: Vec<[f64; 3]> = Vec::with_capacity(num_x * num_y);
    colors.push(decode_dc(base83::decode(&blurhash[2..6])?));
    for component in 1..num_x * num_y {
        let start = 4 + component * 2;
        let value = base83::decode(&blurhash[start..start + 2])?;
        colors.push(decode_ac(value, maximum_value * punch));
    }

    Ok(dct::reconstruct(
        &colors,
        num_x,
        num_y,
        width as usize,
        height as usize,
    ))
}
