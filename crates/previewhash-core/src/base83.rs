//! Base83 numeral codec used by the BlurHash string format.
//!
//! BlurHash serializes all of its integers with a custom 83-character
//! alphabet: the decimal digits, the upper- and lowercase letters, and a
//! fixed set of punctuation. Numerals are big-endian (most significant
//! digit first) and always emitted at a fixed width.

use crate::error::CodecError;

/// The 83-character BlurHash alphabet, in digit order.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Lookup table mapping ASCII bytes to their base83 digit value.
/// Bytes outside the alphabet map to `255`.
const fn build_digit_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

static DIGIT_LUT: [u8; 128] = build_digit_lut();

/// Decode a base83 string into an unsigned integer.
///
/// The reference JavaScript silently produces garbage for characters
/// outside the alphabet; here they are rejected outright.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase83Character`] for any character not
/// in the alphabet, and [`CodecError::Base83Overflow`] if the value does
/// not fit in a `u64` (only possible for strings longer than any field
/// the hash format uses).
///
/// # Examples
///
/// ```
/// use previewhash_core::base83;
/// assert_eq!(base83::decode("0").unwrap(), 0);
/// assert_eq!(base83::decode("~").unwrap(), 82);
/// assert_eq!(base83::decode("10").unwrap(), 83);
/// ```
pub fn decode(s: &str) -> Result<u64, CodecError> {
    let mut value: u64 = 0;
    for c in s.chars() {
        let digit = if c.is_ascii() { DIGIT_LUT[c as usize] } else { 255 };
        if digit == 255 {
            return Err(CodecError::InvalidBase83Character(c));
        }
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(CodecError::Base83Overflow {
                value: u64::MAX,
                digits: s.len(),
            })?;
    }
    Ok(value)
}

/// Encode an unsigned integer as exactly `length` base83 digits,
/// most significant digit first.
///
/// The reference JavaScript silently drops high digits when the value is
/// too large; here that is an error.
///
/// # Errors
///
/// Returns [`CodecError::Base83Overflow`] if `value >= 83^length`.
///
/// # Examples
///
/// ```
/// use previewhash_core::base83;
/// assert_eq!(base83::encode(0, 4).unwrap(), "0000");
/// assert_eq!(base83::encode(82, 1).unwrap(), "~");
/// ```
pub fn encode(value: u64, length: usize) -> Result<String, CodecError> {
    // 83^length is the first value that does NOT fit.
    let limit = 83u64.checked_pow(length as u32).unwrap_or(u64::MAX);
    if value >= limit {
        return Err(CodecError::Base83Overflow {
            value,
            digits: length,
        });
    }

    let mut digits = vec![0u8; length];
    let mut remaining = value;
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 83) as usize];
        remaining /= 83;
    }
    // SAFETY: every byte comes from ALPHABET, which is pure ASCII.
    Ok(unsafe { String::from_utf8_unchecked(digits) })
}
