// hex_format/src/hf_number.rs

use super::*;
use crate::hex_helpers::{check_literal_at, check_range, hex_digits, nibble, substring_lossy};

/// Formats a `u8` as hex text under `format`. See [`format_u64`].
pub fn format_u8(value: u8, format: &HexFormat) -> String {
    format_unsigned(u64::from(value), 2, format)
}

/// Formats a `u16` as hex text under `format`. See [`format_u64`].
pub fn format_u16(value: u16, format: &HexFormat) -> String {
    format_unsigned(u64::from(value), 4, format)
}

/// Formats a `u32` as hex text under `format`. See [`format_u64`].
pub fn format_u32(value: u32, format: &HexFormat) -> String {
    format_unsigned(u64::from(value), 8, format)
}

/// Formats a `u64` as hex text under `format`.
///
/// The value is treated as a sequence of nibbles, most significant first:
/// one digit per nibble of the width, wrapped in the number prefix and
/// suffix. With `remove_leading_zeros` set, leading zero digits are dropped,
/// except that zero itself still formats as `"0"`.
///
/// # Examples
/// ```
/// use hex_format::{format_u64, HexFormat};
///
/// assert_eq!(format_u64(0x3A, &HexFormat::DEFAULT), "000000000000003a");
/// let short = HexFormat::builder().remove_leading_zeros(true).build();
/// assert_eq!(format_u64(0x3A, &short), "3a");
/// ```
pub fn format_u64(value: u64, format: &HexFormat) -> String {
    format_unsigned(value, 16, format)
}

/// Parses a `u8` from the whole of `text`. See [`parse_u64`].
pub fn parse_u8(text: &str, format: &HexFormat) -> Result<u8, HexFormatError> {
    parse_u8_range(text, 0, text.len(), format)
}

/// Parses a `u8` from `text[start..end]`. See [`parse_u64`].
pub fn parse_u8_range(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<u8, HexFormatError> {
    parse_unsigned(text, start, end, format, 2).map(|value| value as u8)
}

/// Parses a `u16` from the whole of `text`. See [`parse_u64`].
pub fn parse_u16(text: &str, format: &HexFormat) -> Result<u16, HexFormatError> {
    parse_u16_range(text, 0, text.len(), format)
}

/// Parses a `u16` from `text[start..end]`. See [`parse_u64`].
pub fn parse_u16_range(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<u16, HexFormatError> {
    parse_unsigned(text, start, end, format, 4).map(|value| value as u16)
}

/// Parses a `u32` from the whole of `text`. See [`parse_u64`].
pub fn parse_u32(text: &str, format: &HexFormat) -> Result<u32, HexFormatError> {
    parse_u32_range(text, 0, text.len(), format)
}

/// Parses a `u32` from `text[start..end]`. See [`parse_u64`].
pub fn parse_u32_range(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<u32, HexFormatError> {
    parse_unsigned(text, start, end, format, 8).map(|value| value as u32)
}

/// Parses a `u64` from the whole of `text` under `format`.
///
/// The input must carry the configured prefix and suffix (matched ignoring
/// ASCII case) around `1..=16` hex digits. Fewer digits than the full width
/// are always accepted, whether or not the format strips leading zeros when
/// formatting; more digits than the width are rejected.
///
/// # Examples
/// ```
/// use hex_format::{parse_u64, HexFormat};
///
/// assert_eq!(parse_u64("deadc0dedeadc0d", &HexFormat::DEFAULT), Ok(0x0DEADC0DEDEADC0D));
/// ```
pub fn parse_u64(text: &str, format: &HexFormat) -> Result<u64, HexFormatError> {
    parse_u64_range(text, 0, text.len(), format)
}

/// Parses a `u64` from `text[start..end]`. See [`parse_u64`].
pub fn parse_u64_range(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<u64, HexFormatError> {
    parse_unsigned(text, start, end, format, 16)
}

/// Formats `value` as `nibbles` hex digits plus the configured decoration.
fn format_unsigned(value: u64, nibbles: usize, format: &HexFormat) -> String {
    let digits = hex_digits(format.upper_case);
    let number = &format.number;
    if number.is_digits_only() {
        return format_digits_only(value, nibbles, number.remove_leading_zeros, digits);
    }
    let mut out = String::with_capacity(number.prefix.len() + nibbles + number.suffix.len());
    out.push_str(number.prefix());
    let mut leading = true;
    for position in 0..nibbles {
        let digit = nibble_at(value, nibbles, position);
        if leading && number.remove_leading_zeros && digit == 0 && position < nibbles - 1 {
            continue;
        }
        leading = false;
        out.push(digits[digit] as char);
    }
    out.push_str(number.suffix());
    out
}

/// Digits-only writer: fills a stack scratch buffer with the full width,
/// then returns the slice past any stripped leading zeros.
fn format_digits_only(
    value: u64,
    nibbles: usize,
    remove_leading_zeros: bool,
    digits: &[u8; 16],
) -> String {
    let mut scratch = [0u8; 16];
    for position in 0..nibbles {
        scratch[position] = digits[nibble_at(value, nibbles, position)];
    }
    let lead = if remove_leading_zeros {
        leading_zero_nibbles(value, nibbles)
    } else {
        0
    };
    // The scratch holds digit-table bytes only, so this cannot fail.
    core::str::from_utf8(&scratch[lead..nibbles]).unwrap().into()
}

/// The nibble of `value` at `position`, counted from the most significant
/// digit of a `nibbles`-wide rendering.
fn nibble_at(value: u64, nibbles: usize, position: usize) -> usize {
    ((value >> (4 * (nibbles - 1 - position))) & 0xF) as usize
}

/// How many leading digits of a `nibbles`-wide rendering of `value` are
/// zero, keeping at least one digit: zero renders as `"0"`.
fn leading_zero_nibbles(value: u64, nibbles: usize) -> usize {
    let significant = ((64 - value.leading_zeros() as usize + 3) / 4).max(1);
    nibbles - significant
}

/// Shared parser: `max_digits` is the nibble count of the target width, so
/// the 64-bit accumulator cannot overflow and narrowing casts are lossless.
fn parse_unsigned(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
    max_digits: usize,
) -> Result<u64, HexFormatError> {
    check_range(start, end, text.len())?;
    let src = text.as_bytes();
    let number = &format.number;
    let prefix = number.prefix();
    let suffix = number.suffix();
    if end - start <= prefix.len() + suffix.len() {
        return Err(HexFormatError::InvalidFormat {
            message: format!(
                "Expected a hexadecimal number with prefix \"{}\" and suffix \"{}\", but was \"{}\"",
                prefix,
                suffix,
                substring_lossy(src, start, end),
            ),
        });
    }
    let digits_start = check_literal_at(src, start, end, prefix, "prefix")?;
    let digits_end = end - suffix.len();
    check_literal_at(src, digits_end, end, suffix, "suffix")?;
    if digits_end - digits_start > max_digits {
        return Err(HexFormatError::InvalidFormat {
            message: format!(
                "Expected at most {} hexadecimal digits at index {}, but was \"{}\"",
                max_digits,
                digits_start,
                substring_lossy(src, digits_start, digits_end),
            ),
        });
    }
    let mut value = 0u64;
    for i in digits_start..digits_end {
        let digit = nibble(src[i]);
        if digit < 0 {
            return Err(HexFormatError::InvalidFormat {
                message: format!(
                    "Expected a hexadecimal digit at index {}, but was '{}'",
                    i,
                    hex_helpers::char_at_lossy(src, i),
                ),
            });
        }
        value = (value << 4) | digit as u64;
    }
    Ok(value)
}

//******************************************************************************
//  Tests
//******************************************************************************
