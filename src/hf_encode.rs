// hex_format/src/hf_encode.rs

use super::*;
use crate::hex_helpers::hex_digits;
use crate::hf_sizer::formatted_hex_length;

/// Formats `bytes` as hex text under `format`.
///
/// The output length is computed up front, so the returned string is
/// allocated exactly once.
///
/// # Errors
/// Returns [`HexFormatError::CapacityExceeded`] when the output would be
/// longer than a string can hold.
///
/// # Examples
/// ```
/// use hex_format::{bytes_to_hex, HexFormat};
///
/// let text = bytes_to_hex(&[0xDE, 0xAD, 0xBE, 0xEF], &HexFormat::DEFAULT).unwrap();
/// assert_eq!(text, "deadbeef");
/// ```
pub fn bytes_to_hex(bytes: &[u8], format: &HexFormat) -> Result<String, HexFormatError> {
    bytes_to_hex_range(bytes, 0, bytes.len(), format)
}

/// Formats `bytes[start..end]` as hex text under `format`.
///
/// # Errors
/// Returns [`HexFormatError::OutOfRange`] when `end > bytes.len()`,
/// [`HexFormatError::InvalidRange`] when `start > end`, and
/// [`HexFormatError::CapacityExceeded`] as in [`bytes_to_hex`]. An empty
/// range formats to an empty string.
pub fn bytes_to_hex_range(
    bytes: &[u8],
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<String, HexFormatError> {
    hex_helpers::check_range(start, end, bytes.len())?;
    let slice = &bytes[start..end];
    if slice.is_empty() {
        return Ok(String::new());
    }
    let layout = &format.bytes;
    let capacity = formatted_hex_length(slice.len(), layout)?;
    let digits = hex_digits(format.upper_case);
    let mut out = String::with_capacity(capacity);
    if layout.has_no_breaks() {
        format_without_breaks(slice, layout, digits, &mut out);
    } else {
        format_with_breaks(slice, layout, digits, &mut out);
    }
    debug_assert_eq!(out.len(), capacity);
    Ok(out)
}

/// Writer for formats with no line breaks or group separators.
fn format_without_breaks(bytes: &[u8], layout: &BytesFormat, digits: &[u8; 16], out: &mut String) {
    let separator = layout.byte_separator();
    if layout.byte_prefix.is_empty() && layout.byte_suffix.is_empty() {
        match separator.len() {
            0 => {
                for &byte in bytes {
                    push_hex_byte(out, byte, digits);
                }
            }
            1 => {
                // A one-byte str is necessarily a single ASCII character.
                let separator = separator.as_bytes()[0] as char;
                push_hex_byte(out, bytes[0], digits);
                for &byte in &bytes[1..] {
                    out.push(separator);
                    push_hex_byte(out, byte, digits);
                }
            }
            _ => {
                push_hex_byte(out, bytes[0], digits);
                for &byte in &bytes[1..] {
                    out.push_str(separator);
                    push_hex_byte(out, byte, digits);
                }
            }
        }
        return;
    }
    for (index, &byte) in bytes.iter().enumerate() {
        if index != 0 {
            out.push_str(separator);
        }
        out.push_str(layout.byte_prefix());
        push_hex_byte(out, byte, digits);
        out.push_str(layout.byte_suffix());
    }
}

/// Writer for formats with line wrapping or grouping.
fn format_with_breaks(bytes: &[u8], layout: &BytesFormat, digits: &[u8; 16], out: &mut String) {
    let mut index_in_line = 0;
    let mut index_in_group = 0;
    for &byte in bytes {
        if index_in_line == layout.bytes_per_line {
            out.push('\n');
            index_in_line = 0;
            index_in_group = 0;
        } else if index_in_group == layout.bytes_per_group {
            out.push_str(layout.group_separator());
            index_in_group = 0;
        } else if index_in_group != 0 {
            out.push_str(layout.byte_separator());
        }
        out.push_str(layout.byte_prefix());
        push_hex_byte(out, byte, digits);
        out.push_str(layout.byte_suffix());
        index_in_line += 1;
        index_in_group += 1;
    }
}

/// Appends the two digits of `byte`, high nibble first.
fn push_hex_byte(out: &mut String, byte: u8, digits: &[u8; 16]) {
    out.push(digits[(byte >> 4) as usize] as char);
    out.push(digits[(byte & 0xF) as usize] as char);
}

//******************************************************************************
//  Tests
//******************************************************************************

#[cfg(test)]
mod encode_tests {
    use super::*;

    #[test]
    fn test_plain_lowercase() {
        let text = bytes_to_hex(&[0xDE, 0xAD, 0xBE, 0xEF], &HexFormat::DEFAULT).unwrap();
        assert_eq!(text, "deadbeef");
    }

    #[test]
    fn test_plain_uppercase() {
        let text = bytes_to_hex(&[0xDE, 0xAD, 0xBE, 0xEF], &HexFormat::UPPER_CASE).unwrap();
        assert_eq!(text, "DEADBEEF");
    }

    #[test]
    fn test_single_char_separator() {
        let format = HexFormat::builder().byte_separator(":").build();
        let text = bytes_to_hex(&[0x00, 0x1B, 0x44], &format).unwrap();
        assert_eq!(text, "00:1b:44");
    }

    #[test]
    fn test_multi_char_separator() {
        let format = HexFormat::builder().byte_separator(", ").build();
        let text = bytes_to_hex(&[0x01, 0x02], &format).unwrap();
        assert_eq!(text, "01, 02");
    }

    #[test]
    fn test_prefix_and_suffix() {
        let format = HexFormat::builder()
            .byte_separator(" ")
            .byte_prefix("&#x")
            .byte_suffix(";")
            .build();
        let text = bytes_to_hex(&[0x01, 0x02, 0x03], &format).unwrap();
        assert_eq!(text, "&#x01; &#x02; &#x03;");
    }

    #[test]
    fn test_grouping() {
        let format = HexFormat::builder().bytes_per_group(1).group_separator(".").build();
        let text = bytes_to_hex(&[0xD9, 0x6E, 0x99, 0x4A], &format).unwrap();
        assert_eq!(text, "d9.6e.99.4a");
    }

    #[test]
    fn test_line_wrapping() {
        let format = HexFormat::builder()
            .bytes_per_line(2)
            .bytes_per_group(1)
            .group_separator(" ")
            .build();
        let text = bytes_to_hex(&[1, 2, 3, 4, 5], &format).unwrap();
        assert_eq!(text, "01 02\n03 04\n05");
    }

    #[test]
    fn test_groups_and_lines_together() {
        let format = HexFormat::builder()
            .bytes_per_line(4)
            .bytes_per_group(2)
            .group_separator("  ")
            .byte_separator(" ")
            .build();
        let text = bytes_to_hex(&[1, 2, 3, 4, 5, 6], &format).unwrap();
        assert_eq!(text, "01 02  03 04\n05 06");
    }

    #[test]
    fn test_empty_range() {
        let bytes = [1, 2, 3];
        assert_eq!(bytes_to_hex_range(&bytes, 1, 1, &HexFormat::DEFAULT), Ok(String::new()));
        assert_eq!(bytes_to_hex(&[], &HexFormat::DEFAULT), Ok(String::new()));
    }

    #[test]
    fn test_sub_range() {
        let bytes = [0xAA, 0xBB, 0xCC, 0xDD];
        let text = bytes_to_hex_range(&bytes, 1, 3, &HexFormat::DEFAULT).unwrap();
        assert_eq!(text, "bbcc");
    }

    #[test]
    fn test_range_validation() {
        let bytes = [1, 2, 3];
        assert_eq!(
            bytes_to_hex_range(&bytes, 0, 4, &HexFormat::DEFAULT),
            Err(HexFormatError::OutOfRange { index: 4, length: 3 })
        );
        assert_eq!(
            bytes_to_hex_range(&bytes, 2, 1, &HexFormat::DEFAULT),
            Err(HexFormatError::InvalidRange { start: 2, end: 1 })
        );
    }

    #[test]
    fn test_length_matches_sizer() {
        let format = HexFormat::builder()
            .bytes_per_line(3)
            .bytes_per_group(2)
            .group_separator(" | ")
            .byte_separator(" ")
            .byte_prefix("<")
            .byte_suffix(">")
            .build();
        let bytes: Vec<u8> = (0..=255).collect();
        let text = bytes_to_hex(&bytes, &format).unwrap();
        assert_eq!(
            text.len(),
            formatted_hex_length(bytes.len(), format.bytes()).unwrap()
        );
    }
}
