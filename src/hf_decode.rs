// hex_format/src/hf_decode.rs

use super::*;
use crate::hex_helpers::{char_at_lossy, check_literal_at, check_range, nibble, substring_lossy};
use crate::hf_sizer::parsed_bytes_max_size;

/// Parses `text` into the byte sequence it encodes under `format`.
///
/// Hex digits and configured literals are matched ignoring ASCII case, and
/// `"\r\n"`, `"\n"` or `"\r"` are all accepted where the format calls for a
/// line break. The output is allocated once from an upper bound computed
/// before parsing starts.
///
/// # Errors
/// Returns [`HexFormatError::InvalidFormat`] when the input deviates from
/// the configured layout; the message names the expected token, the failing
/// index and the text found there.
///
/// # Examples
/// ```
/// use hex_format::{hex_to_bytes, HexFormat};
///
/// let bytes = hex_to_bytes("DEADbeef", &HexFormat::DEFAULT).unwrap();
/// assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
/// ```
pub fn hex_to_bytes(text: &str, format: &HexFormat) -> Result<Vec<u8>, HexFormatError> {
    hex_to_bytes_range(text, 0, text.len(), format)
}

/// Parses `text[start..end]` into bytes under `format`.
///
/// Indices are byte offsets into `text`.
///
/// # Errors
/// Returns [`HexFormatError::OutOfRange`] when `end > text.len()`,
/// [`HexFormatError::InvalidRange`] when `start > end`, and
/// [`HexFormatError::InvalidFormat`] as in [`hex_to_bytes`]. An empty range
/// parses to an empty byte sequence.
pub fn hex_to_bytes_range(
    text: &str,
    start: usize,
    end: usize,
    format: &HexFormat,
) -> Result<Vec<u8>, HexFormatError> {
    check_range(start, end, text.len())?;
    if start == end {
        return Ok(Vec::new());
    }
    let src = text.as_bytes();
    let layout = &format.bytes;
    let mut out = Vec::with_capacity(parsed_bytes_max_size(end - start, layout));
    if layout.has_no_breaks() && parse_without_breaks(src, start, end, layout, &mut out)? {
        return Ok(out);
    }
    parse_with_breaks(src, start, end, layout, &mut out)?;
    Ok(out)
}

/// Reader for formats with no line breaks or group separators.
///
/// First reconciles the input length against the per-byte character count;
/// when the length does not divide evenly the reader steps aside (returns
/// `Ok(false)`) and leaves the error reporting to the general path.
fn parse_without_breaks(
    src: &[u8],
    start: usize,
    end: usize,
    layout: &BytesFormat,
    out: &mut Vec<u8>,
) -> Result<bool, HexFormatError> {
    let prefix = layout.byte_prefix();
    let suffix = layout.byte_suffix();
    let separator = layout.byte_separator();
    let length = end - start;
    let per_byte = 2usize
        .saturating_add(prefix.len())
        .saturating_add(suffix.len())
        .saturating_add(separator.len());
    let count = length.saturating_add(separator.len()) / per_byte;
    if count == 0 || count.saturating_mul(per_byte) - separator.len() != length {
        return Ok(false);
    }
    if prefix.is_empty() && suffix.is_empty() {
        match separator.len() {
            0 => {
                let mut i = start;
                while i < end {
                    out.push(parse_byte_at(src, i)?);
                    i += 2;
                }
            }
            1 => {
                let separator = separator.as_bytes()[0];
                out.push(parse_byte_at(src, start)?);
                let mut i = start + 2;
                while i < end {
                    if !src[i].eq_ignore_ascii_case(&separator) {
                        return Err(HexFormatError::InvalidFormat {
                            message: format!(
                                "Expected byte separator \"{}\" at index {}, but was \"{}\"",
                                layout.byte_separator(),
                                i,
                                substring_lossy(src, i, i + 1),
                            ),
                        });
                    }
                    out.push(parse_byte_at(src, i + 1)?);
                    i += 3;
                }
            }
            _ => {
                out.push(parse_byte_at(src, start)?);
                let mut i = start + 2;
                while i < end {
                    i = check_literal_at(src, i, end, separator, "byte separator")?;
                    out.push(parse_byte_at(src, i)?);
                    i += 2;
                }
            }
        }
        return Ok(true);
    }
    let mut i = check_literal_at(src, start, end, prefix, "byte prefix")?;
    out.push(parse_byte_at(src, i)?);
    i += 2;
    for _ in 1..count {
        i = check_literal_at(src, i, end, suffix, "byte suffix")?;
        i = check_literal_at(src, i, end, separator, "byte separator")?;
        i = check_literal_at(src, i, end, prefix, "byte prefix")?;
        out.push(parse_byte_at(src, i)?);
        i += 2;
    }
    check_literal_at(src, i, end, suffix, "byte suffix")?;
    Ok(true)
}

/// Reader for formats with line wrapping or grouping, and the fallback when
/// the fast reader cannot reconcile the input length. Walks the input token
/// by token, tracking the position within the current line and group.
fn parse_with_breaks(
    src: &[u8],
    start: usize,
    end: usize,
    layout: &BytesFormat,
    out: &mut Vec<u8>,
) -> Result<(), HexFormatError> {
    let mut i = start;
    let mut index_in_line = 0;
    let mut index_in_group = 0;
    while i < end {
        if index_in_line == layout.bytes_per_line {
            i = consume_line_separator(src, i, end)?;
            index_in_line = 0;
            index_in_group = 0;
        } else if index_in_group == layout.bytes_per_group {
            i = check_literal_at(src, i, end, layout.group_separator(), "group separator")?;
            index_in_group = 0;
        } else if index_in_group != 0 {
            i = check_literal_at(src, i, end, layout.byte_separator(), "byte separator")?;
        }
        index_in_line += 1;
        index_in_group += 1;
        i = check_literal_at(src, i, end, layout.byte_prefix(), "byte prefix")?;
        if i + 2 > end {
            return Err(HexFormatError::InvalidFormat {
                message: format!(
                    "Expected exactly 2 hexadecimal digits at index {}, but was \"{}\"",
                    i,
                    substring_lossy(src, i, end),
                ),
            });
        }
        out.push(parse_byte_at(src, i)?);
        i += 2;
        i = check_literal_at(src, i, end, layout.byte_suffix(), "byte suffix")?;
    }
    Ok(())
}

/// Accepts `"\r\n"`, `"\n"` or `"\r"` at `i` and returns the index past it.
fn consume_line_separator(src: &[u8], i: usize, end: usize) -> Result<usize, HexFormatError> {
    match src[i] {
        b'\r' if i + 1 < end && src[i + 1] == b'\n' => Ok(i + 2),
        b'\r' | b'\n' => Ok(i + 1),
        _ => Err(HexFormatError::InvalidFormat {
            message: format!(
                "Expected a new line at index {}, but was '{}'",
                i,
                char_at_lossy(src, i),
            ),
        }),
    }
}

/// Reads the two digits at `i` and `i + 1` into one byte.
fn parse_byte_at(src: &[u8], i: usize) -> Result<u8, HexFormatError> {
    let high = nibble(src[i]);
    let low = nibble(src[i + 1]);
    if high < 0 || low < 0 {
        let at = if high < 0 { i } else { i + 1 };
        return Err(HexFormatError::InvalidFormat {
            message: format!(
                "Expected a hexadecimal digit at index {}, but was '{}'",
                at,
                char_at_lossy(src, at),
            ),
        });
    }
    Ok(((high as u8) << 4) | low as u8)
}

//******************************************************************************
//  Tests
//******************************************************************************

#[cfg(test)]
mod decode_tests {
    use super::*;

    #[test]
    fn test_plain_mixed_case() {
        let bytes = hex_to_bytes("DEADbeef", &HexFormat::DEFAULT).unwrap();
        assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hex_to_bytes("", &HexFormat::DEFAULT), Ok(Vec::new()));
        assert_eq!(hex_to_bytes_range("abcd", 2, 2, &HexFormat::DEFAULT), Ok(Vec::new()));
    }

    #[test]
    fn test_odd_length_fails() {
        let err = hex_to_bytes("abc", &HexFormat::DEFAULT).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from(
                    "Expected exactly 2 hexadecimal digits at index 2, but was \"c\""
                ),
            }
        );
    }

    #[test]
    fn test_non_digit_fails_with_index() {
        let err = hex_to_bytes("ag", &HexFormat::DEFAULT).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from("Expected a hexadecimal digit at index 1, but was 'g'"),
            }
        );
    }

    #[test]
    fn test_single_char_separator() {
        let format = HexFormat::builder().byte_separator(":").build();
        assert_eq!(hex_to_bytes("00:1b:44", &format).unwrap(), [0x00, 0x1B, 0x44]);
        let err = hex_to_bytes("00-1b", &format).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from("Expected byte separator \":\" at index 2, but was \"-\""),
            }
        );
    }

    #[test]
    fn test_multi_char_separator() {
        let format = HexFormat::builder().byte_separator(", ").build();
        assert_eq!(hex_to_bytes("01, 02, 03", &format).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let format = HexFormat::builder()
            .byte_separator(" ")
            .byte_prefix("&#x")
            .byte_suffix(";")
            .build();
        assert_eq!(hex_to_bytes("&#x01; &#x02; &#x03;", &format).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_literals_match_ignoring_case() {
        let format = HexFormat::builder().byte_prefix("0x").build();
        assert_eq!(hex_to_bytes("0XAB0xcd", &format).unwrap(), [0xAB, 0xCD]);
    }

    #[test]
    fn test_grouping() {
        let format = HexFormat::builder().bytes_per_group(1).group_separator(".").build();
        assert_eq!(hex_to_bytes("d9.6e.99.4a", &format).unwrap(), [0xD9, 0x6E, 0x99, 0x4A]);
    }

    #[test]
    fn test_line_separator_tolerance() {
        let format = HexFormat::builder()
            .bytes_per_line(2)
            .bytes_per_group(1)
            .group_separator(" ")
            .build();
        let expected = [1, 2, 3, 4, 5];
        assert_eq!(hex_to_bytes("01 02\n03 04\n05", &format).unwrap(), expected);
        assert_eq!(hex_to_bytes("01 02\r\n03 04\r\n05", &format).unwrap(), expected);
        assert_eq!(hex_to_bytes("01 02\r03 04\r05", &format).unwrap(), expected);
    }

    #[test]
    fn test_missing_line_separator() {
        let format = HexFormat::builder().bytes_per_line(1).build();
        let err = hex_to_bytes("0102", &format).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from("Expected a new line at index 2, but was '0'"),
            }
        );
    }

    #[test]
    fn test_missing_group_separator() {
        let format = HexFormat::builder().bytes_per_group(2).group_separator("|").build();
        let err = hex_to_bytes("0102-03", &format).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from("Expected group separator \"|\" at index 4, but was \"-\""),
            }
        );
    }

    #[test]
    fn test_dangling_separator_fails() {
        let format = HexFormat::builder().byte_separator(":").build();
        assert!(hex_to_bytes("00:1b:", &format).is_err());
    }

    #[test]
    fn test_truncated_prefix_fails() {
        let format = HexFormat::builder().byte_prefix("&#x").byte_suffix(";").build();
        let err = hex_to_bytes("&#x01;&#", &format).unwrap_err();
        assert_eq!(
            err,
            HexFormatError::InvalidFormat {
                message: String::from(
                    "Expected byte prefix \"&#x\" at index 6, but was \"&#\""
                ),
            }
        );
    }

    #[test]
    fn test_range_validation() {
        assert_eq!(
            hex_to_bytes_range("abcd", 0, 5, &HexFormat::DEFAULT),
            Err(HexFormatError::OutOfRange { index: 5, length: 4 })
        );
        assert_eq!(
            hex_to_bytes_range("abcd", 3, 1, &HexFormat::DEFAULT),
            Err(HexFormatError::InvalidRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_sub_range() {
        assert_eq!(
            hex_to_bytes_range("xxdeadxx", 2, 6, &HexFormat::DEFAULT).unwrap(),
            [0xDE, 0xAD]
        );
    }

    #[test]
    fn test_non_ascii_input_fails_cleanly() {
        let err = hex_to_bytes("ab\u{00E9}f", &HexFormat::DEFAULT).unwrap_err();
        assert!(matches!(err, HexFormatError::InvalidFormat { .. }));
    }
}
