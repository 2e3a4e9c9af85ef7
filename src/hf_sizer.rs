// hex_format/src/hf_sizer.rs

use super::*;

/// The longest output a Rust `String` can hold.
const MAX_FORMATTED_LENGTH: u128 = isize::MAX as u128;

/// Computes the exact length of the hex text that `count` bytes format to
/// under `format`, in UTF-8 bytes.
///
/// This is what lets the encoder allocate its output exactly once. The
/// arithmetic runs in a 128-bit accumulator so no intermediate product can
/// wrap, and fails with [`HexFormatError::CapacityExceeded`] when the total
/// cannot be allocated as a string.
///
/// # Examples
/// ```
/// use hex_format::{formatted_hex_length, HexFormat};
///
/// let format = HexFormat::builder().byte_separator(":").build();
/// assert_eq!(formatted_hex_length(6, format.bytes()), Ok(17));
/// ```
pub fn formatted_hex_length(count: usize, format: &BytesFormat) -> Result<usize, HexFormatError> {
    if count == 0 {
        return Ok(0);
    }
    let n = count as u128;
    let bytes_per_line = format.bytes_per_line as u128;
    let bytes_per_group = format.bytes_per_group as u128;
    let group_sep = format.group_separator.len() as u128;
    let byte_sep = format.byte_separator.len() as u128;
    let per_byte = format.byte_prefix.len() as u128 + 2 + format.byte_suffix.len() as u128;

    let line_separators = (n - 1) / bytes_per_line;
    let group_seps_per_line = (bytes_per_line - 1) / bytes_per_group;
    let bytes_in_last_line = match n % bytes_per_line {
        0 => bytes_per_line,
        remainder => remainder,
    };
    let group_seps_in_last_line = (bytes_in_last_line - 1) / bytes_per_group;
    let group_separators = line_separators * group_seps_per_line + group_seps_in_last_line;
    let byte_separators = n - 1 - line_separators - group_separators;

    let total = line_separators
        .checked_add(group_separators.checked_mul(group_sep).ok_or(HexFormatError::CapacityExceeded)?)
        .and_then(|sum| sum.checked_add(byte_separators.checked_mul(byte_sep)?))
        .and_then(|sum| sum.checked_add(n.checked_mul(per_byte)?))
        .ok_or(HexFormatError::CapacityExceeded)?;
    if total > MAX_FORMATTED_LENGTH {
        return Err(HexFormatError::CapacityExceeded);
    }
    Ok(total as usize)
}

/// Computes an upper bound on the number of bytes a hex string of `length`
/// UTF-8 bytes can decode to under `format`.
///
/// The decoder allocates its output from this bound up front; dangling input
/// is then reported as a parse failure rather than a reallocation. The bound
/// assumes a one-character line separator, the shortest the decoder accepts,
/// which maximizes the estimate.
pub fn parsed_bytes_max_size(length: usize, format: &BytesFormat) -> usize {
    if length == 0 {
        return 0;
    }
    let bytes_per_line = format.bytes_per_line as i128;
    let bytes_per_group = format.bytes_per_group as i128;
    let group_sep = format.group_separator.len() as i128;
    let byte_sep = format.byte_separator.len() as i128;
    let per_byte = format.byte_prefix.len() as i128 + 2 + format.byte_suffix.len() as i128;

    let per_group = chars_per_set(per_byte, bytes_per_group, byte_sep);
    let per_line = if bytes_per_line <= bytes_per_group {
        chars_per_set(per_byte, bytes_per_line, byte_sep)
    } else {
        let groups_per_line = bytes_per_line / bytes_per_group;
        let mut chars = chars_per_set(per_group, groups_per_line, group_sep);
        let bytes_in_last_group = bytes_per_line % bytes_per_group;
        if bytes_in_last_group != 0 {
            chars = chars
                .saturating_add(group_sep)
                .saturating_add(chars_per_set(per_byte, bytes_in_last_group, byte_sep));
        }
        chars
    };

    // Peel whole lines, then whole groups, then whole bytes off the input.
    // The remainder may go negative: a whole line was counted with the
    // assumed one-character separator even if fewer characters remain.
    let mut chars = length as i128;
    let whole_lines = whole_elements_per_set(chars, per_line, 1);
    chars -= whole_lines.saturating_mul(per_line.saturating_add(1));
    let whole_groups = whole_elements_per_set(chars, per_group, group_sep);
    chars -= whole_groups.saturating_mul(per_group.saturating_add(group_sep));
    let whole_bytes = whole_elements_per_set(chars, per_byte, byte_sep);
    chars -= whole_bytes.saturating_mul(per_byte.saturating_add(byte_sep));
    let spare = i128::from(chars > 0);

    (whole_lines.saturating_mul(bytes_per_line) + whole_groups.saturating_mul(bytes_per_group)
        + whole_bytes
        + spare) as usize
}

/// Length of `elements` elements of `per_element` characters joined by a
/// `separator`-character separator. Saturates instead of wrapping; a
/// saturated set can never be peeled, which keeps the bound valid.
fn chars_per_set(per_element: i128, elements: i128, separator: i128) -> i128 {
    per_element
        .saturating_mul(elements)
        .saturating_add(separator.saturating_mul(elements - 1))
}

/// How many whole `per_element`-character elements, each followed by a
/// `separator`-character separator, fit into `chars` characters.
fn whole_elements_per_set(chars: i128, per_element: i128, separator: i128) -> i128 {
    if chars <= 0 || per_element <= 0 {
        0
    } else {
        (chars + separator) / (per_element + separator)
    }
}

//******************************************************************************
//  Tests
//******************************************************************************
