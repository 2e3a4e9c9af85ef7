// hex_format/src/hf_config.rs

use super::*;

/// The portion of a [`HexFormat`] governing byte-sequence layout.
///
/// Bytes are emitted in lines of [`bytes_per_line`](Self::bytes_per_line)
/// bytes, each line split into groups of
/// [`bytes_per_group`](Self::bytes_per_group) bytes. Groups on one line are
/// joined by the group separator, bytes within a group by the byte
/// separator, and every byte's two digits are wrapped in the byte prefix and
/// suffix. Both sizes default to [`BytesFormat::UNBOUNDED`], in which case no
/// line breaks or group separators appear at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BytesFormat {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "positive_size"))]
    pub(crate) bytes_per_line: usize,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "positive_size"))]
    pub(crate) bytes_per_group: usize,
    pub(crate) group_separator: Cow<'static, str>,
    pub(crate) byte_separator: Cow<'static, str>,
    pub(crate) byte_prefix: Cow<'static, str>,
    pub(crate) byte_suffix: Cow<'static, str>,
}

impl BytesFormat {
    /// Sentinel size meaning "never": no line break or group separator.
    pub const UNBOUNDED: usize = usize::MAX;

    /// The default byte layout: no separators, no grouping, no wrapping.
    ///
    /// The group separator defaults to two spaces, but with
    /// `bytes_per_group` unbounded it never appears in output.
    pub const DEFAULT: BytesFormat = BytesFormat {
        bytes_per_line: Self::UNBOUNDED,
        bytes_per_group: Self::UNBOUNDED,
        group_separator: Cow::Borrowed("  "),
        byte_separator: Cow::Borrowed(""),
        byte_prefix: Cow::Borrowed(""),
        byte_suffix: Cow::Borrowed(""),
    };

    /// Returns the number of bytes per output line.
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }
    /// Returns the number of bytes per group within a line.
    pub fn bytes_per_group(&self) -> usize {
        self.bytes_per_group
    }
    /// Returns the text emitted between groups on one line.
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }
    /// Returns the text emitted between bytes within one group.
    pub fn byte_separator(&self) -> &str {
        &self.byte_separator
    }
    /// Returns the text emitted before each byte's two digits.
    pub fn byte_prefix(&self) -> &str {
        &self.byte_prefix
    }
    /// Returns the text emitted after each byte's two digits.
    pub fn byte_suffix(&self) -> &str {
        &self.byte_suffix
    }

    /// Returns true when no line break or group separator can ever appear,
    /// which is what enables the separator-only codec fast paths.
    pub(crate) fn has_no_breaks(&self) -> bool {
        self.bytes_per_line == Self::UNBOUNDED && self.bytes_per_group == Self::UNBOUNDED
    }
}

impl Default for BytesFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The portion of a [`HexFormat`] governing fixed-width integer layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    pub(crate) prefix: Cow<'static, str>,
    pub(crate) suffix: Cow<'static, str>,
    pub(crate) remove_leading_zeros: bool,
}

impl NumberFormat {
    /// The default number layout: bare digits, leading zeros kept.
    pub const DEFAULT: NumberFormat = NumberFormat {
        prefix: Cow::Borrowed(""),
        suffix: Cow::Borrowed(""),
        remove_leading_zeros: false,
    };

    /// Returns the text required before the digits.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
    /// Returns the text required after the digits.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
    /// Returns whether leading zero nibbles are stripped when formatting.
    pub fn remove_leading_zeros(&self) -> bool {
        self.remove_leading_zeros
    }

    /// Returns true when both prefix and suffix are empty, which enables the
    /// digits-only integer formatting fast path.
    pub fn is_digits_only(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An immutable description of a hexadecimal text layout.
///
/// A `HexFormat` is a pure value: construct it once (usually through
/// [`HexFormat::builder`]), then share it by reference across any number of
/// threads. The same value drives formatting and parsing, so output produced
/// under a format always parses back under that format.
///
/// # Examples
/// ```
/// use hex_format::{bytes_to_hex, HexFormat};
///
/// let ipv4 = HexFormat::builder()
///     .bytes_per_group(1)
///     .group_separator(".")
///     .build();
/// let text = bytes_to_hex(&[0xD9, 0x6E, 0x99, 0x4A], &ipv4).unwrap();
/// assert_eq!(text, "d9.6e.99.4a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HexFormat {
    pub(crate) upper_case: bool,
    pub(crate) bytes: BytesFormat,
    pub(crate) number: NumberFormat,
}

impl HexFormat {
    /// The default format: lowercase digits, no separators, no prefixes,
    /// unbounded lines and groups, leading zeros kept.
    pub const DEFAULT: HexFormat = HexFormat {
        upper_case: false,
        bytes: BytesFormat::DEFAULT,
        number: NumberFormat::DEFAULT,
    };

    /// The default format with uppercase digits.
    pub const UPPER_CASE: HexFormat = HexFormat {
        upper_case: true,
        bytes: BytesFormat::DEFAULT,
        number: NumberFormat::DEFAULT,
    };

    /// Starts building a format; unset fields keep the defaults.
    pub fn builder() -> HexFormatBuilder {
        HexFormatBuilder::new()
    }

    /// Returns whether digits are formatted uppercase.
    pub fn upper_case(&self) -> bool {
        self.upper_case
    }
    /// Returns the byte-sequence portion of the format.
    pub fn bytes(&self) -> &BytesFormat {
        &self.bytes
    }
    /// Returns the integer portion of the format.
    pub fn number(&self) -> &NumberFormat {
        &self.number
    }
}

impl Default for HexFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A fluent builder that yields a frozen [`HexFormat`] value.
///
/// # Examples
/// ```
/// use hex_format::HexFormat;
///
/// let format = HexFormat::builder()
///     .upper_case(true)
///     .byte_separator(" ")
///     .byte_prefix("&#x")
///     .byte_suffix(";")
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct HexFormatBuilder {
    upper_case: bool,
    bytes: BytesFormat,
    number: NumberFormat,
}

impl HexFormatBuilder {
    /// Creates a builder initialized to [`HexFormat::DEFAULT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects uppercase or lowercase digits.
    pub fn upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }

    /// Sets the number of bytes after which a line break is emitted.
    ///
    /// # Panics
    /// Panics if `count == 0`.
    pub fn bytes_per_line(mut self, count: usize) -> Self {
        assert!(count > 0, "bytes_per_line must be greater than zero");
        self.bytes.bytes_per_line = count;
        self
    }

    /// Sets the number of bytes after which a group separator is emitted.
    ///
    /// # Panics
    /// Panics if `count == 0`.
    pub fn bytes_per_group(mut self, count: usize) -> Self {
        assert!(count > 0, "bytes_per_group must be greater than zero");
        self.bytes.bytes_per_group = count;
        self
    }

    /// Sets the text between groups on one line.
    pub fn group_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.bytes.group_separator = separator.into();
        self
    }

    /// Sets the text between bytes within one group.
    pub fn byte_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.bytes.byte_separator = separator.into();
        self
    }

    /// Sets the text emitted before each byte's two digits.
    pub fn byte_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.bytes.byte_prefix = prefix.into();
        self
    }

    /// Sets the text emitted after each byte's two digits.
    pub fn byte_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.bytes.byte_suffix = suffix.into();
        self
    }

    /// Sets the text required before an integer's digits.
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.number.prefix = prefix.into();
        self
    }

    /// Sets the text required after an integer's digits.
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.number.suffix = suffix.into();
        self
    }

    /// Selects whether leading zero nibbles are stripped when formatting
    /// integers. At least one digit is always emitted.
    pub fn remove_leading_zeros(mut self, remove: bool) -> Self {
        self.number.remove_leading_zeros = remove;
        self
    }

    /// Freezes the builder into an immutable [`HexFormat`].
    pub fn build(self) -> HexFormat {
        HexFormat {
            upper_case: self.upper_case,
            bytes: self.bytes,
            number: self.number,
        }
    }
}

#[cfg(feature = "serde")]
fn positive_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <usize as serde::Deserialize>::deserialize(deserializer)?;
    if value == 0 {
        return Err(serde::de::Error::custom(
            "bytes_per_line and bytes_per_group must be greater than zero",
        ));
    }
    Ok(value)
}

//******************************************************************************
//  Tests
//******************************************************************************
