// hex_format/src/hf_impl.rs

use super::*;

/// Extension trait for formatting a value as hex text.
///
/// Implemented for byte slices and the four unsigned integer widths. The
/// integer impls can never actually fail; they return `Result` so the trait
/// has one signature, and always return `Ok`.
///
/// # Examples
/// ```
/// use hex_format::{HexFormat, ToHex};
///
/// let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
/// assert_eq!(data.to_hex(&HexFormat::DEFAULT).unwrap(), "deadbeef");
/// assert_eq!(0xBEEFu16.to_hex(&HexFormat::UPPER_CASE).unwrap(), "BEEF");
/// ```
pub trait ToHex {
    /// Formats `self` as hex text under `format`.
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError>;
}

impl ToHex for [u8] {
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError> {
        bytes_to_hex(self, format)
    }
}

impl ToHex for u8 {
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError> {
        Ok(format_u8(*self, format))
    }
}

impl ToHex for u16 {
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError> {
        Ok(format_u16(*self, format))
    }
}

impl ToHex for u32 {
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError> {
        Ok(format_u32(*self, format))
    }
}

impl ToHex for u64 {
    fn to_hex(&self, format: &HexFormat) -> Result<String, HexFormatError> {
        Ok(format_u64(*self, format))
    }
}

/// Extension trait for parsing a value out of hex text.
///
/// # Examples
/// ```
/// use hex_format::{FromHex, HexFormat};
///
/// let bytes = Vec::<u8>::from_hex("DEADbeef", &HexFormat::DEFAULT).unwrap();
/// assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(u32::from_hex("3a", &HexFormat::DEFAULT), Ok(0x3A));
/// ```
pub trait FromHex: Sized {
    /// Parses the whole of `text` under `format`.
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError>;
}

impl FromHex for Vec<u8> {
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError> {
        hex_to_bytes(text, format)
    }
}

impl FromHex for u8 {
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError> {
        parse_u8(text, format)
    }
}

impl FromHex for u16 {
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError> {
        parse_u16(text, format)
    }
}

impl FromHex for u32 {
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError> {
        parse_u32(text, format)
    }
}

impl FromHex for u64 {
    fn from_hex(text: &str, format: &HexFormat) -> Result<Self, HexFormatError> {
        parse_u64(text, format)
    }
}

//******************************************************************************
//  Tests
//******************************************************************************
