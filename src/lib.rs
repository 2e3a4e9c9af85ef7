// hex_format/src/lib.rs

//! A configurable hexadecimal codec for byte slices and fixed-width integers.
//!
//! [`HexFormat`] is an immutable description of how hex text is laid out: a
//! per-byte prefix and suffix, separators between bytes and between groups of
//! bytes, line wrapping after a fixed number of bytes, digit case, and — for
//! numbers — an optional prefix/suffix and leading-zero stripping. The same
//! format value drives both directions: formatting produces exactly the
//! configured layout, parsing requires it.
//!
//! # Behavior
//! - **Single allocation:** the encoder computes the exact output length from
//!   the format before writing a single character; the decoder pre-sizes its
//!   output from an upper bound. Neither reallocates.
//! - **Tolerant parsing:** hex digits and configured literals are matched
//!   ignoring ASCII case, and any of `"\r\n"`, `"\n"`, `"\r"` is accepted
//!   where a line break is expected. Formatting always emits `"\n"`.
//! - **No panics on bad input:** malformed text surfaces as
//!   [`HexFormatError`]; panics are reserved for constructing a format with a
//!   zero group or line size.
//!
//! # Examples
//! ```
//! use hex_format::{bytes_to_hex, hex_to_bytes, HexFormat};
//!
//! let format = HexFormat::builder()
//!     .bytes_per_line(2)
//!     .bytes_per_group(1)
//!     .group_separator(" ")
//!     .build();
//!
//! let text = bytes_to_hex(&[0x01, 0x02, 0x03, 0x04, 0x05], &format).unwrap();
//! assert_eq!(text, "01 02\n03 04\n05");
//! assert_eq!(hex_to_bytes(&text, &format).unwrap(), [1, 2, 3, 4, 5]);
//! ```
//!
//! Also included:
//! - [`ToHex`] and [`FromHex`]: extension traits over byte slices and the
//!   four unsigned integer widths.
//! - Optional `serde` support for the format values, plus the
//!   [`serde_hex`](serialize_ext::serde_hex) field adapter, and support for
//!   `no_std` environments (an allocator is still required).

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
#[cfg(test)]
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Defines the immutable format values and their builder.
pub mod hf_config;
/// Parses hex text back into byte sequences.
pub mod hf_decode;
/// Formats byte sequences as hex text.
pub mod hf_encode;
/// Defines the error type shared by all codec operations.
pub mod hf_error;
/// Implements the `ToHex` and `FromHex` extension traits.
pub mod hf_impl;
/// Formats and parses fixed-width unsigned integers.
pub mod hf_number;
/// Computes exact output lengths and parse-size upper bounds.
pub mod hf_sizer;
/// Contains digit tables, literal matching and range validation helpers.
pub mod hex_helpers;
/// Provides the optional `serde` field adapter for hex-encoded bytes.
pub mod serialize_ext;

pub use hf_config::{BytesFormat, HexFormat, HexFormatBuilder, NumberFormat};
pub use hf_decode::{hex_to_bytes, hex_to_bytes_range};
pub use hf_encode::{bytes_to_hex, bytes_to_hex_range};
pub use hf_error::HexFormatError;
pub use hf_impl::{FromHex, ToHex};
pub use hf_number::{
    format_u16, format_u32, format_u64, format_u8, parse_u16, parse_u16_range, parse_u32,
    parse_u32_range, parse_u64, parse_u64_range, parse_u8, parse_u8_range,
};
pub use hf_sizer::{formatted_hex_length, parsed_bytes_max_size};
#[cfg(feature = "serde")]
pub use serialize_ext::serde_hex;
