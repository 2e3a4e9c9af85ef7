// hex_format/src/hf_error.rs

use super::*;

/// Custom error type for the hex codec operations.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HexFormatError {
    /// Returned when an end index points past the end of the input.
    ///
    /// Start indices are `usize`, so a negative start is unrepresentable and
    /// this variant only arises from the end index.
    OutOfRange {
        /// The offending end index.
        index: usize,
        /// The length of the input.
        length: usize,
    },
    /// Returned when a start index is greater than its end index.
    InvalidRange {
        /// The start index.
        start: usize,
        /// The end index.
        end: usize,
    },
    /// Returned when the computed output length cannot be allocated.
    CapacityExceeded,
    /// Returned when the input does not match the configured format.
    ///
    /// The message names the expected literal or digit, the failing index,
    /// and the substring actually observed there.
    InvalidFormat {
        /// The rendered diagnostic.
        message: String,
    },
}

impl fmt::Debug for HexFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, length } => {
                write!(f, "OutOfRange: index {}, length {}", index, length)
            }
            Self::InvalidRange { start, end } => {
                write!(f, "InvalidRange: start {}, end {}", start, end)
            }
            Self::CapacityExceeded => write!(f, "CapacityExceeded"),
            Self::InvalidFormat { message } => write!(f, "InvalidFormat: {}", message),
        }
    }
}

impl fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, length } => {
                write!(
                    f,
                    "end index {} is out of bounds for input of length {}",
                    index, length
                )
            }
            Self::InvalidRange { start, end } => {
                write!(f, "start index {} is greater than end index {}", start, end)
            }
            Self::CapacityExceeded => {
                write!(f, "the formatted output length exceeds the maximum supported capacity")
            }
            Self::InvalidFormat { message } => write!(f, "{}", message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexFormatError {}

//******************************************************************************
//  Tests
//******************************************************************************

#[cfg(all(test, feature = "std"))]
#[test]
fn test_error_display() {
    use super::*;
    let out_of_range = HexFormatError::OutOfRange { index: 9, length: 4 };
    assert_eq!(
        format!("{}", out_of_range),
        "end index 9 is out of bounds for input of length 4"
    );
    let invalid_range = HexFormatError::InvalidRange { start: 3, end: 1 };
    assert_eq!(format!("{}", invalid_range), "start index 3 is greater than end index 1");
    let invalid = HexFormatError::InvalidFormat {
        message: String::from("Expected a hexadecimal digit at index 0, but was 'g'"),
    };
    assert_eq!(
        format!("{}", invalid),
        "Expected a hexadecimal digit at index 0, but was 'g'"
    );
}
