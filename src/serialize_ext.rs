// hex_format/src/serialize_ext.rs

//******************************************************************************
//  Serde Serialization
//******************************************************************************

/// Serializes byte fields as hex strings via Serde.
///
/// Apply with `#[serde(with = "hex_format::serde_hex")]` to any field that
/// dereferences to `[u8]`. The field is written as a lowercase hex string in
/// the default format and read back case-insensitively.
#[cfg(feature = "serde")]
pub mod serde_hex {
    use crate::{bytes_to_hex, hex_to_bytes, HexFormat};
    use alloc::string::String;
    use alloc::vec::Vec;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `bytes` as a default-format hex string.
    pub fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        let text = bytes_to_hex(bytes.as_ref(), &HexFormat::DEFAULT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes a hex string into owned bytes, ignoring digit case.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        hex_to_bytes(&text, &HexFormat::DEFAULT).map_err(serde::de::Error::custom)
    }
}

// --- Tests for the field adapter ---
#[cfg(all(test, feature = "serde"))]
mod serde_hex_tests {
    use crate::*;
    use serde::{Deserialize, Serialize};
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    /// A test structure carrying a hex-encoded byte field.
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Packet {
        #[serde(with = "serialize_ext::serde_hex")]
        payload: Vec<u8>,
    }

    #[test]
    fn test_serde_hex_round_trip() {
        let packet = Packet {
            payload: vec![0xDE, 0xAD, 0xBE, 0xEF],
        };

        assert_tokens(
            &packet,
            &[
                Token::Struct { name: "Packet", len: 1 },
                Token::Str("payload"),
                Token::Str("deadbeef"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_serde_hex_accepts_uppercase() {
        let packet = Packet {
            payload: vec![0xDE, 0xAD],
        };

        assert_de_tokens(
            &packet,
            &[
                Token::Struct { name: "Packet", len: 1 },
                Token::Str("payload"),
                Token::Str("DEAD"),
                Token::StructEnd,
            ],
        );
    }
}
