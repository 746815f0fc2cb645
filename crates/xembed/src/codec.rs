//! Binary-to-text payload codec

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// Encode raw bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into the original bytes.
///
/// Exact left inverse of [`encode`]. Input with an invalid length or
/// characters outside the alphabet fails with a malformed-payload error.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(Error::malformed_payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rfc_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_roundtrip() {
        let original: Vec<u8> = (0..=255).collect();
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_character() {
        let err = decode("Zm9v!###").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MalformedPayload);
    }

    #[test]
    fn test_invalid_length() {
        let err = decode("Zm9vY").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MalformedPayload);
    }
}
