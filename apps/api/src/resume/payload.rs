//! Text-safe encoding of uploaded file bytes for storage inside documents.
//! Invariant: `decode(encode(b)) == b` byte-for-byte, including empty input.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_exact() {
        let payloads: [&[u8]; 4] = [
            b"%PDF",
            b"\x00\x01\x02\xff\xfe",
            b"a",
            &[0u8; 1024],
        ];
        for payload in payloads {
            assert_eq!(decode(&encode(payload)).unwrap(), payload);
        }
    }

    #[test]
    fn test_empty_payload_round_trips() {
        let encoded = encode(b"");
        assert!(encoded.is_empty());
        assert_eq!(decode(&encoded).unwrap(), b"");
    }

    #[test]
    fn test_decode_rejects_corrupt_input() {
        assert!(decode("not base64!!!").is_err());
    }
}
