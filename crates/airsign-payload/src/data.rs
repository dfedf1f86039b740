use bytes::Bytes;

use crate::error::Result;

/// The data to be signed, as supplied by the caller.
///
/// Whether an input string is hex or text is decided once, before encoding.
/// The encoder itself only ever appends raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadData {
    /// Raw bytes, typically SCALE-encoded call data.
    Hex(Bytes),
    /// Free text, encoded as UTF-8.
    Text(String),
}

impl PayloadData {
    /// Classify a user-supplied string.
    ///
    /// `0x`-prefixed input is hex-decoded; anything else is taken as text.
    pub fn parse(input: &str) -> Result<Self> {
        match input.strip_prefix("0x") {
            Some(digits) => Ok(PayloadData::Hex(Bytes::from(hex::decode(digits)?))),
            None => Ok(PayloadData::Text(input.to_string())),
        }
    }

    /// The bytes appended to the payload.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PayloadData::Hex(bytes) => bytes.as_ref(),
            PayloadData::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            PayloadData::Hex(bytes) => bytes,
            PayloadData::Text(text) => Bytes::from(text.into_bytes()),
        }
    }
}

impl From<Vec<u8>> for PayloadData {
    fn from(bytes: Vec<u8>) -> Self {
        PayloadData::Hex(Bytes::from(bytes))
    }
}

impl From<&str> for PayloadData {
    fn from(text: &str) -> Self {
        PayloadData::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayloadError;

    #[test]
    fn parse_hex_prefixed() {
        let data = PayloadData::parse("0x12345678").unwrap();
        assert_eq!(data, PayloadData::Hex(Bytes::from_static(&[0x12, 0x34, 0x56, 0x78])));
    }

    #[test]
    fn parse_plain_text() {
        let data = PayloadData::parse("This is test").unwrap();
        assert_eq!(data.as_bytes(), b"This is test");
    }

    #[test]
    fn parse_bare_prefix_is_empty_hex() {
        let data = PayloadData::parse("0x").unwrap();
        assert!(matches!(data, PayloadData::Hex(_)));
        assert!(data.is_empty());
    }

    #[test]
    fn parse_rejects_bad_hex() {
        let err = PayloadData::parse("0xzz").unwrap_err();
        assert!(matches!(err, PayloadError::InvalidHex(_)));
    }

    #[test]
    fn text_that_looks_like_hex_stays_text() {
        let data = PayloadData::parse("1234").unwrap();
        assert_eq!(data.into_bytes().as_ref(), b"1234");
    }
}
