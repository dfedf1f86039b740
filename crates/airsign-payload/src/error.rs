/// Errors that can occur while encoding or decoding a signing payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The signer public key is not exactly 32 bytes.
    #[error("invalid public key length ({len} bytes, expected 32)")]
    InvalidPublicKeyLength { len: usize },

    /// The genesis hash is not exactly 32 bytes.
    #[error("invalid genesis hash length ({len} bytes, expected 32)")]
    InvalidGenesisHashLength { len: usize },

    /// The payload is shorter than the fixed fields require.
    #[error("truncated payload ({len} bytes, min {min})")]
    TruncatedPayload { len: usize, min: usize },

    /// The crypto algorithm byte is outside the recognized set.
    #[error("unsupported crypto algorithm 0x{0:02x}")]
    UnsupportedCryptoAlgorithm(u8),

    /// A `0x`-prefixed input was not valid hex.
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, PayloadError>;
