use std::fmt;

/// Signature scheme the signer is asked to use.
///
/// Unrecognized codes are preserved in [`CryptoAlgorithm::Unknown`] so the
/// encoder stays forward-compatible; the default decoder rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoAlgorithm {
    Ed25519,
    Sr25519,
    Ecdsa,
    Unknown(u8),
}

impl CryptoAlgorithm {
    /// Wire code for this algorithm.
    pub fn code(self) -> u8 {
        match self {
            CryptoAlgorithm::Ed25519 => 0,
            CryptoAlgorithm::Sr25519 => 1,
            CryptoAlgorithm::Ecdsa => 2,
            CryptoAlgorithm::Unknown(code) => code,
        }
    }

    /// Returns true for the closed set {ed25519, sr25519, ecdsa}.
    pub fn is_recognized(self) -> bool {
        !matches!(self, CryptoAlgorithm::Unknown(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            CryptoAlgorithm::Ed25519 => "ed25519",
            CryptoAlgorithm::Sr25519 => "sr25519",
            CryptoAlgorithm::Ecdsa => "ecdsa",
            CryptoAlgorithm::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for CryptoAlgorithm {
    fn from(code: u8) -> Self {
        match code {
            0 => CryptoAlgorithm::Ed25519,
            1 => CryptoAlgorithm::Sr25519,
            2 => CryptoAlgorithm::Ecdsa,
            other => CryptoAlgorithm::Unknown(other),
        }
    }
}

impl From<CryptoAlgorithm> for u8 {
    fn from(algorithm: CryptoAlgorithm) -> Self {
        algorithm.code()
    }
}

impl fmt::Display for CryptoAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoAlgorithm::Unknown(code) => write!(f, "unknown(0x{code:02x})"),
            known => f.write_str(known.name()),
        }
    }
}
