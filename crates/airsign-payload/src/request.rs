use bytes::{Bytes, BytesMut};

use crate::algorithm::CryptoAlgorithm;
use crate::codec::{decode_payload, GENESIS_HASH_LEN, PUBLIC_KEY_LEN};
use crate::data::PayloadData;
use crate::error::{PayloadError, Result};

/// Network tag for Substrate-family payloads (`'S'`).
pub const NETWORK_TAG_SUBSTRATE: u8 = 0x53;

/// Encoder-side constants that are passed in rather than hard-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Discriminator byte written at offset 0. Default: `0x53`.
    pub network_tag: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            network_tag: NETWORK_TAG_SUBSTRATE,
        }
    }
}

/// A structured signing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    pub network_tag: u8,
    pub crypto: CryptoAlgorithm,
    /// Opaque command code, see [`crate::command`].
    pub command: u8,
    pub public_key: [u8; PUBLIC_KEY_LEN],
    /// Call or message bytes; may be empty.
    pub data: Bytes,
    pub genesis_hash: [u8; GENESIS_HASH_LEN],
}

impl SigningRequest {
    /// Build a request from loosely-typed inputs, checking the fixed-width fields.
    pub fn new(
        config: &EncoderConfig,
        crypto: CryptoAlgorithm,
        command: u8,
        public_key: &[u8],
        data: PayloadData,
        genesis_hash: &[u8],
    ) -> Result<Self> {
        let public_key: [u8; PUBLIC_KEY_LEN] =
            public_key
                .try_into()
                .map_err(|_| PayloadError::InvalidPublicKeyLength {
                    len: public_key.len(),
                })?;
        let genesis_hash: [u8; GENESIS_HASH_LEN] =
            genesis_hash
                .try_into()
                .map_err(|_| PayloadError::InvalidGenesisHashLength {
                    len: genesis_hash.len(),
                })?;

        Ok(Self {
            network_tag: config.network_tag,
            crypto,
            command,
            public_key,
            data: data.into_bytes(),
            genesis_hash,
        })
    }

    /// Serialize into the canonical wire bytes.
    pub fn encode(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.wire_size());
        self.encode_into(&mut dst);
        dst.freeze()
    }

    /// Append the canonical wire bytes to `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) {
        crate::codec::put_request(self, dst);
    }

    /// Parse canonical wire bytes.
    pub fn decode(src: &[u8]) -> Result<Self> {
        decode_payload(src)
    }

    /// Total encoded size in bytes.
    pub fn wire_size(&self) -> usize {
        crate::codec::MIN_PAYLOAD_SIZE + self.data.len()
    }

}
