use bytes::{BufMut, Bytes, BytesMut};

use crate::algorithm::CryptoAlgorithm;
use crate::data::PayloadData;
use crate::error::{PayloadError, Result};
use crate::request::SigningRequest;

/// Header: network tag (1) + crypto algorithm (1) + command (1) = 3 bytes.
pub const HEADER_SIZE: usize = 3;

pub const PUBLIC_KEY_LEN: usize = 32;

pub const GENESIS_HASH_LEN: usize = 32;

/// Smallest valid payload: header + public key + genesis hash, empty data.
pub const MIN_PAYLOAD_SIZE: usize = HEADER_SIZE + PUBLIC_KEY_LEN + GENESIS_HASH_LEN;

const DATA_OFFSET: usize = HEADER_SIZE + PUBLIC_KEY_LEN;

/// Encode a signing request into the wire format.
///
/// Wire format:
/// ```text
/// ┌─────────┬────────┬─────────┬────────────┬───────────┬──────────────┐
/// │ Network │ Crypto │ Command │ Public key │ Data      │ Genesis hash │
/// │ (1B)    │ (1B)   │ (1B)    │ (32B)      │ (N bytes) │ (32B)        │
/// └─────────┴────────┴─────────┴────────────┴───────────┴──────────────┘
/// ```
///
/// Only the two fixed-width fields are validated. The crypto algorithm and
/// command are written as given. Nothing is written to `dst` on error.
pub fn encode_payload(
    network_tag: u8,
    crypto: CryptoAlgorithm,
    command: u8,
    public_key: &[u8],
    data: &PayloadData,
    genesis_hash: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(PayloadError::InvalidPublicKeyLength {
            len: public_key.len(),
        });
    }
    if genesis_hash.len() != GENESIS_HASH_LEN {
        return Err(PayloadError::InvalidGenesisHashLength {
            len: genesis_hash.len(),
        });
    }

    let data = data.as_bytes();
    dst.reserve(MIN_PAYLOAD_SIZE + data.len());
    dst.put_u8(network_tag);
    dst.put_u8(crypto.code());
    dst.put_u8(command);
    dst.put_slice(public_key);
    dst.put_slice(data);
    dst.put_slice(genesis_hash);
    Ok(())
}

pub(crate) fn put_request(request: &SigningRequest, dst: &mut BytesMut) {
    dst.reserve(request.wire_size());
    dst.put_u8(request.network_tag);
    dst.put_u8(request.crypto.code());
    dst.put_u8(request.command);
    dst.put_slice(&request.public_key);
    dst.put_slice(&request.data);
    dst.put_slice(&request.genesis_hash);
}

/// Decode a complete payload into a signing request.
///
/// The genesis hash is always the final 32 bytes; the data is whatever lies
/// between the public key and the genesis hash and may be empty.
pub fn decode_payload(src: &[u8]) -> Result<SigningRequest> {
    if src.len() < MIN_PAYLOAD_SIZE {
        return Err(PayloadError::TruncatedPayload {
            len: src.len(),
            min: MIN_PAYLOAD_SIZE,
        });
    }

    let crypto = CryptoAlgorithm::from(src[1]);
    if !crypto.is_recognized() {
        return Err(PayloadError::UnsupportedCryptoAlgorithm(src[1]));
    }

    let genesis_offset = src.len() - GENESIS_HASH_LEN;
    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    public_key.copy_from_slice(&src[HEADER_SIZE..DATA_OFFSET]);
    let mut genesis_hash = [0u8; GENESIS_HASH_LEN];
    genesis_hash.copy_from_slice(&src[genesis_offset..]);

    let request = SigningRequest {
        network_tag: src[0],
        crypto,
        command: src[2],
        public_key,
        data: Bytes::copy_from_slice(&src[DATA_OFFSET..genesis_offset]),
        genesis_hash,
    };
    tracing::debug!(
        network_tag = request.network_tag,
        crypto = %request.crypto,
        command = request.command,
        data_len = request.data.len(),
        "decoded signing payload"
    );
    Ok(request)
}
