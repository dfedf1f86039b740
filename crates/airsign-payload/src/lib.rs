//! Compact binary wire format for offline signing requests.
//!
//! A signing request travels from an online wallet to an air-gapped signer
//! as a single byte string:
//! - A 1-byte network tag identifying the payload family
//! - A 1-byte crypto algorithm and a 1-byte command code
//! - The 32-byte signer public key
//! - The raw data being signed (call bytes or message bytes)
//! - The 32-byte genesis hash of the target chain, always last
//!
//! This is the lowest layer of airsign. Splitting the bytes into QR-sized
//! frames lives in `airsign-frame`.

pub mod algorithm;
pub mod codec;
pub mod command;
pub mod data;
pub mod error;
pub mod request;

pub use algorithm::CryptoAlgorithm;
pub use codec::{
    decode_payload, encode_payload, GENESIS_HASH_LEN, HEADER_SIZE, MIN_PAYLOAD_SIZE,
    PUBLIC_KEY_LEN,
};
pub use command::{
    command_name, SIGN_IMMORTAL_TRANSACTION, SIGN_MESSAGE, SIGN_MORTAL_TRANSACTION,
    SIGN_TRANSACTION_HASH,
};
pub use data::PayloadData;
pub use error::{PayloadError, Result};
pub use request::{EncoderConfig, SigningRequest, NETWORK_TAG_SUBSTRATE};
