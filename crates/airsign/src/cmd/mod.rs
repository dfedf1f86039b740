use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use airsign_frame::DEFAULT_MAX_CHUNK_SIZE;
use airsign_payload::{CryptoAlgorithm, NETWORK_TAG_SUBSTRATE};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod reassemble;
pub mod split;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a signing request into payload bytes.
    Encode(EncodeArgs),
    /// Split a payload into QR frames, one hex frame per line.
    Split(SplitArgs),
    /// Reassemble scanned frames (one hex frame per line) into a payload.
    Reassemble(ReassembleArgs),
    /// Decode payload bytes into a signing request.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Split(args) => split::run(args, format),
        Command::Reassemble(args) => reassemble::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CryptoArg {
    Ed25519,
    Sr25519,
    Ecdsa,
}

impl From<CryptoArg> for CryptoAlgorithm {
    fn from(arg: CryptoArg) -> Self {
        match arg {
            CryptoArg::Ed25519 => CryptoAlgorithm::Ed25519,
            CryptoArg::Sr25519 => CryptoAlgorithm::Sr25519,
            CryptoArg::Ecdsa => CryptoAlgorithm::Ecdsa,
        }
    }
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Signature scheme.
    #[arg(long, value_enum, default_value = "sr25519")]
    pub crypto: CryptoArg,
    /// Command code (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0", value_parser = parse_byte)]
    pub command: u8,
    /// Signer public key, 32 bytes hex.
    #[arg(long, value_name = "HEX")]
    pub public_key: Option<String>,
    /// Data to sign: 0x-prefixed hex, otherwise taken as text.
    #[arg(long, default_value = "")]
    pub data: String,
    /// Genesis hash of the target chain, 32 bytes hex.
    #[arg(long, value_name = "HEX")]
    pub genesis_hash: Option<String>,
    /// Network tag byte (decimal or 0x-prefixed hex).
    #[arg(
        long,
        env = "AIRSIGN_NETWORK_TAG",
        default_value_t = NETWORK_TAG_SUBSTRATE,
        value_parser = parse_byte
    )]
    pub network_tag: u8,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Pre-encoded payload hex; skips request encoding.
    #[arg(long, value_name = "HEX", conflicts_with_all = ["public_key", "genesis_hash"])]
    pub payload: Option<String>,
    #[command(flatten)]
    pub request: RequestArgs,
    /// Maximum chunk bytes per frame.
    #[arg(long, env = "AIRSIGN_CHUNK_SIZE", default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
    pub chunk_size: u16,
}

#[derive(Args, Debug)]
pub struct ReassembleArgs {
    /// File of hex frames, one per line. Reads stdin when omitted or "-".
    pub input: Option<PathBuf>,
    /// Decode the reassembled payload into a signing request.
    #[arg(long)]
    pub decode: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Payload hex (optionally 0x-prefixed).
    pub payload: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_byte(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = match input.strip_prefix("0x") {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => input.parse(),
    };
    parsed.map_err(|_| format!("not a byte value: {input}"))
}

/// Decode a hex argument, accepting an optional `0x` prefix.
pub fn parse_hex(name: &str, input: &str) -> CliResult<Vec<u8>> {
    let input = input.trim();
    let digits = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(digits)
        .map_err(|err| CliError::new(USAGE, format!("{name} is not valid hex: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_byte_decimal_and_hex() {
        assert_eq!(parse_byte("83"), Ok(0x53));
        assert_eq!(parse_byte("0x53"), Ok(0x53));
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0xzz").is_err());
    }

    #[test]
    fn parse_hex_accepts_prefix() {
        assert_eq!(parse_hex("x", "0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(parse_hex("x", "0a0b").unwrap(), vec![0x0a, 0x0b]);
        let err = parse_hex("--public-key", "abc").unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("--public-key is not valid hex"));
    }
}
