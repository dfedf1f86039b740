use airsign_payload::{EncoderConfig, PayloadData, SigningRequest};

use crate::cmd::{parse_hex, EncodeArgs, RequestArgs};
use crate::exit::{payload_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_payload, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let request = build_request(&args.request)?;
    print_payload(&request.encode(), format);
    Ok(SUCCESS)
}

/// Resolve CLI request arguments into a validated signing request.
pub fn build_request(args: &RequestArgs) -> CliResult<SigningRequest> {
    let public_key = args
        .public_key
        .as_deref()
        .ok_or_else(|| CliError::new(USAGE, "--public-key is required"))?;
    let genesis_hash = args
        .genesis_hash
        .as_deref()
        .ok_or_else(|| CliError::new(USAGE, "--genesis-hash is required"))?;

    let public_key = parse_hex("--public-key", public_key)?;
    let genesis_hash = parse_hex("--genesis-hash", genesis_hash)?;
    let data =
        PayloadData::parse(&args.data).map_err(|err| payload_error("invalid --data", err))?;

    let config = EncoderConfig {
        network_tag: args.network_tag,
    };
    let request = SigningRequest::new(
        &config,
        args.crypto.into(),
        args.command,
        &public_key,
        data,
        &genesis_hash,
    )
    .map_err(|err| payload_error("invalid request", err))?;

    tracing::debug!(
        crypto = %request.crypto,
        command = request.command,
        data_len = request.data.len(),
        "built signing request"
    );
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CryptoArg;

    fn args(public_key: Option<&str>) -> RequestArgs {
        RequestArgs {
            crypto: CryptoArg::Sr25519,
            command: 3,
            public_key: public_key.map(str::to_string),
            data: "This is test".to_string(),
            genesis_hash: Some("22".repeat(32)),
            network_tag: 0x53,
        }
    }

    #[test]
    fn builds_text_request() {
        let request = build_request(&args(Some(&"11".repeat(32)))).unwrap();
        assert_eq!(request.data.as_ref(), b"This is test");
        assert_eq!(request.public_key, [0x11; 32]);
    }

    #[test]
    fn missing_public_key_is_usage_error() {
        let err = build_request(&args(None)).unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn short_public_key_is_usage_error() {
        let err = build_request(&args(Some("1111"))).unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(err.message.contains("invalid public key length (2 bytes"));
    }
}
