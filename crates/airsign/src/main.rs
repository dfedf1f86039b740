mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{LogFormat, LogLevel, LogSettings};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "airsign", version, about = "Offline signing requests over animated QR codes")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "AIRSIGN_LOG_LEVEL",
        default_value = "info",
        global = true
    )]
    log_level: LogLevel,

    /// Only log errors.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    LogSettings::resolve(cli.log_format, cli.log_level, cli.quiet).init();

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(code = err.code, "command failed");
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "airsign",
            "encode",
            "--crypto",
            "ed25519",
            "--command",
            "0x03",
            "--public-key",
            "00",
            "--genesis-hash",
            "00",
            "--data",
            "hello",
        ])
        .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.request.command, 3);
                assert_eq!(args.request.network_tag, 0x53);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_payload_with_request_fields() {
        let err = Cli::try_parse_from([
            "airsign",
            "split",
            "--payload",
            "00",
            "--public-key",
            "00",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_split_chunk_size() {
        let cli = Cli::try_parse_from(["airsign", "split", "--payload", "00", "--chunk-size", "64"])
            .expect("split args should parse");
        match cli.command {
            Command::Split(args) => assert_eq!(args.chunk_size, 64),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_crypto() {
        let err = Cli::try_parse_from(["airsign", "encode", "--crypto", "rsa"])
            .expect_err("unknown crypto should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn parses_reassemble_from_stdin() {
        let cli = Cli::try_parse_from(["airsign", "-q", "reassemble", "--decode"])
            .expect("reassemble args should parse");
        assert!(cli.quiet);
        match cli.command {
            Command::Reassemble(args) => {
                assert!(args.input.is_none());
                assert!(args.decode);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
