use std::fmt;
use std::io;

use airsign_frame::FrameError;
use airsign_payload::PayloadError;

// Process exit codes. Protocol violations in scanned data map to DATA_INVALID.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn payload_error(context: &str, err: PayloadError) -> CliError {
    match err {
        PayloadError::InvalidPublicKeyLength { .. }
        | PayloadError::InvalidGenesisHashLength { .. }
        | PayloadError::InvalidHex(_) => CliError::new(USAGE, format!("{context}: {err}")),
        PayloadError::TruncatedPayload { .. } | PayloadError::UnsupportedCryptoAlgorithm(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::InvalidChunkSize => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}
