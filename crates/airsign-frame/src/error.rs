/// Errors that can occur while splitting, decoding, or reassembling frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The configured maximum chunk size is zero.
    #[error("invalid chunk size (must be at least 1)")]
    InvalidChunkSize,

    /// The payload would need more frames than a u16 count can describe.
    #[error("payload too large for framing ({size} bytes, max {max} at this chunk size)")]
    PayloadTooLargeForFraming { size: usize, max: usize },

    /// The frame does not start with the multipart marker.
    #[error("invalid frame marker 0x{0:02x} (expected 0x00)")]
    InvalidFrameMarker(u8),

    /// The buffer is shorter than the frame header.
    #[error("truncated frame ({len} bytes, header is {min})")]
    TruncatedFrame { len: usize, min: usize },

    /// A frame reports a total count of zero.
    #[error("invalid frame count 0")]
    InvalidFrameCount,

    /// A frame disagrees with the session's frame count. The session is aborted.
    #[error("frame count mismatch (session expects {expected}, frame reports {actual})")]
    FrameCountMismatch { expected: u16, actual: u16 },

    /// The frame index is not below the frame count.
    #[error("frame index {index} out of range for {count} frames")]
    FrameIndexOutOfRange { index: u16, count: u16 },

    /// The same index was delivered twice with different bytes.
    #[error("conflicting content for frame {index}")]
    FrameConflict { index: u16 },

    /// The session was aborted by an earlier violation and must be restarted.
    #[error("reassembly session aborted")]
    SessionAborted,

    /// The session already produced its payload.
    #[error("reassembly session already complete")]
    SessionComplete,

    /// A textual frame was not valid hex.
    #[error("invalid hex frame: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
