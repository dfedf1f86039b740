//! Offline signing requests over animated QR codes.
//!
//! airsign moves a signing request from an online wallet to an air-gapped
//! signer through a sequence of QR images.
//!
//! # Crate Structure
//!
//! - [`payload`] — Binary wire format of a signing request
//! - [`frame`] — Splitting into QR-sized frames and order-independent reassembly
//!
//! The producer side runs [`prepare`] and renders each frame; the consumer side
//! pushes scanned frames into a [`frame::Reassembler`], or calls [`scan`] when
//! it already holds them all.

use airsign_frame::{split_with_config, Frame, FrameConfig, Ingest, Reassembler};
use airsign_payload::SigningRequest;

/// Re-export payload types.
pub mod payload {
    pub use airsign_payload::*;
}

/// Re-export frame types.
pub mod frame {
    pub use airsign_frame::*;
}

/// Errors from either protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("payload error: {0}")]
    Payload(#[from] airsign_payload::PayloadError),

    #[error("frame error: {0}")]
    Frame(#[from] airsign_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Encode a request and split it into frames ready for rendering.
pub fn prepare(request: &SigningRequest, framing: &FrameConfig) -> Result<Vec<Frame>> {
    let frames = split_with_config(request.encode(), framing)?;
    Ok(frames)
}

/// Reassemble frames and decode the resulting request.
///
/// Returns `Ok(None)` if the frames run out before the set is complete.
pub fn scan<I>(frames: I) -> Result<Option<SigningRequest>>
where
    I: IntoIterator<Item = Frame>,
{
    let mut reassembler = Reassembler::new();
    for frame in frames {
        if let Ingest::Complete(payload) = reassembler.ingest(frame)? {
            return Ok(Some(SigningRequest::decode(&payload)?));
        }
    }
    tracing::debug!(
        received = reassembler.received_count(),
        missing = reassembler.missing_indices().len(),
        "frames exhausted before completion"
    );
    Ok(None)
}
