//! Multipart framing and order-independent reassembly for animated QR transfer.
//!
//! A payload too large for one QR code is split into self-describing frames:
//! - A 1-byte marker (0x00) identifying a multipart-capable frame
//! - A 2-byte big-endian total frame count
//! - A 2-byte big-endian zero-based frame index
//!
//! followed by the chunk bytes. A looping animated QR delivers frames in any
//! order and with repeats; [`Reassembler`] accepts them as they come and hands
//! back the original bytes exactly once.

pub mod codec;
pub mod error;
pub mod reader;
pub mod reassembler;
pub mod split;
pub mod writer;

pub use codec::{
    decode_frame, decode_u16, encode_frame, encode_u16, Frame, FrameConfig,
    DEFAULT_MAX_CHUNK_SIZE, FRAME_MARKER, HEADER_SIZE, MAX_FRAME_COUNT,
};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use reassembler::{Ingest, Reassembler, SessionState};
pub use split::{split, split_with_config};
pub use writer::FrameWriter;
