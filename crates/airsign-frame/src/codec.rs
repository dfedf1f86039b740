use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: marker (1) + count (2) + index (2) = 5 bytes.
pub const HEADER_SIZE: usize = 5;

/// Marker byte for a multipart-capable frame.
pub const FRAME_MARKER: u8 = 0x00;

/// Largest frame count the 16-bit count field can carry (0 is invalid).
pub const MAX_FRAME_COUNT: usize = u16::MAX as usize;

/// Default maximum chunk size in bytes.
pub const DEFAULT_MAX_CHUNK_SIZE: u16 = 1024;

/// One chunk of a split payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Total number of frames in the set.
    pub count: u16,
    /// Zero-based position of this frame within the set.
    pub index: u16,
    /// The payload bytes carried by this frame.
    pub chunk: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(count: u16, index: u16, chunk: impl Into<Bytes>) -> Self {
        Self {
            count,
            index,
            chunk: chunk.into(),
        }
    }

    /// The total wire size of this frame (header + chunk).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.chunk.len()
    }

    /// Encode this frame into a fresh buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        encode_frame(self, &mut buf);
        buf.freeze()
    }
}

/// Serialize a u16 as two bytes, most significant first.
pub fn encode_u16(n: u16) -> [u8; 2] {
    n.to_be_bytes()
}

/// Inverse of [`encode_u16`].
pub fn decode_u16(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌────────────┬────────────┬────────────┬──────────────┐
/// │ Marker     │ Count      │ Index      │ Chunk        │
/// │ 0x00 (1B)  │ (2B BE)    │ (2B BE)    │ (rest)       │
/// └────────────┴────────────┴────────────┴──────────────┘
/// ```
pub fn encode_frame(frame: &Frame, dst: &mut BytesMut) {
    dst.reserve(frame.wire_size());
    dst.put_u8(FRAME_MARKER);
    dst.put_slice(&encode_u16(frame.count));
    dst.put_slice(&encode_u16(frame.index));
    dst.put_slice(&frame.chunk);
}

/// Decode one complete frame, as delivered by a single QR scan.
///
/// Count and index ranges are not checked here; that is the
/// [`Reassembler`](crate::Reassembler)'s job.
pub fn decode_frame(src: &[u8]) -> Result<Frame> {
    if src.len() < HEADER_SIZE {
        return Err(FrameError::TruncatedFrame {
            len: src.len(),
            min: HEADER_SIZE,
        });
    }

    if src[0] != FRAME_MARKER {
        return Err(FrameError::InvalidFrameMarker(src[0]));
    }

    let count = decode_u16([src[1], src[2]]);
    let index = decode_u16([src[3], src[4]]);

    Ok(Frame {
        count,
        index,
        chunk: Bytes::copy_from_slice(&src[HEADER_SIZE..]),
    })
}

/// Configuration for the frame splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum chunk bytes per frame. Default: 1024.
    pub max_chunk_size: u16,
}

impl FrameConfig {
    /// Reject configurations the splitter cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(FrameError::InvalidChunkSize);
        }
        Ok(())
    }

    /// Largest payload this configuration can frame.
    pub fn max_payload_size(&self) -> usize {
        MAX_FRAME_COUNT * usize::from(self.max_chunk_size)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_u16_known_values() {
        assert_eq!(encode_u16(0), [0, 0]);
        assert_eq!(encode_u16(1), [0, 1]);
        assert_eq!(encode_u16(257), [1, 1]);
        assert_eq!(encode_u16(u16::MAX), [0xff, 0xff]);
    }

    #[test]
    fn test_u16_roundtrip_exhaustive() {
        for n in 0..=u16::MAX {
            assert_eq!(decode_u16(encode_u16(n)), n);
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let frame = Frame::new(3, 2, Bytes::from_static(b"tail"));
        let mut buf = BytesMut::new();
        encode_frame(&frame, &mut buf);

        assert_eq!(buf.len(), HEADER_SIZE + 4);
        assert_eq!(&buf[..HEADER_SIZE], &[0x00, 0x00, 0x03, 0x00, 0x02]);

        let decoded = decode_frame(&buf).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_single_frame_header() {
        let frame = Frame::new(1, 0, vec![0x53, 0x01, 0x00]);
        assert_eq!(hex::encode(frame.to_bytes()), "0000010000530100");
    }

    #[test]
    fn test_decode_truncated_header() {
        let result = decode_frame(&[0x00, 0x00, 0x01, 0x00]);
        assert!(matches!(
            result,
            Err(FrameError::TruncatedFrame { len: 4, min: 5 })
        ));
    }

    #[test]
    fn test_decode_invalid_marker() {
        let result = decode_frame(&[0x53, 0x00, 0x01, 0x00, 0x00]);
        assert!(matches!(result, Err(FrameError::InvalidFrameMarker(0x53))));
    }

    #[test]
    fn test_decode_empty_chunk() {
        let frame = decode_frame(&[0x00, 0x00, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!((frame.count, frame.index), (1, 0));
        assert!(frame.chunk.is_empty());
    }

    #[test]
    fn test_decode_does_not_range_check() {
        let frame = decode_frame(&[0x00, 0x00, 0x00, 0x00, 0x07]).unwrap();
        assert_eq!((frame.count, frame.index), (0, 7));
    }

    #[test]
    fn test_config_validation() {
        assert!(FrameConfig::default().validate().is_ok());
        let zero = FrameConfig { max_chunk_size: 0 };
        assert!(matches!(zero.validate(), Err(FrameError::InvalidChunkSize)));
        assert_eq!(
            FrameConfig { max_chunk_size: 2 }.max_payload_size(),
            2 * 65535
        );
    }
}
