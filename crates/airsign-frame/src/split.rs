use bytes::Bytes;

use crate::codec::{Frame, FrameConfig, MAX_FRAME_COUNT};
use crate::error::{FrameError, Result};

/// Split a payload into frames of at most `max_chunk_size` bytes.
///
/// Always yields at least one frame; an empty payload becomes a single frame
/// with an empty chunk. Frames are returned in ascending index order and
/// share the payload's buffer.
pub fn split(payload: impl Into<Bytes>, max_chunk_size: u16) -> Result<Vec<Frame>> {
    split_with_config(payload, &FrameConfig { max_chunk_size })
}

/// Split a payload using an explicit configuration.
pub fn split_with_config(payload: impl Into<Bytes>, config: &FrameConfig) -> Result<Vec<Frame>> {
    config.validate()?;

    let payload = payload.into();
    let chunk_size = usize::from(config.max_chunk_size);
    let count = payload.len().div_ceil(chunk_size).max(1);

    if count > MAX_FRAME_COUNT {
        return Err(FrameError::PayloadTooLargeForFraming {
            size: payload.len(),
            max: config.max_payload_size(),
        });
    }

    let frames: Vec<Frame> = (0..count)
        .map(|i| {
            let start = i * chunk_size;
            let end = usize::min(start + chunk_size, payload.len());
            // count <= u16::MAX, so both casts are lossless.
            Frame::new(count as u16, i as u16, payload.slice(start..end))
        })
        .collect();

    tracing::debug!(
        payload_len = payload.len(),
        chunk_size,
        frames = frames.len(),
        "split payload into frames"
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_small_payload_is_single_frame() {
        let frames = split(Bytes::from_static(b"hello"), 16).unwrap();
        assert_eq!(frames, vec![Frame::new(1, 0, Bytes::from_static(b"hello"))]);
    }

    #[test]
    fn split_exact_fit_is_single_frame() {
        let frames = split(vec![7u8; 16], 16).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].chunk.len(), 16);
    }

    #[test]
    fn split_empty_payload() {
        let frames = split(Bytes::new(), 8).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!((frames[0].count, frames[0].index), (1, 0));
        assert!(frames[0].chunk.is_empty());
    }

    #[test]
    fn split_last_chunk_is_shorter() {
        let payload: Vec<u8> = (0..10).collect();
        let frames = split(payload, 4).unwrap();

        assert_eq!(frames.len(), 3);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.count, 3);
            assert_eq!(usize::from(frame.index), i);
        }
        assert_eq!(frames[0].chunk.as_ref(), &[0, 1, 2, 3]);
        assert_eq!(frames[1].chunk.as_ref(), &[4, 5, 6, 7]);
        assert_eq!(frames[2].chunk.as_ref(), &[8, 9]);
    }

    #[test]
    fn split_rejects_zero_chunk_size() {
        assert!(matches!(
            split(vec![1u8], 0),
            Err(FrameError::InvalidChunkSize)
        ));
    }

    #[test]
    fn split_at_frame_limit() {
        let frames = split(vec![0u8; MAX_FRAME_COUNT], 1).unwrap();
        assert_eq!(frames.len(), MAX_FRAME_COUNT);
        assert_eq!(frames[MAX_FRAME_COUNT - 1].index, u16::MAX - 1);
    }

    #[test]
    fn split_rejects_too_many_frames() {
        let result = split(vec![0u8; MAX_FRAME_COUNT + 1], 1);
        assert!(matches!(
            result,
            Err(FrameError::PayloadTooLargeForFraming {
                size: 65536,
                max: 65535
            })
        ));
    }

    #[test]
    fn split_uses_config() {
        let config = FrameConfig { max_chunk_size: 3 };
        let frames = split_with_config(Bytes::from_static(b"abcdefg"), &config).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].chunk.as_ref(), b"g");
    }
}
