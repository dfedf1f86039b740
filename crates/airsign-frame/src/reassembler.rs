use std::collections::BTreeMap;

use bytes::{Bytes, BytesMut};

use crate::codec::Frame;
use crate::error::{FrameError, Result};

/// Lifecycle of a reassembly session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No frame accepted yet.
    Empty,
    /// At least one frame accepted, more to come.
    Collecting,
    /// Every frame arrived and the payload has been handed out.
    Complete,
    /// A frame count mismatch poisoned the session.
    Aborted,
}

/// Outcome of a successful [`Reassembler::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingest {
    /// The frame was stored, or was a harmless duplicate.
    Progressed { received: usize, expected: u16 },
    /// The last missing frame arrived; carries the reconstructed payload.
    Complete(Bytes),
}

/// Collects the frames of one scanning session, in any order.
///
/// The first accepted frame fixes the expected frame count. Every later frame
/// must agree with it; a disagreement aborts the session and the caller must
/// start a new one. Repeated frames with identical bytes are ignored, which
/// makes a looping animated QR safe to feed straight in.
///
/// A rejected frame never changes the stored chunks.
#[derive(Debug)]
pub struct Reassembler {
    expected_count: Option<u16>,
    chunks: BTreeMap<u16, Bytes>,
    state: SessionState,
}

impl Reassembler {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            expected_count: None,
            chunks: BTreeMap::new(),
            state: SessionState::Empty,
        }
    }

    /// Feed one frame into the session.
    pub fn ingest(&mut self, frame: Frame) -> Result<Ingest> {
        match self.state {
            SessionState::Aborted => return Err(FrameError::SessionAborted),
            SessionState::Complete => return Err(FrameError::SessionComplete),
            SessionState::Empty | SessionState::Collecting => {}
        }

        let expected = match self.expected_count {
            None if frame.count == 0 => return Err(FrameError::InvalidFrameCount),
            None => frame.count,
            Some(expected) if frame.count != expected => {
                tracing::warn!(
                    expected,
                    actual = frame.count,
                    "frame count mismatch, aborting session"
                );
                self.state = SessionState::Aborted;
                return Err(FrameError::FrameCountMismatch {
                    expected,
                    actual: frame.count,
                });
            }
            Some(expected) => expected,
        };

        if frame.index >= expected {
            return Err(FrameError::FrameIndexOutOfRange {
                index: frame.index,
                count: expected,
            });
        }

        if let Some(existing) = self.chunks.get(&frame.index) {
            if *existing != frame.chunk {
                tracing::warn!(index = frame.index, "conflicting frame content");
                return Err(FrameError::FrameConflict { index: frame.index });
            }
            tracing::trace!(index = frame.index, "duplicate frame");
            return Ok(Ingest::Progressed {
                received: self.chunks.len(),
                expected,
            });
        }

        self.expected_count = Some(expected);
        self.chunks.insert(frame.index, frame.chunk);
        self.state = SessionState::Collecting;

        if self.chunks.len() < usize::from(expected) {
            tracing::debug!(
                index = frame.index,
                received = self.chunks.len(),
                expected,
                "stored frame"
            );
            return Ok(Ingest::Progressed {
                received: self.chunks.len(),
                expected,
            });
        }

        let payload = self.assemble();
        self.state = SessionState::Complete;
        tracing::debug!(frames = expected, len = payload.len(), "reassembly complete");
        Ok(Ingest::Complete(payload))
    }

    fn assemble(&self) -> Bytes {
        let total: usize = self.chunks.values().map(Bytes::len).sum();
        let mut payload = BytesMut::with_capacity(total);
        for chunk in self.chunks.values() {
            payload.extend_from_slice(chunk);
        }
        payload.freeze()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Frame count fixed by the first accepted frame.
    pub fn expected_count(&self) -> Option<u16> {
        self.expected_count
    }

    /// Number of distinct frames stored so far.
    pub fn received_count(&self) -> usize {
        self.chunks.len()
    }

    /// Indices still outstanding, ascending. Empty before the first frame.
    pub fn missing_indices(&self) -> Vec<u16> {
        match self.expected_count {
            Some(expected) => (0..expected)
                .filter(|index| !self.chunks.contains_key(index))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Fraction of frames received, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        match self.expected_count {
            Some(expected) => self.chunks.len() as f32 / f32::from(expected),
            None => 0.0,
        }
    }

    /// Discard everything and start a fresh session.
    pub fn reset(&mut self) {
        self.expected_count = None;
        self.chunks.clear();
        self.state = SessionState::Empty;
    }
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}
