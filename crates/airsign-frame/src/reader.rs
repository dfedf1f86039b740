use std::io::{BufRead, ErrorKind};

use crate::codec::{decode_frame, Frame};
use crate::error::{FrameError, Result};

/// Reads hex-encoded frames, one per line, from any `BufRead` source.
///
/// This is the textual form a QR scanner hands over: blank lines are skipped,
/// surrounding whitespace and an optional `0x` prefix are ignored.
pub struct FrameReader<T> {
    inner: T,
    line: String,
    line_number: usize,
}

impl<T: BufRead> FrameReader<T> {
    /// Create a new frame reader.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Read the next frame.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            self.line.clear();
            let read = match self.inner.read_line(&mut self.line) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            let digits = text.strip_prefix("0x").unwrap_or(text);
            let bytes = hex::decode(digits)?;
            return decode_frame(&bytes).map(Some);
        }
    }

    /// Line number of the most recently read line (1-based).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: BufRead> Iterator for FrameReader<T> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use bytes::Bytes;

    use super::*;

    #[test]
    fn read_single_frame() {
        let mut reader = FrameReader::new(Cursor::new("000001000068656c6c6f\n"));
        let frame = reader.read_frame().unwrap().unwrap();

        assert_eq!((frame.count, frame.index), (1, 0));
        assert_eq!(frame.chunk.as_ref(), b"hello");
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn read_skips_blank_lines_and_prefix() {
        let input = "\n  0x0000020000aa  \n\n0000020001bb";
        let frames: Vec<Frame> = FrameReader::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            frames,
            vec![
                Frame::new(2, 0, Bytes::from_static(&[0xaa])),
                Frame::new(2, 1, Bytes::from_static(&[0xbb])),
            ]
        );
    }

    #[test]
    fn read_empty_input() {
        let mut reader = FrameReader::new(Cursor::new(""));
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn invalid_hex_reports_line() {
        let mut reader = FrameReader::new(Cursor::new("0000010000\nnot-hex\n"));
        assert!(reader.read_frame().unwrap().is_some());

        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::InvalidHex(_)));
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn short_line_is_truncated_frame() {
        let mut reader = FrameReader::new(Cursor::new("000001\n"));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::TruncatedFrame { len: 3, .. }));
    }

    #[test]
    fn io_error_surfaces() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let mut reader = FrameReader::new(std::io::BufReader::new(Broken));
        assert!(matches!(reader.read_frame(), Err(FrameError::Io(_))));
    }
}
