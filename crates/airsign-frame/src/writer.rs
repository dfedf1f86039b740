use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_frame, Frame};
use crate::error::{FrameError, Result};

/// Writes frames as lowercase hex, one per line, to any `Write` sink.
///
/// Each line is the text a QR renderer turns into one image of the animation.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> FrameWriter<T> {
    /// Create a new frame writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
        }
    }

    /// Write one frame followed by a newline.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame(frame, &mut self.buf);

        let mut line = hex::encode(&self.buf);
        line.push('\n');
        self.inner.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Write every frame in order, then flush.
    pub fn write_all<'a>(&mut self, frames: impl IntoIterator<Item = &'a Frame>) -> Result<()> {
        for frame in frames {
            self.write_frame(frame)?;
        }
        self.flush()
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
