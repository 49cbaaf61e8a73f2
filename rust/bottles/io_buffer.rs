// SPDX-License-Identifier: GPL-2.0

//! Destinations for bytes read out of a session.

/// Represents a buffer to be written to during IO.
///
/// Unlike a plain slice, a destination may fault part way through a copy, the way a user-space
/// buffer does when only some of its pages are mapped. [`IoBufferWriter::write_partial`] reports
/// how many bytes actually landed so callers can resume from the exact point of the fault.
pub trait IoBufferWriter {
    /// Returns the number of bytes left to be written into the io buffer.
    fn len(&self) -> usize;

    /// Returns `true` if no more data can be written to the buffer.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes as much of `data` as the buffer accepts and returns the number of bytes written.
    ///
    /// A return value smaller than `data.len()` means the destination faulted; the buffer has
    /// advanced by exactly the returned amount.
    fn write_partial(&mut self, data: &[u8]) -> usize;
}

/// An [`IoBufferWriter`] over a byte slice. It never faults.
///
/// # Examples
///
/// ```
/// use bottles::io_buffer::{IoBufferWriter, SliceWriter};
///
/// let mut buf = [0u8; 4];
/// let mut writer = SliceWriter::new(&mut buf);
/// assert_eq!(writer.write_partial(b"beer on the wall"), 4);
/// assert!(writer.is_empty());
/// assert_eq!(&buf, b"beer");
/// ```
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> SliceWriter<'a> {
    /// Creates a writer that fills `buf` from its start.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }
}

impl IoBufferWriter for SliceWriter<'_> {
    fn len(&self) -> usize {
        self.buf.len() - self.written
    }

    fn write_partial(&mut self, data: &[u8]) -> usize {
        let len = core::cmp::min(data.len(), self.len());
        self.buf[self.written..][..len].copy_from_slice(&data[..len]);
        self.written += len;
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_writer_fills_in_order() {
        let mut buf = [0u8; 8];
        let mut writer = SliceWriter::new(&mut buf);
        assert_eq!(writer.len(), 8);
        assert_eq!(writer.write_partial(b"abc"), 3);
        assert_eq!(writer.write_partial(b"defghij"), 5);
        assert_eq!(writer.write_partial(b"k"), 0);
        assert!(writer.is_empty());
        assert_eq!(&buf, b"abcdefgh");
    }
}
