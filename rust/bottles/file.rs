// SPDX-License-Identifier: GPL-2.0

//! Open handles on the song.
//!
//! This is the host-side counterpart of the kernel module's `file::Operations`: [`open`] gives
//! every caller a fresh [`Session`] of its own, [`Handle::read`] drains it and
//! [`Handle::release`] frees it.

use alloc::boxed::Box;

use super::alloc_ext::BoxExt;
use super::error::Result;
use super::io_buffer::{IoBufferWriter, SliceWriter};
use super::session::Session;

/// An open handle owning one session.
pub struct Handle {
    session: Box<Session>,
}

/// Opens a new handle positioned at the start of the song.
///
/// Fails with `ENOMEM` if the session cannot be allocated, in which case nothing is left behind.
pub fn open() -> Result<Handle> {
    let session = <Box<_> as BoxExt<_>>::new(Session::new())?;
    Ok(Handle { session })
}

impl Handle {
    /// Reads the next bytes of the song into `writer`. See [`Session::read`].
    pub fn read(&mut self, writer: &mut impl IoBufferWriter) -> Result<usize> {
        self.session.read(writer)
    }

    /// Reads the next bytes of the song into `buf`, returning how many were written.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.read(&mut SliceWriter::new(buf))
    }

    /// Returns the session behind this handle.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Closes the handle and frees its session.
    pub fn release(self) {
        drop(self.session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::START;
    use crate::stanza;
    use alloc::vec::Vec;

    #[test]
    fn open_starts_at_the_top() {
        let handle = open().unwrap();
        assert_eq!(handle.session().bottles(), START);
        assert!(!handle.session().is_exhausted());
        handle.release();
    }

    #[test]
    fn handles_do_not_share_state() {
        let mut a = open().unwrap();
        let mut b = open().unwrap();

        let mut buf = [0u8; 200];
        assert_eq!(a.read_into(&mut buf).unwrap(), 200);
        assert_eq!(a.session().bottles(), 98);
        assert_eq!(b.session().bottles(), START);

        let mut first = [0u8; 2];
        assert_eq!(b.read_into(&mut first).unwrap(), 2);
        assert_eq!(&first, b"99");
        a.release();
        b.release();
    }

    #[test]
    fn read_to_end() {
        let total = stanza::song_len(START).unwrap();
        let mut handle = open().unwrap();
        let mut out = Vec::new();
        let mut buf = [0u8; 512];
        loop {
            let n = handle.read_into(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        assert_eq!(out.len(), total);
        assert!(out.ends_with(b"99 bottles of beer on the wall.\n"));
        assert_eq!(handle.read_into(&mut buf), Ok(0));
        assert!(handle.session().is_exhausted());
        handle.release();
    }
}
