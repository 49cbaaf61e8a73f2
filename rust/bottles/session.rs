// SPDX-License-Identifier: GPL-2.0

//! Per-handle read state.
//!
//! A [`Session`] hands out the song stanza by stanza. The stanza for the current bottle count is
//! generated lazily on the first read that needs it and is drained across as many reads as the
//! caller likes. Reads continue straight into the next stanza, so a stanza boundary never shows up
//! as an empty read. Only after the closing stanza has been drained does a read return zero bytes,
//! and it keeps doing so from then on.

use super::error::{code::*, Result};
use super::io_buffer::IoBufferWriter;
use super::stanza::Stanza;

/// Number of bottles a new session starts with.
pub const START: u32 = 99;

/// Read state of one open handle.
///
/// # Examples
///
/// ```
/// use bottles::io_buffer::SliceWriter;
/// use bottles::session::Session;
///
/// let mut session = Session::new();
/// let mut buf = [0u8; 10];
/// let n = session.read(&mut SliceWriter::new(&mut buf)).unwrap();
/// assert_eq!(&buf[..n], b"99 bottles");
/// ```
pub struct Session {
    bottles: u32,
    /// Bytes of `pending` already delivered.
    sent: usize,
    /// Stanza for `bottles`, `None` until it is first needed.
    pending: Option<Stanza>,
}

impl Session {
    /// Creates a session positioned at the start of the song.
    pub const fn new() -> Self {
        Self {
            bottles: START,
            sent: 0,
            pending: None,
        }
    }

    /// Returns the bottle count whose stanza is being delivered.
    pub fn bottles(&self) -> u32 {
        self.bottles
    }

    /// Returns `true` once the closing stanza has been fully delivered.
    pub fn is_exhausted(&self) -> bool {
        self.bottles == 0 && self.pending.is_some() && self.unsent().is_empty()
    }

    /// Copies the next bytes of the song into `writer`.
    ///
    /// Fills `writer` until it is full or the song ends, rolling over into later stanzas as
    /// needed. Returns the number of bytes written; zero means the song is over (or `writer` has
    /// no room).
    ///
    /// If `writer` faults part way, the bytes that landed are counted and the next read resumes
    /// right after them. A fault before any byte landed returns `EFAULT` and leaves the session
    /// untouched.
    pub fn read(&mut self, writer: &mut impl IoBufferWriter) -> Result<usize> {
        let mut copied = 0;

        while !writer.is_empty() {
            self.refill()?;

            let (written, offered) = if self.unsent().is_empty() {
                if self.bottles == 0 {
                    break;
                }
                // The next stanza only takes over once some of it has landed.
                let mut next = Self::at(self.bottles - 1)?;
                let (written, offered) = next.copy_to(writer);
                if written > 0 {
                    *self = next;
                }
                (written, offered)
            } else {
                self.copy_to(writer)
            };
            copied += written;

            if written < offered {
                if copied == 0 {
                    return Err(EFAULT);
                }
                break;
            }
        }

        Ok(copied)
    }

    /// Creates a session whose stanza for `bottles` is already generated.
    fn at(bottles: u32) -> Result<Self> {
        Ok(Self {
            bottles,
            sent: 0,
            pending: Some(Stanza::new(bottles)?),
        })
    }

    /// Offers as much of the unsent text as fits in `writer`.
    ///
    /// Returns the number of bytes that landed and the number offered.
    fn copy_to(&mut self, writer: &mut impl IoBufferWriter) -> (usize, usize) {
        let unsent = self.unsent();
        let len = core::cmp::min(unsent.len(), writer.len());
        let written = core::cmp::min(writer.write_partial(&unsent[..len]), len);
        self.sent += written;
        (written, len)
    }

    /// Generates the stanza for the current bottle count unless it is already pending.
    fn refill(&mut self) -> Result {
        if self.pending.is_none() {
            self.pending = Some(Stanza::new(self.bottles)?);
            self.sent = 0;
        }
        Ok(())
    }

    fn unsent(&self) -> &[u8] {
        match &self.pending {
            Some(stanza) => &stanza.as_bytes()[self.sent..],
            None => &[],
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
