// SPDX-License-Identifier: GPL-2.0

//! Session engine of the 99 Bottles of Beer character device.
//!
//! Every open handle owns a [`session::Session`] that walks the song from 99 bottles down to the
//! closing stanza. Reads of any size drain the current stanza and roll over into the next one
//! within the same call; once the closing stanza is drained, reads return zero bytes forever.
//!
//! The engine only uses `core` and `alloc`. `samples/rust/rust_bottles.rs` compiles these same
//! sources into the kernel module, so items are referred to through `super::` paths rather than
//! `crate::`.
//!
//! # Examples
//!
//! ```
//! use bottles::file;
//!
//! let mut handle = file::open().unwrap();
//! let mut buf = [0u8; 31];
//! let n = handle.read_into(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"99 bottles of beer on the wall,");
//! handle.release();
//! ```

extern crate alloc;

pub mod alloc_ext;
pub mod error;
pub mod file;
pub mod io_buffer;
pub mod session;
pub mod stanza;
