// SPDX-License-Identifier: GPL-2.0

//! The 99 Bottles of Beer character device.
//!
//! Every open file sings its own copy of the song, so several readers never steal lines from one
//! another. Create a node for the major printed in `/proc/devices` and read it:
//!
//! ```sh
//! mknod /dev/bottles c <major> 0
//! cat /dev/bottles
//! ```

use kernel::io_buffer::IoBufferWriter;
use kernel::prelude::*;
use kernel::sync::smutex::Mutex;
use kernel::{chrdev, file};

#[allow(dead_code)]
#[path = "../../rust/bottles/lib.rs"]
mod bottles;

use bottles::session::Session;

module! {
    type: RustBottles,
    name: "rust_bottles",
    author: "Rust for Linux Contributors",
    description: "The 99 Bottles of Beer character device",
    license: "GPL",
}

/// Minors served by the module; all of them behave the same.
const MINORS: usize = 2;

/// Hands the user buffer to the session.
///
/// The kernel writer does not say how much of a faulting copy landed and does not advance on
/// failure, so a fault counts as nothing written and the session resends those bytes next time.
struct UserWriter<'a, W: IoBufferWriter>(&'a mut W);

impl<W: IoBufferWriter> bottles::io_buffer::IoBufferWriter for UserWriter<'_, W> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn write_partial(&mut self, data: &[u8]) -> usize {
        match self.0.write_slice(data) {
            Ok(()) => data.len(),
            Err(_) => 0,
        }
    }
}

fn to_kernel_error(e: bottles::error::Error) -> Error {
    match e {
        bottles::error::code::EFAULT => EFAULT,
        bottles::error::code::ENOMEM => ENOMEM,
        bottles::error::code::ENOSPC => ENOSPC,
        _ => {
            pr_warn!("unexpected session error {}\n", e.to_errno());
            EINVAL
        }
    }
}

struct Bottles;

#[vtable]
impl file::Operations for Bottles {
    type Data = Box<Mutex<Session>>;

    fn open(_context: &(), _file: &file::File) -> Result<Self::Data> {
        let session = Box::try_new(Mutex::new(Session::new()))?;
        pr_debug!("session opened\n");
        Ok(session)
    }

    fn read(
        session: &Mutex<Session>,
        _file: &file::File,
        writer: &mut impl IoBufferWriter,
        _offset: u64,
    ) -> Result<usize> {
        let mut session = session.lock();
        let len = session
            .read(&mut UserWriter(writer))
            .map_err(to_kernel_error)?;
        if len == 0 && session.is_exhausted() {
            pr_debug!("session at end of song\n");
        }
        Ok(len)
    }

    fn release(_data: Self::Data, _file: &file::File) {
        pr_debug!("session released\n");
    }
}

struct RustBottles {
    _dev: Pin<Box<chrdev::Registration<MINORS>>>,
}

impl kernel::Module for RustBottles {
    fn init(name: &'static CStr, module: &'static ThisModule) -> Result<Self> {
        pr_info!("99 bottles of beer on the wall (init)\n");

        let mut reg = chrdev::Registration::new_pinned(name, 0, module)?;
        for _ in 0..MINORS {
            reg.as_mut().register::<Bottles>()?;
        }

        Ok(RustBottles { _dev: reg })
    }
}

impl Drop for RustBottles {
    fn drop(&mut self) {
        pr_info!("Go to the store and buy some more (exit)\n");
    }
}
