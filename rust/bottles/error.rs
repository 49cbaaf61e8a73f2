// SPDX-License-Identifier: GPL-2.0

//! Errors returned by the engine.
//!
//! Errors are negative errno values so the kernel module can hand them back to the VFS unchanged.

use core::ffi::c_int;
use core::fmt;

use super::alloc_ext::AllocError;

/// Error codes.
pub mod code {
    macro_rules! declare_err {
        ($err:tt, $errno:literal, $($doc:expr),+) => {
            $(
            #[doc = $doc]
            )*
            pub const $err: super::Error = super::Error(-$errno);
        };
    }

    declare_err!(EFAULT, 14, "Bad address.");
    declare_err!(ENOMEM, 12, "Out of memory.");
    declare_err!(ENOSPC, 28, "No space left on device.");
}

/// Generic error type carrying a negative errno.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error(c_int);

impl Error {
    /// Returns the errno representation of this error (a negative number).
    pub fn to_errno(self) -> c_int {
        self.0
    }

    fn name(&self) -> Option<&'static str> {
        match *self {
            code::EFAULT => Some("EFAULT"),
            code::ENOMEM => Some("ENOMEM"),
            code::ENOSPC => Some("ENOSPC"),
            _ => None,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.debug_tuple("Error").field(&-self.0).finish(),
        }
    }
}

impl From<AllocError> for Error {
    fn from(_: AllocError) -> Error {
        code::ENOMEM
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Error {
        code::ENOSPC
    }
}

/// A [`Result`] with an [`Error`] error type.
///
/// [`Result`]: core::result::Result
pub type Result<T = (), E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn errno_values() {
        assert_eq!(code::EFAULT.to_errno(), -14);
        assert_eq!(code::ENOMEM.to_errno(), -12);
        assert_eq!(code::ENOSPC.to_errno(), -28);
    }

    #[test]
    fn conversions() {
        assert_eq!(Error::from(AllocError), code::ENOMEM);
        assert_eq!(Error::from(fmt::Error), code::ENOSPC);
    }

    #[test]
    fn debug_names() {
        assert_eq!(format!("{:?}", code::EFAULT), "EFAULT");
        assert_eq!(format!("{:?}", Error(-5)), "Error(5)");
    }
}
