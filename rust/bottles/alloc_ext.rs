// SPDX-License-Identifier: GPL-2.0

//! Extensions to [`Box`] for fallible allocations.

use alloc::boxed::Box;

/// The allocator could not satisfy a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;

/// Extensions to [`Box`].
pub trait BoxExt<T>: Sized {
    /// Allocates a new box.
    ///
    /// The allocation may fail, in which case an error is returned.
    fn new(x: T) -> Result<Self, AllocError>;
}

impl<T> BoxExt<T> for Box<T> {
    fn new(x: T) -> Result<Self, AllocError> {
        let ptr = if core::mem::size_of::<T>() == 0 {
            core::ptr::NonNull::<T>::dangling().as_ptr()
        } else {
            let layout = core::alloc::Layout::new::<T>();

            // SAFETY: `layout` has a non-zero size, checked above.
            let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
            if ptr.is_null() {
                return Err(AllocError);
            }
            ptr
        };

        // SAFETY: `ptr` is either freshly allocated with the layout of `T` or dangling for a
        // zero-sized `T`. Either way it is valid for write and suitably aligned.
        unsafe { ptr.write(x) };

        // SAFETY: For non-zero-sized types the memory comes from the global allocator with
        // `Layout::new::<T>()`; for zero-sized types `Box` accepts a dangling pointer.
        Ok(unsafe { Box::from_raw(ptr) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_value() {
        let b = <Box<_> as BoxExt<_>>::new([7u8; 64]).unwrap();
        assert_eq!(b[63], 7);
    }

    #[test]
    fn boxes_zst() {
        let b = <Box<_> as BoxExt<_>>::new(()).unwrap();
        assert_eq!(*b, ());
    }
}
