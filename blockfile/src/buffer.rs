use std::ops::{Deref, DerefMut};

/// Owned scratch storage for whole-block transfers.
///
/// Dereferences to a byte slice, so a `Buffer` passes straight into the
/// transfer operations.
pub struct Buffer {
    data: Box<[u8]>,
}

impl Buffer {
    /// Returns a newly owned, zero-filled buffer of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Buffer {
            data: vec![0; len].into_boxed_slice(),
        }
    }

    /// Returns an independently owned copy of this buffer. Callers that must
    /// retain block contents beyond the lifetime of a buffer they were handed
    /// take a duplicate; mutating the copy never changes the original.
    pub fn duplicate(&self) -> Self {
        Buffer {
            data: self.data.clone(),
        }
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
