use zeroize::Zeroize;

use crate::{
    domain::encoded::Field,
    error::{AppError, ErrBase64},
};

/// Fixed-size stack buffer for decoded key or signature bytes.
///
/// The buffer is exactly `N` bytes, so the written range is the whole buffer.
/// It is zeroed when dropped, whichever way the owning scope exits.
pub struct ScratchBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> ScratchBuffer<N> {
    pub fn new() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Copy `src` in. Nothing is written unless `src` is exactly `N` bytes.
    pub fn fill(&mut self, field: Field, src: &[u8]) -> Result<&[u8; N], AppError> {
        if src.len() != N {
            return Err(AppError::Base64(ErrBase64::Length {
                field,
                expected: N,
                actual: src.len(),
            }));
        }
        self.bytes.copy_from_slice(src);
        Ok(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    pub fn scrub(&mut self) {
        self.bytes.zeroize();
    }
}

impl<const N: usize> Default for ScratchBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

// Runs on every exit of the owning scope, `?` returns and unwinding included.
impl<const N: usize> Drop for ScratchBuffer<N> {
    fn drop(&mut self) {
        self.scrub();
    }
}
