//! Admission rules for the message being verified.
//!
//! Text messages are refused when empty or made only of whitespace; byte
//! messages are refused only when empty. Whatever passes is handed to the
//! verifier as a single block.

use crate::error::ErrInput;

pub trait MessageInput {
    /// Bytes to verify, or the reason the message cannot be verified.
    fn message_bytes(&self) -> Result<&[u8], ErrInput>;
}

impl MessageInput for str {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        if self.trim().is_empty() {
            return Err(ErrInput::EmptyMessage);
        }
        Ok(self.as_bytes())
    }
}

impl MessageInput for String {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        self.as_str().message_bytes()
    }
}

impl MessageInput for [u8] {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        if self.is_empty() {
            return Err(ErrInput::EmptyMessage);
        }
        Ok(self)
    }
}

impl<const N: usize> MessageInput for [u8; N] {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        self.as_slice().message_bytes()
    }
}

impl MessageInput for Vec<u8> {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        self.as_slice().message_bytes()
    }
}

impl<T: MessageInput + ?Sized> MessageInput for &T {
    fn message_bytes(&self) -> Result<&[u8], ErrInput> {
        (**self).message_bytes()
    }
}
