use std::fmt::{self, Display};

pub use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// Which verification input a value or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PublicKey,
    Signature,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PublicKey => "public key",
            Field::Signature => "signature",
            Field::Message => "message",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
