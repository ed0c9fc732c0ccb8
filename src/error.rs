use base64::DecodeError;
use ed25519_dalek::SignatureError;
use thiserror::Error;

use crate::domain::encoded::Field;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(#[from] ErrInput),

    #[error("Base64 error: {0}")]
    Base64(#[from] ErrBase64),

    #[error("Dalek error: {0}")]
    Dalek(#[from] ErrDalek),

    #[error("Internal error: signature primitive aborted")]
    Internal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrInput {
    #[error("missing {0}")]
    Missing(Field),

    #[error("{0} is empty or blank")]
    Blank(Field),

    #[error("message is empty or blank")]
    EmptyMessage,
}

#[derive(Debug, Error)]
pub enum ErrBase64 {
    #[error("invalid base64 in {field}: {source}")]
    Decode {
        field: Field,
        #[source]
        source: DecodeError,
    },

    #[error("invalid {field} length: expected {expected}, got {actual}")]
    Length {
        field: Field,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum ErrDalek {
    #[error("invalid public key: {0}")]
    InvalidKey(#[source] SignatureError),

    #[error("signature rejected: {0}")]
    Signature(#[source] SignatureError),
}

impl AppError {
    /// Field the failure is attributed to, when there is one.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Input(ErrInput::Missing(field)) | Self::Input(ErrInput::Blank(field)) => {
                Some(*field)
            }
            Self::Input(ErrInput::EmptyMessage) => Some(Field::Message),
            Self::Base64(ErrBase64::Decode { field, .. })
            | Self::Base64(ErrBase64::Length { field, .. }) => Some(*field),
            Self::Dalek(ErrDalek::InvalidKey(_)) => Some(Field::PublicKey),
            Self::Dalek(ErrDalek::Signature(_)) => Some(Field::Signature),
            Self::Internal => None,
        }
    }
}
