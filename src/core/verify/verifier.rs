use std::panic::{self, AssertUnwindSafe};

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::error;

use crate::{
    domain::{
        config::VerifyMode,
        encoded::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH},
    },
    error::{AppError, ErrDalek},
};

/// Run the Ed25519 check over `message` as one block.
///
/// This is the only place the primitive is invoked. A panic inside it is
/// caught here and reported as `AppError::Internal`.
pub fn verify_signature(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    signature: &[u8; SIGNATURE_LENGTH],
    message: &[u8],
    mode: VerifyMode,
) -> Result<(), AppError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), AppError> {
        let verifying_key = VerifyingKey::from_bytes(public_key)
            .map_err(|e| AppError::Dalek(ErrDalek::InvalidKey(e)))?;
        let signature = Signature::from_bytes(signature);

        match mode {
            VerifyMode::Standard => verifying_key.verify(message, &signature),
            VerifyMode::Strict => verifying_key.verify_strict(message, &signature),
        }
        .map_err(|e| AppError::Dalek(ErrDalek::Signature(e)))
    }));

    match outcome {
        Ok(result) => result,
        Err(_) => {
            error!("VERIFY: Ed25519 primitive panicked, mode {}", mode.as_str());
            Err(AppError::Internal)
        }
    }
}
