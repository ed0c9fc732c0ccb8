use tracing::debug;

use crate::{
    core::{encoding::decode::decode_fixed, verify::verifier::verify_signature},
    domain::{
        config::VerifierConfig,
        encoded::{Field, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH},
        message::MessageInput,
    },
    error::{AppError, ErrInput},
};

/// Stateless Ed25519 verifier over base64-encoded keys and signatures.
///
/// `verify` is total: every malformed input and every rejected signature
/// gives `false`. `verify_detailed` runs the same checks and says which one
/// failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerifier {
    config: VerifierConfig,
}

impl SignatureVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn verify<M>(&self, public_key_b64: &str, signature_b64: &str, message: &M) -> bool
    where
        M: MessageInput + ?Sized,
    {
        self.verify_detailed(public_key_b64, signature_b64, message)
            .is_ok()
    }

    /// Same as [`verify`](Self::verify) with nullable inputs; `None` never verifies.
    pub fn verify_opt<M>(
        &self,
        public_key_b64: Option<&str>,
        signature_b64: Option<&str>,
        message: Option<&M>,
    ) -> bool
    where
        M: MessageInput + ?Sized,
    {
        self.verify_opt_detailed(public_key_b64, signature_b64, message)
            .is_ok()
    }

    pub fn verify_detailed<M>(
        &self,
        public_key_b64: &str,
        signature_b64: &str,
        message: &M,
    ) -> Result<(), AppError>
    where
        M: MessageInput + ?Sized,
    {
        self.verify_opt_detailed(Some(public_key_b64), Some(signature_b64), Some(message))
    }

    pub(crate) fn verify_opt_detailed<M>(
        &self,
        public_key_b64: Option<&str>,
        signature_b64: Option<&str>,
        message: Option<&M>,
    ) -> Result<(), AppError>
    where
        M: MessageInput + ?Sized,
    {
        let result = self.run(public_key_b64, signature_b64, message);
        if let Err(e) = &result {
            debug!(field = ?e.field(), "VERIFY: rejected: {}", e);
        }
        result
    }

    fn run<M>(
        &self,
        public_key_b64: Option<&str>,
        signature_b64: Option<&str>,
        message: Option<&M>,
    ) -> Result<(), AppError>
    where
        M: MessageInput + ?Sized,
    {
        let message = message
            .ok_or(ErrInput::Missing(Field::Message))?
            .message_bytes()?;
        let public_key_b64 = public_key_b64.ok_or(ErrInput::Missing(Field::PublicKey))?;
        let signature_b64 = signature_b64.ok_or(ErrInput::Missing(Field::Signature))?;

        let public_key = decode_fixed::<PUBLIC_KEY_LENGTH>(public_key_b64, Field::PublicKey)?;
        let signature = decode_fixed::<SIGNATURE_LENGTH>(signature_b64, Field::Signature)?;

        verify_signature(
            public_key.as_bytes(),
            signature.as_bytes(),
            message,
            self.config.mode,
        )
    }
}
