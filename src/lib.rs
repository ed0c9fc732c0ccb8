//! Ed25519 signature verification over base64-encoded keys and signatures.
//!
//! ```
//! let public_key = "PUAXw+hDiVqStwqnTRt+vJyYLM8uxJaMwM1V8Sr0Zgw=";
//! let signature = "kqAJqfDUyrhyDoILX2QlQKKye1QWUD+Ps3YiI+vbadoIWsHkPhWZbkWPNhPQ8R2MOHsurrQwKu6wDSkWErsMAA==";
//!
//! assert!(sigverify::verify(public_key, signature, "r"));
//! assert!(!sigverify::verify(public_key, signature, "R"));
//! assert!(!sigverify::verify(public_key, "not base64!", "r"));
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod error;
pub mod tracing;


pub use application::verif_service::SignatureVerifier;
pub use domain::{
    config::{VerifierConfig, VerifyMode},
    encoded::{Field, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH},
    message::MessageInput,
};
pub use error::AppError;

/// Verify with the default configuration. Never panics on bad input.
pub fn verify<M>(public_key_b64: &str, signature_b64: &str, message: &M) -> bool
where
    M: MessageInput + ?Sized,
{
    SignatureVerifier::default().verify(public_key_b64, signature_b64, message)
}

pub fn verify_opt<M>(
    public_key_b64: Option<&str>,
    signature_b64: Option<&str>,
    message: Option<&M>,
) -> bool
where
    M: MessageInput + ?Sized,
{
    SignatureVerifier::default().verify_opt(public_key_b64, signature_b64, message)
}

/// Opt-in variant of [`verify`] that reports why verification failed.
pub fn verify_detailed<M>(
    public_key_b64: &str,
    signature_b64: &str,
    message: &M,
) -> Result<(), AppError>
where
    M: MessageInput + ?Sized,
{
    SignatureVerifier::default().verify_detailed(public_key_b64, signature_b64, message)
}
