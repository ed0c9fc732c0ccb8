/// How the Ed25519 check is performed once inputs are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerifyMode {
    /// RFC 8032 verification. Accepts small-order public keys.
    Standard,
    /// Also rejects small-order public keys and non-canonical signature points.
    #[default]
    Strict,
}

impl VerifyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyMode::Standard => "STANDARD",
            VerifyMode::Strict => "STRICT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifierConfig {
    pub mode: VerifyMode,
}

impl VerifierConfig {
    pub fn new(mode: VerifyMode) -> Self {
        Self { mode }
    }

    pub fn with_mode(mut self, mode: VerifyMode) -> Self {
        self.mode = mode;
        self
    }
}
