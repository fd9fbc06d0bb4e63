use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreCryptoError {
    #[error("Passphrase too short: need at least {min} characters, got {got}")]
    PassphraseTooShort { min: usize, got: usize },

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Padding or cipher rejected the input (wrong key or corrupted data).
    /// Intentionally carries no detail: distinguishing padding failures from
    /// other rejection causes would hand an attacker a padding oracle.
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Invalid score payload: {0}")]
    InvalidPayload(String),

    #[error("Token outside freshness window: age {age_secs}s")]
    StaleToken { age_secs: i64 },

    /// Unexpected encode-side failure. Score encoding wraps every underlying
    /// error, RNG failures included, into this variant.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
