//! Key configuration for the score codec.
//!
//! The original client kept the passphrase in a process-wide global with a
//! silent fallback to a compiled-in default. Here configuration is an explicit
//! value handed to [`ScoreCodec`](crate::ScoreCodec) at construction: tests
//! can run isolated codecs under distinct keys, and the default-key fallback
//! becomes an observable state instead of a hidden branch.

use std::fmt;

use zeroize::Zeroize;

use crate::error::ScoreCryptoError;
use crate::kdf::derive_key;
use crate::types::{AES_KEY_LENGTH, DEFAULT_PASSPHRASE, MIN_PASSPHRASE_LENGTH};

/// A validated passphrase, derived into the token key.
///
/// Derivation runs once at construction (PBKDF2 is deliberately slow); the
/// resulting key is cached for the config's lifetime and zeroized on drop.
pub struct KeyConfig {
    key: [u8; AES_KEY_LENGTH],
    uses_default: bool,
}

impl KeyConfig {
    /// Build a config from an operator-supplied passphrase.
    ///
    /// Rejects passphrases shorter than 32 characters with
    /// [`ScoreCryptoError::PassphraseTooShort`]. There is no silent
    /// empty-string fallback here; callers that want the compiled-in default
    /// use [`KeyConfig::default`] and get `uses_default_key() == true`.
    pub fn new(passphrase: &str) -> Result<Self, ScoreCryptoError> {
        let chars = passphrase.chars().count();
        if chars < MIN_PASSPHRASE_LENGTH {
            return Err(ScoreCryptoError::PassphraseTooShort {
                min: MIN_PASSPHRASE_LENGTH,
                got: chars,
            });
        }
        Ok(Self {
            key: derive_key(passphrase),
            uses_default: false,
        })
    }

    /// True when this config was built from the compiled-in default
    /// passphrase. Hosts should treat this as a misconfiguration alert in
    /// production.
    pub fn uses_default_key(&self) -> bool {
        self.uses_default
    }

    pub(crate) fn key(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.key
    }
}

impl Default for KeyConfig {
    /// The compiled-in default passphrase. Interoperable with any backend
    /// configured the same way, but the passphrase ships in the binary.
    fn default() -> Self {
        tracing::warn!(
            "score-crypto running with the compiled-in default passphrase; \
             configure a deployment passphrase before production use"
        );
        Self {
            key: derive_key(DEFAULT_PASSPHRASE),
            uses_default: true,
        }
    }
}

impl fmt::Debug for KeyConfig {
    // Key material stays out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyConfig")
            .field("key", &"[redacted]")
            .field("uses_default", &self.uses_default)
            .finish()
    }
}

impl Drop for KeyConfig {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
