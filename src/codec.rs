//! Score token encode/decode with freshness enforcement.
//!
//! Payload: ASCII `"{score}|{issuedAtUnixSeconds}"`, encrypted through
//! [`crate::envelope`]. Decode accepts timestamps in
//! `[now - 86400, now + 300]` seconds; anything outside that window is
//! rejected as stale (or implausibly future-dated, which absorbs bounded
//! clock skew between client and backend).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::KeyConfig;
use crate::envelope;
use crate::error::ScoreCryptoError;
use crate::types::{MAX_CLOCK_SKEW_SECS, MAX_TOKEN_AGE_SECS};

/// Current Unix time in whole seconds.
fn unix_now_secs() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

/// Encodes scores into opaque tokens for backend submission and validates
/// tokens coming back.
///
/// Stateless across calls apart from the configured key. Each instance is
/// independent; tests run codecs under distinct keys without global state.
pub struct ScoreCodec {
    config: KeyConfig,
}

impl ScoreCodec {
    pub fn new(config: KeyConfig) -> Self {
        Self { config }
    }

    /// Swap in a new passphrase. Fails (leaving the current key in place)
    /// if the passphrase does not validate.
    pub fn reconfigure(&mut self, passphrase: &str) -> Result<(), ScoreCryptoError> {
        self.config = KeyConfig::new(passphrase)?;
        Ok(())
    }

    /// True when the codec is operating on the compiled-in default key.
    pub fn uses_default_key(&self) -> bool {
        self.config.uses_default_key()
    }

    /// Encrypt a score into a transmittable token, stamped with the current
    /// wall-clock time.
    pub fn encrypt_score(&self, score: u32) -> Result<String, ScoreCryptoError> {
        self.encrypt_score_at(score, unix_now_secs())
    }

    /// Decrypt and validate a token, returning the score it carries.
    ///
    /// Never collapses a failure into a default score; every rejection is a
    /// distinct [`ScoreCryptoError`].
    pub fn decrypt_score(&self, token: &str) -> Result<u32, ScoreCryptoError> {
        self.decrypt_score_at(token, unix_now_secs())
    }

    /// True iff `token` decrypts and validates. Never panics.
    pub fn validate(&self, token: &str) -> bool {
        self.decrypt_score(token).is_ok()
    }

    fn encrypt_score_at(&self, score: u32, issued_at: i64) -> Result<String, ScoreCryptoError> {
        let payload = format!("{score}|{issued_at}");
        // Encode-side failures (RNG included) all surface as EncryptionFailed.
        envelope::encrypt(&payload, self.config.key())
            .map_err(|e| ScoreCryptoError::EncryptionFailed(e.to_string()))
    }

    fn decrypt_score_at(&self, token: &str, now: i64) -> Result<u32, ScoreCryptoError> {
        let payload = envelope::decrypt(token, self.config.key())?;

        let mut parts = payload.split('|');
        let (score_part, issued_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(score), Some(issued), None) => (score, issued),
            _ => {
                return Err(ScoreCryptoError::InvalidPayload(
                    "expected exactly two fields".into(),
                ))
            }
        };
        let score: u32 = score_part
            .parse()
            .map_err(|_| ScoreCryptoError::InvalidPayload("score is not an integer".into()))?;
        let issued_at: i64 = issued_part
            .parse()
            .map_err(|_| ScoreCryptoError::InvalidPayload("timestamp is not an integer".into()))?;

        // Saturating: an extreme forged timestamp (e.g. i64::MIN) must land
        // outside the window and reject, not overflow the subtraction.
        let age_secs = now.saturating_sub(issued_at);
        if age_secs > MAX_TOKEN_AGE_SECS || age_secs < -MAX_CLOCK_SKEW_SECS {
            return Err(ScoreCryptoError::StaleToken { age_secs });
        }
        Ok(score)
    }
}
