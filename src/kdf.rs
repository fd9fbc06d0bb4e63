//! PBKDF2-HMAC-SHA256 key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::types::{AES_KEY_LENGTH, KEY_DERIVATION_SALT, PBKDF2_ITERATIONS};

/// Derive the 256-bit token key from a passphrase.
///
/// Fixed salt, 10,000 iterations, 32-byte output — all three are part of the
/// wire contract with the backend and must not change independently of it.
/// Deterministic: the same passphrase always yields the same key.
///
/// Deliberately slow (that is the point of PBKDF2); callers cache the result
/// rather than re-deriving per operation.
pub fn derive_key(passphrase: &str) -> [u8; AES_KEY_LENGTH] {
    let mut key = [0u8; AES_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        passphrase.as_bytes(),
        KEY_DERIVATION_SALT,
        PBKDF2_ITERATIONS,
        &mut key,
    );
    key
}
