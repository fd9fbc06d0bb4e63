//! Wire-format constants for score tokens.
//!
//! Token format: base64( [IV:16B][AES-256-CBC ciphertext, PKCS#7 padded] )
//! Plaintext payload: ASCII `"{score}|{issuedAtUnixSeconds}"`
//! Key: PBKDF2-HMAC-SHA256(passphrase, KEY_DERIVATION_SALT, 10000 iters, 32B)

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// AES-CBC IV length in bytes (one AES block).
pub const AES_CBC_IV_LENGTH: usize = 16;

/// PBKDF2 iteration count. Part of the wire contract with the backend.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Fixed PBKDF2 salt. Not secret; provides domain separation so the same
/// passphrase used elsewhere derives a different key here.
pub const KEY_DERIVATION_SALT: &[u8] = b"MiniGames2_Salt_2024";

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_LENGTH: usize = 32;

/// Backend field limit for the encoded token.
pub const MAX_TOKEN_LENGTH: usize = 500;

/// Maximum accepted token age in seconds (24 hours).
pub const MAX_TOKEN_AGE_SECS: i64 = 86_400;

/// Maximum tolerated clock skew into the future, in seconds (5 minutes).
pub const MAX_CLOCK_SKEW_SECS: i64 = 300;

/// Compiled-in fallback passphrase, used when no passphrase is configured.
/// Weak by definition (it ships in the binary); deployments must override it.
/// [`KeyConfig::uses_default_key`](crate::KeyConfig::uses_default_key) exposes
/// whether it is active so the host can alert.
pub const DEFAULT_PASSPHRASE: &str = "MiniGames2_Default_Score_Key_2024!!";
