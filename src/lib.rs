//! Score-token crypto for minigame session submission.
//!
//! The backend accepts an encrypted score field (max 500 chars) instead of a
//! plain integer and validates it independently. This crate implements the
//! client side of that contract:
//!
//! - payload `"{score}|{issuedAtUnixSeconds}"`
//! - AES-256-CBC, PKCS#7 padding, random 16-byte IV prepended to ciphertext,
//!   whole blob base64-encoded
//! - key derived with PBKDF2-HMAC-SHA256 (fixed salt, 10,000 iterations)
//! - decode accepts timestamps in `[now - 86400, now + 300]` seconds
//!
//! All four points are wire contract; changing any of them breaks
//! interoperability with the backend's decryption.

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod types;

pub use codec::ScoreCodec;
pub use config::KeyConfig;
pub use envelope::{decrypt, encrypt};
pub use error::ScoreCryptoError;
pub use kdf::derive_key;
pub use types::{
    AES_CBC_IV_LENGTH, AES_KEY_LENGTH, MAX_CLOCK_SKEW_SECS, MAX_TOKEN_AGE_SECS, MAX_TOKEN_LENGTH,
    MIN_PASSPHRASE_LENGTH, PBKDF2_ITERATIONS,
};
