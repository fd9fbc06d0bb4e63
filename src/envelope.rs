//! AES-256-CBC envelope for score tokens.
//!
//! Wire format: base64( [IV:16B][ciphertext, PKCS#7 padded] )
//! The IV is freshly random per call, so identical plaintexts never produce
//! identical tokens.
//!
//! CBC with PKCS#7 carries no MAC. Tamper rejection here rests on padding
//! validity plus the payload parse and freshness checks in [`crate::codec`];
//! the wire contract pins this construction, so it is flagged rather than
//! upgraded to an AEAD mode.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64ct::{Base64, Encoding};

use crate::error::ScoreCryptoError;
use crate::types::{AES_CBC_IV_LENGTH, AES_KEY_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Generate a random 16-byte IV for AES-CBC.
fn generate_iv() -> Result<[u8; AES_CBC_IV_LENGTH], ScoreCryptoError> {
    let mut iv = [0u8; AES_CBC_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| ScoreCryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypt a plaintext string into a base64 token.
pub fn encrypt(plaintext: &str, key: &[u8; AES_KEY_LENGTH]) -> Result<String, ScoreCryptoError> {
    let iv = generate_iv()?;
    let ciphertext =
        Aes256CbcEnc::new(key.into(), (&iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut blob = Vec::with_capacity(iv.len() + ciphertext.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    Ok(Base64::encode_string(&blob))
}

/// Decrypt a base64 token back into its plaintext string.
///
/// Fails with [`ScoreCryptoError::MalformedEnvelope`] on bad base64 or a blob
/// too short to contain an IV, and with [`ScoreCryptoError::DecryptionFailed`]
/// when the cipher or padding rejects the input (wrong key or corruption).
pub fn decrypt(token: &str, key: &[u8; AES_KEY_LENGTH]) -> Result<String, ScoreCryptoError> {
    let blob = Base64::decode_vec(token)
        .map_err(|e| ScoreCryptoError::MalformedEnvelope(e.to_string()))?;
    if blob.len() < AES_CBC_IV_LENGTH {
        return Err(ScoreCryptoError::MalformedEnvelope(format!(
            "blob too short: {} bytes",
            blob.len()
        )));
    }

    let (iv, ciphertext) = blob.split_at(AES_CBC_IV_LENGTH);
    let plaintext = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| ScoreCryptoError::DecryptionFailed)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| ScoreCryptoError::DecryptionFailed)?;

    // Same undifferentiated signal as a padding failure: non-UTF-8 output
    // only happens under a wrong key or corruption.
    String::from_utf8(plaintext).map_err(|_| ScoreCryptoError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::derive_key;

    fn test_key() -> [u8; AES_KEY_LENGTH] {
        derive_key("envelope-test-passphrase-32-chars!!!")
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let key = test_key();
        let token = encrypt("42|1724630000", &key).unwrap();
        assert_eq!(decrypt(&token, &key).unwrap(), "42|1724630000");
    }

    #[test]
    fn different_token_each_time() {
        let key = test_key();
        let t1 = encrypt("same plaintext", &key).unwrap();
        let t2 = encrypt("same plaintext", &key).unwrap();
        assert_ne!(t1, t2);
        assert_eq!(decrypt(&t1, &key).unwrap(), "same plaintext");
        assert_eq!(decrypt(&t2, &key).unwrap(), "same plaintext");
    }

    #[test]
    fn iv_prefix_present() {
        let key = test_key();
        let token = encrypt("x", &key).unwrap();
        let blob = Base64::decode_vec(&token).unwrap();
        // One padded block of ciphertext after the IV.
        assert_eq!(blob.len(), AES_CBC_IV_LENGTH + 16);
    }

    #[test]
    fn rejects_non_base64() {
        let key = test_key();
        let err = decrypt("not base64!!!", &key).unwrap_err();
        assert!(matches!(err, ScoreCryptoError::MalformedEnvelope(_)));
    }

    #[test]
    fn rejects_blob_shorter_than_iv() {
        let key = test_key();
        let short = Base64::encode_string(&[0u8; 10]);
        let err = decrypt(&short, &key).unwrap_err();
        assert!(matches!(err, ScoreCryptoError::MalformedEnvelope(_)));
    }

    #[test]
    fn rejects_empty_ciphertext() {
        let key = test_key();
        // Exactly one IV and nothing after it: nothing to unpad.
        let iv_only = Base64::encode_string(&[0u8; AES_CBC_IV_LENGTH]);
        assert!(decrypt(&iv_only, &key).is_err());
    }

    #[test]
    fn wrong_key_fails() {
        let key_a = derive_key("passphrase-a-which-is-long-enough-32");
        let key_b = derive_key("passphrase-b-which-is-long-enough-32");
        let token = encrypt("secret", &key_a).unwrap();
        assert!(matches!(
            decrypt(&token, &key_b).unwrap_err(),
            ScoreCryptoError::DecryptionFailed | ScoreCryptoError::MalformedEnvelope(_)
        ));
    }

    #[test]
    fn tampered_ciphertext_never_round_trips() {
        let key = test_key();
        let token = encrypt("7|1724630000", &key).unwrap();
        let mut blob = Base64::decode_vec(&token).unwrap();
        // Garble the ciphertext block (not the IV: an IV flip leaves padding
        // intact and only garbles the first plaintext block).
        let last = blob.len() - 1;
        blob[last] ^= 0xff;
        let tampered = Base64::encode_string(&blob);
        // A garbled block either fails unpadding/UTF-8 or decrypts to junk;
        // it can never reproduce the original plaintext.
        if let Ok(plaintext) = decrypt(&tampered, &key) {
            assert_ne!(plaintext, "7|1724630000");
        }
    }

    #[test]
    fn handles_empty_plaintext() {
        let key = test_key();
        let token = encrypt("", &key).unwrap();
        assert_eq!(decrypt(&token, &key).unwrap(), "");
    }

    #[test]
    fn handles_multi_block_plaintext() {
        let key = test_key();
        let plaintext = "a".repeat(100);
        let token = encrypt(&plaintext, &key).unwrap();
        assert_eq!(decrypt(&token, &key).unwrap(), plaintext);
    }
}
