//! Field-level symmetric encryption.
//!
//! Each sealed field is `nonce || ciphertext` with a fresh random 12-byte
//! nonce per encryption; the Poly1305 tag authenticates the ciphertext, so
//! tampering or a wrong passphrase fails decryption instead of yielding
//! garbage plaintext.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, Key, KeyInit, Nonce};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{StoreError, StoreResult};

/// Nonce length for ChaCha20-Poly1305.
const NONCE_LEN: usize = 12;

/// Symmetric cipher for the sensitive free-text fields.
pub struct FieldCipher {
    cipher: ChaCha20Poly1305,
}

impl FieldCipher {
    /// Derive the encryption key from a passphrase (SHA-256).
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(&digest)),
        }
    }

    /// Encrypt a field into a `nonce || ciphertext` blob.
    pub fn seal(&self, plaintext: &str) -> StoreResult<Vec<u8>> {
        let mut nonce = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| StoreError::Crypto(format!("encryption failed: {e}")))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Decrypt a `nonce || ciphertext` blob back into the field text.
    pub fn open(&self, blob: &[u8]) -> StoreResult<String> {
        if blob.len() < NONCE_LEN {
            return Err(StoreError::Crypto("sealed field too short".to_string()));
        }
        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| StoreError::Crypto("wrong passphrase or tampered data".to_string()))?;
        String::from_utf8(plaintext)
            .map_err(|_| StoreError::Crypto("decrypted field is not UTF-8".to_string()))
    }
}
