//! Simplified-DES cipher engine: 16-round Feistel block transform plus the
//! message-level encrypt/decrypt orchestration.
//!
//! Compatible byte-for-byte with the `DESEncoder` class of the original
//! C++ application, including its simplified key schedule and its identity
//! initial/final permutation stages.

use crate::block_codec;
use crate::error::DesError;
use crate::feistel;
use crate::key_schedule::{self, NUM_ROUNDS};
use crate::padding;

/// Simplified-DES cipher keyed with a single master key.
///
/// The constructor normalizes the supplied key material to 8 bytes and
/// derives the 16 round subkeys once; the instance is then immutable and
/// every call is a pure function of its inputs. Encryption and decryption
/// run the same 16-round Feistel network, differing only in the order the
/// subkeys are applied.
///
/// # Examples
///
/// ```
/// use simpledes::DesCipher;
///
/// let cipher = DesCipher::new(b"my secret key");
/// let ciphertext = cipher.encrypt(b"attack at dawn");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"attack at dawn");
/// ```
pub struct DesCipher {
    subkeys: [u64; NUM_ROUNDS],
}

impl DesCipher {
    /// Creates a cipher from arbitrary key material.
    ///
    /// The key is truncated or zero-padded to 8 bytes and the round
    /// subkeys are derived immediately. Any input is a valid key,
    /// including an empty one (which yields the all-zero master key).
    ///
    /// # Parameters
    /// - `key`: Key material of any length.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpledes::DesCipher;
    ///
    /// let a = DesCipher::new(b"same key").encrypt(b"data");
    /// let b = DesCipher::new(b"same key").encrypt(b"data");
    /// assert_eq!(a, b);
    /// ```
    pub fn new(key: &[u8]) -> Self {
        let master_key = key_schedule::normalize_key(key);
        DesCipher {
            subkeys: key_schedule::derive_subkeys(&master_key),
        }
    }

    /// Encrypts a message of any length.
    ///
    /// Applies PKCS#7-style padding, then transforms each 8-byte block
    /// through the 16 Feistel rounds in ascending subkey order. The
    /// output is always 1 to 8 bytes longer than the input and a multiple
    /// of 8 bytes.
    ///
    /// # Parameters
    /// - `plaintext`: The data to encrypt.
    ///
    /// # Returns
    /// The ciphertext bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpledes::DesCipher;
    ///
    /// let cipher = DesCipher::new(b"key");
    /// assert_eq!(cipher.encrypt(b"").len(), 8);
    /// assert_eq!(cipher.encrypt(&[0u8; 8]).len(), 16);
    /// ```
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let padded = padding::pad(plaintext);
        let mut ciphertext = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(8) {
            let mut block = [0u8; 8];
            block.copy_from_slice(chunk);
            let encrypted = self.encode_block(block_codec::bytes_to_block(&block));
            ciphertext.extend_from_slice(&block_codec::block_to_bytes(encrypted));
        }
        ciphertext
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// Transforms each 8-byte block through the 16 Feistel rounds in
    /// descending subkey order, then strips the padding.
    ///
    /// # Parameters
    /// - `ciphertext`: The data to decrypt; its length must be a multiple
    ///   of 8 bytes.
    ///
    /// # Errors
    /// Returns [`DesError::InvalidCiphertextLength`] if the length is not
    /// a multiple of 8. A partial final block is never processed.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpledes::{DesCipher, DesError};
    ///
    /// let cipher = DesCipher::new(b"key");
    /// assert_eq!(
    ///     cipher.decrypt(&[0u8; 9]),
    ///     Err(DesError::InvalidCiphertextLength)
    /// );
    /// ```
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, DesError> {
        if !ciphertext.len().is_multiple_of(8) {
            return Err(DesError::InvalidCiphertextLength);
        }
        let mut padded = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(8) {
            let mut block = [0u8; 8];
            block.copy_from_slice(chunk);
            let decrypted = self.decode_block(block_codec::bytes_to_block(&block));
            padded.extend_from_slice(&block_codec::block_to_bytes(decrypted));
        }
        Ok(padding::unpad(&padded))
    }

    /// Encrypts a single 8-byte block, without padding.
    ///
    /// # Parameters
    /// - `block`: Exactly 8 bytes of plaintext.
    ///
    /// # Errors
    /// Returns [`DesError::InvalidBlockLength`] if `block` is not exactly
    /// 8 bytes long.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; 8], DesError> {
        let bytes: [u8; 8] = block.try_into().map_err(|_| DesError::InvalidBlockLength)?;
        let encrypted = self.encode_block(block_codec::bytes_to_block(&bytes));
        Ok(block_codec::block_to_bytes(encrypted))
    }

    /// Decrypts a single 8-byte block, without unpadding.
    ///
    /// # Parameters
    /// - `block`: Exactly 8 bytes of ciphertext.
    ///
    /// # Errors
    /// Returns [`DesError::InvalidBlockLength`] if `block` is not exactly
    /// 8 bytes long.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; 8], DesError> {
        let bytes: [u8; 8] = block.try_into().map_err(|_| DesError::InvalidBlockLength)?;
        let decrypted = self.decode_block(block_codec::bytes_to_block(&bytes));
        Ok(block_codec::block_to_bytes(decrypted))
    }

    // ──────── Block transform ────────

    /// Runs the 16-round Feistel network in ascending subkey order.
    fn encode_block(&self, block: u64) -> u64 {
        let permuted = Self::initial_permutation(block);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for round in 0..NUM_ROUNDS {
            let new_right = left ^ feistel::round_function(right, self.subkeys[round]);
            left = right;
            right = new_right;
        }

        Self::final_permutation(((right as u64) << 32) | left as u64)
    }

    /// Runs the 16-round Feistel network in descending subkey order.
    ///
    /// Identical structure to [`encode_block`](Self::encode_block); only
    /// the round-key order differs.
    fn decode_block(&self, block: u64) -> u64 {
        let permuted = Self::initial_permutation(block);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for round in (0..NUM_ROUNDS).rev() {
            let new_right = left ^ feistel::round_function(right, self.subkeys[round]);
            left = right;
            right = new_right;
        }

        Self::final_permutation(((right as u64) << 32) | left as u64)
    }

    /// Initial permutation stage framing the rounds.
    ///
    /// An identity transform in this cipher variant; restoring the real
    /// DES permutation table would change every output byte and break
    /// compatibility with existing ciphertexts.
    fn initial_permutation(block: u64) -> u64 {
        block
    }

    /// Final permutation stage, symmetric with
    /// [`initial_permutation`](Self::initial_permutation). Also identity.
    fn final_permutation(block: u64) -> u64 {
        block
    }
}

impl Drop for DesCipher {
    /// Clears the derived subkeys on drop.
    fn drop(&mut self) {
        for subkey in self.subkeys.iter_mut() {
            *subkey = 0;
        }
    }
}

/// Encrypts `plaintext` with a cipher keyed by `key`.
///
/// Convenience entry point equivalent to
/// `DesCipher::new(key).encrypt(plaintext)`.
///
/// # Examples
///
/// ```
/// use simpledes::{decrypt, encrypt};
///
/// let ciphertext = encrypt(b"hello world", b"secret");
/// assert_eq!(decrypt(&ciphertext, b"secret").unwrap(), b"hello world");
/// ```
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Vec<u8> {
    DesCipher::new(key).encrypt(plaintext)
}

/// Decrypts `ciphertext` with a cipher keyed by `key`.
///
/// Convenience entry point equivalent to
/// `DesCipher::new(key).decrypt(ciphertext)`.
///
/// # Errors
/// Returns [`DesError::InvalidCiphertextLength`] if the ciphertext length
/// is not a multiple of 8 bytes.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, DesError> {
    DesCipher::new(key).decrypt(ciphertext)
}
