//! Simplified-DES block cipher engine.
//!
//! A Feistel-network cipher operating on 64-bit blocks with 16 rounds,
//! a per-round subkey schedule derived from a single 8-byte master key,
//! and PKCS#7-style padding for arbitrary-length messages.
//!
//! This crate is a port of the `DESEncoder` engine from the original C++
//! application, compatible byte-for-byte with it. The original simplifies
//! real DES in two ways that are preserved here on purpose: the key
//! schedule is a plain bit-shift derivation instead of the permuted-choice
//! schedule, and the initial/final permutations are identity transforms.
//! "Fixing" either would break every existing ciphertext, so this crate
//! makes no claim of cryptographic security — compatibility is the
//! contract.
//!
//! # Architecture
//!
//! ```text
//! tables        (static expansion / permutation / substitution tables)
//!     ↓
//! feistel       (round function — expand, key-mix, substitute, permute)
//!     ↓ 16 rounds per block, subkeys ascending or descending
//! DesCipher     (block transform + padding + key schedule orchestration)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use simpledes::DesCipher;
//!
//! let cipher = DesCipher::new(b"my secret key");
//!
//! let ciphertext = cipher.encrypt(b"attack at dawn");
//! assert_ne!(&ciphertext[..], b"attack at dawn");
//!
//! let plaintext = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! Or use the free-function entry points:
//!
//! ```
//! use simpledes::{decrypt, encrypt};
//!
//! let ciphertext = encrypt(b"hello world", b"secret");
//! assert_eq!(decrypt(&ciphertext, b"secret").unwrap(), b"hello world");
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod block_codec;
mod des_cipher;
pub(crate) mod feistel;
pub(crate) mod key_schedule;
pub(crate) mod padding;
pub(crate) mod tables;

pub use des_cipher::{decrypt, encrypt, DesCipher};
pub use error::DesError;
