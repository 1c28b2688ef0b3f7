// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

pub use crate::constants::{BLOCK_LEN, DERIVED_LEN, IV_LEN_16, KEY_LEN_32, SALT_LEN};

/// A cipher key for AES-256.
pub type Key32 = [u8; KEY_LEN_32];

/// A CBC initialization vector.
pub type Iv16 = [u8; IV_LEN_16];

/// An envelope salt.
pub type Salt = [u8; SALT_LEN];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Trailing PKCS#7 padding is not well formed.
    #[error("invalid PKCS#7 padding")]
    Padding,

    /// Ciphertext length is zero or not a multiple of the block size.
    #[error("invalid ciphertext length: {len} is not a positive multiple of {block}")]
    InvalidCiphertextLen { len: usize, block: usize },

    /// PBKDF2 iteration count must be at least one.
    #[error("invalid iteration count: {iterations}")]
    InvalidIterations { iterations: u32 },

    /// Hex salt could not be parsed into exactly `SALT_LEN` bytes.
    #[error("invalid salt: {0}")]
    InvalidSalt(String),
}
