// ## 📂 File: `src/crypto/salt.rs`

//! crypto/salt.rs
//! Envelope salt generation and parsing.
//!
//! Design:
//! - The RNG is an explicit capability: callers pass any `RngCore + CryptoRng`,
//!   `generate_salt` uses the OS CSPRNG.
//! - Salts are public and travel in the envelope header; only their
//!   unpredictability matters, not secrecy.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::types::{CryptoError, Salt, SALT_LEN};

/// Fresh random salt from the operating system CSPRNG.
#[inline]
pub fn generate_salt() -> Salt {
    generate_salt_with_rng(&mut OsRng)
}

/// Fresh random salt from a caller-supplied cryptographically secure RNG.
#[inline]
pub fn generate_salt_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Salt {
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    salt
}

/// Parse a salt written as 16 hex digits (the `openssl enc -S` notation).
///
/// Accepts upper and lower case. Anything else, including surrounding
/// whitespace, is rejected.
pub fn parse_salt_hex(text: &str) -> Result<Salt, CryptoError> {
    let bytes = hex::decode(text).map_err(|e| CryptoError::InvalidSalt(e.to_string()))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        CryptoError::InvalidSalt(format!("expected {} bytes, got {}", SALT_LEN, v.len()))
    })
}
