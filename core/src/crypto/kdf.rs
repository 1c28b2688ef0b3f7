// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! PBKDF2-HMAC-SHA256 key and IV derivation from password and envelope salt.
//!
//! Design:
//! - PBKDF2(password, salt, iterations, 48) -> key (bytes 0..32) || iv (bytes 32..48)
//! - Same layout as `openssl enc -pbkdf2`: one derivation feeds both the AES key and the IV.
//!
//! Notes:
//! - Deterministic: the same (password, salt, iterations) always yields the same material.
//! - No constant-time guarantee is claimed beyond what the `pbkdf2` crate provides.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::PBKDF2_ITERATIONS;
use crate::crypto::types::{CryptoError, Iv16, Key32, Salt, DERIVED_LEN, IV_LEN_16, KEY_LEN_32};

/// Derived (key, iv) pair. Bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: Key32,
    iv: Iv16,
}

impl KeyMaterial {
    /// Build from explicit key and IV bytes.
    pub fn from_parts(key: Key32, iv: Iv16) -> Self {
        Self { key, iv }
    }

    pub fn key(&self) -> &Key32 {
        &self.key
    }

    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }
}

// Never print key or IV bytes.
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Derive key material with the interoperable default of 10,000 iterations.
#[inline]
pub fn derive_key_material(password: &[u8], salt: &Salt) -> KeyMaterial {
    derive_with_iterations(password, salt, PBKDF2_ITERATIONS)
}

/// Derive key material with a caller-chosen iteration count.
///
/// Errors:
/// - `iterations == 0` returns `CryptoError::InvalidIterations`.
pub fn derive_key_material_with_iterations(
    password: &[u8],
    salt: &Salt,
    iterations: u32,
) -> Result<KeyMaterial, CryptoError> {
    check_iterations(iterations)?;
    Ok(derive_with_iterations(password, salt, iterations))
}

/// PBKDF2 needs at least one iteration.
pub fn check_iterations(iterations: u32) -> Result<(), CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::InvalidIterations { iterations });
    }
    Ok(())
}

/// Derivation for an iteration count already passed through [`check_iterations`].
pub(crate) fn derive_with_iterations(password: &[u8], salt: &Salt, iterations: u32) -> KeyMaterial {
    tracing::trace!(salt = %hex::encode(salt), iterations, "deriving key material");

    let mut out = [0u8; DERIVED_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut out);

    let mut key = [0u8; KEY_LEN_32];
    let mut iv = [0u8; IV_LEN_16];
    key.copy_from_slice(&out[..KEY_LEN_32]);
    iv.copy_from_slice(&out[KEY_LEN_32..]);
    out.zeroize();

    KeyMaterial { key, iv }
}
