// ## 📂 File: `src/crypto/cipher.rs`

//! src/crypto/cipher.rs
//! AES-256-CBC with PKCS#7 padding.
//!
//! Design notes:
//! - 32-byte key, 16-byte IV, 16-byte blocks.
//! - Output length is always the plaintext length rounded up to the next block,
//!   plus one full padding block when the plaintext is already block aligned
//!   (empty input encrypts to exactly one block).
//! - Structural padding validation is the only check CBC provides. It is not
//!   authentication: a wrong key usually fails it, but may occasionally pass
//!   and yield garbage.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::types::{CryptoError, Iv16, Key32, BLOCK_LEN};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` with AES-256-CBC and PKCS#7 padding.
#[inline]
pub fn encrypt_cbc(plaintext: &[u8], key: &Key32, iv: &Iv16) -> Vec<u8> {
    Aes256CbcEnc::new(&(*key).into(), &(*iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt AES-256-CBC `ciphertext` and strip PKCS#7 padding.
///
/// Errors:
/// - Empty or non block-aligned input returns `CryptoError::InvalidCiphertextLen`.
/// - Malformed trailing padding returns `CryptoError::Padding`.
///
/// On error no plaintext is returned, partial or otherwise.
pub fn decrypt_cbc(ciphertext: &[u8], key: &Key32, iv: &Iv16) -> Result<Vec<u8>, CryptoError> {
    validate_ciphertext_len(ciphertext.len())?;

    Aes256CbcDec::new(&(*key).into(), &(*iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Padding)
}

/// Length of the ciphertext produced for a plaintext of `plaintext_len` bytes.
#[inline]
pub fn ciphertext_len(plaintext_len: usize) -> usize {
    (plaintext_len / BLOCK_LEN + 1) * BLOCK_LEN
}

/// Ciphertext must be a positive multiple of the block size.
#[inline]
pub fn validate_ciphertext_len(len: usize) -> Result<(), CryptoError> {
    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(CryptoError::InvalidCiphertextLen { len, block: BLOCK_LEN });
    }
    Ok(())
}
