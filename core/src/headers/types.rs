// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Salted envelope header and its errors.
//!
//! Layout (16 bytes, fixed, no length prefix):
//! - 0..8   marker "Salted__"
//! - 8..16  salt
//! - 16..   ciphertext (not part of the header)
//!
//! External tools parse this by fixed offsets, so neither field may ever change size.

use thiserror::Error;

use crate::constants::{HEADER_LEN, MAGIC_SALTED, SALT_LEN};

/// Envelope header preceding the ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltedHeader {
    pub magic: [u8; 8],     // "Salted__" marker
    pub salt: [u8; SALT_LEN],
}

impl SaltedHeader {
    /// Fixed header size in bytes.
    pub const LEN: usize = HEADER_LEN;

    /// Header with the standard marker and the given salt.
    pub fn new_with_salt(salt: [u8; SALT_LEN]) -> Self {
        Self { magic: MAGIC_SALTED, salt }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_SALTED {
            return Err(HeaderError::InvalidMagic {
                have: self.magic,
                need: MAGIC_SALTED,
            });
        }
        Ok(())
    }
}

/// Render bytes as an ASCII literal when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Input shorter than marker + salt.
    #[error("envelope too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// First 8 bytes are not the "Salted__" marker.
    #[error("invalid magic: expected {}, got {}", fmt_bytes(.need), fmt_bytes(.have))]
    InvalidMagic { have: [u8; 8], need: [u8; 8] },
}
