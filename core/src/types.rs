use thiserror::Error;

use crate::{crypto::CryptoError, encoding::EncodingError, headers::HeaderError};

/// Unified envelope error covering framing, cipher, and text-encoding failures.
/// - `From<T>` impls enable `?` across layers.
/// - Messages never include password, key or IV bytes.
///
/// Known weakness: the format carries no authentication tag. A wrong password
/// normally surfaces as `Padding`, but with small probability the garbage
/// plaintext happens to end in valid padding and is returned as `Ok`.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Envelope shorter than 16 bytes, or wrong "Salted__" marker.
    #[error("format error: {0}")]
    Format(#[from] HeaderError),

    /// Decrypted padding is structurally invalid (also the usual wrong-password symptom).
    #[error("padding error: invalid PKCS#7 padding")]
    Padding,

    /// Ciphertext length is not a positive multiple of the block size.
    #[error("decryption error: {0}")]
    Decryption(String),

    /// Text form could not be decoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Caller-supplied salt is malformed.
    #[error("invalid salt: {0}")]
    InvalidSalt(String),

    /// Caller-supplied parameters are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Decrypted bytes are not valid UTF-8 (string entry points only).
    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,
}

impl EnvelopeError {
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding)
    }

    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption(_))
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

impl From<CryptoError> for EnvelopeError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::Padding => EnvelopeError::Padding,
            CryptoError::InvalidSalt(msg) => EnvelopeError::InvalidSalt(msg),
            e @ CryptoError::InvalidIterations { .. } => EnvelopeError::InvalidParams(e.to_string()),
            e @ CryptoError::InvalidCiphertextLen { .. } => EnvelopeError::Decryption(e.to_string()),
        }
    }
}

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
