//! salted-core
//!
//! Password-based "Salted__" envelopes, wire-compatible with
//! `openssl enc -aes-256-cbc -pbkdf2 -iter 10000`.
//! PBKDF2-HMAC-SHA256 key/IV derivation, AES-256-CBC with PKCS#7 padding,
//! and a base32 text form of the binary envelope.
//!
//! ```rust,ignore
//! use salted_core::prelude::*;
//!
//! let text = encrypt_to_envelope_text(b"hey", b"somepassword", None)?;
//! let plain = decrypt_envelope_text(&text, b"somepassword")?;
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Layers
pub mod crypto;
pub mod headers;
pub mod encoding;

// Orchestration
pub mod pipeline;

pub use types::{EnvelopeError, EnvelopeResult};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::pipeline::{
        decrypt_envelope, decrypt_envelope_text, decrypt_text_to_string, encrypt_envelope,
        encrypt_string_to_text, encrypt_to_envelope_text, DecryptParams, EncryptParams,
    };
    pub use crate::types::{EnvelopeError, EnvelopeResult};
}
