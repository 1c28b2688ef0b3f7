
// ## `pipeline.rs`: stable public API
//!
//! Encryption: plaintext + password -> PBKDF2(salt) -> AES-256-CBC -> "Salted__" || salt || ct -> base32.
//! Decryption reverses every step, taking the salt from the envelope itself.
//!
//! Every call is independent and holds no state, so callers may run any number
//! of them concurrently. The only impure step is salt generation, which draws
//! from the RNG handed in (or the OS CSPRNG by default).

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{
    constants::PBKDF2_ITERATIONS,
    crypto::{
        check_iterations, decrypt_cbc, encrypt_cbc, generate_salt_with_rng,
        kdf::derive_with_iterations, parse_salt_hex, validate_ciphertext_len, Salt,
    },
    encoding::{decode_from_text, encode_to_text},
    headers::{unwrap_envelope, wrap_envelope},
    types::{EnvelopeError, EnvelopeResult},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptParams {
    /// Fixed salt (`openssl enc -S`). `None` draws a fresh random salt per call.
    pub salt: Option<Salt>,
    /// PBKDF2 iteration count (`openssl enc -iter`).
    pub iterations: u32,
}

impl Default for EncryptParams {
    fn default() -> Self {
        Self {
            salt: None,
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl EncryptParams {
    pub fn with_salt(mut self, salt: Salt) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Fixed salt given as 16 hex digits, e.g. `"8302F586FAB491EC"`.
    pub fn with_salt_hex(self, salt_hex: &str) -> EnvelopeResult<Self> {
        Ok(self.with_salt(parse_salt_hex(salt_hex)?))
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> EnvelopeResult<()> {
        validate_iterations(self.iterations)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptParams {
    /// PBKDF2 iteration count; must match the one used to encrypt.
    pub iterations: u32,
}

impl Default for DecryptParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl DecryptParams {
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> EnvelopeResult<()> {
        validate_iterations(self.iterations)
    }
}

fn validate_iterations(iterations: u32) -> EnvelopeResult<()> {
    Ok(check_iterations(iterations)?)
}

// -----------------------------------------------------------------------------
// Binary envelopes
// -----------------------------------------------------------------------------

/// Encrypt into a binary envelope, byte-compatible with
/// `openssl enc -aes-256-cbc -pbkdf2 -iter <n>`.
pub fn encrypt_envelope(
    plaintext: &[u8],
    password: &[u8],
    params: &EncryptParams,
) -> EnvelopeResult<Vec<u8>> {
    encrypt_envelope_with_rng(plaintext, password, params, &mut OsRng)
}

/// Same as [`encrypt_envelope`], drawing a missing salt from `rng`.
pub fn encrypt_envelope_with_rng<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    password: &[u8],
    params: &EncryptParams,
    rng: &mut R,
) -> EnvelopeResult<Vec<u8>> {
    params.validate()?;

    let salt = match params.salt {
        Some(salt) => salt,
        None => generate_salt_with_rng(rng),
    };

    let material = derive_with_iterations(password, &salt, params.iterations);
    let ciphertext = encrypt_cbc(plaintext, material.key(), material.iv());
    let envelope = wrap_envelope(&salt, &ciphertext);

    tracing::debug!(
        salt = %hex::encode(salt),
        iterations = params.iterations,
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "encrypted envelope"
    );

    Ok(envelope)
}

/// Decrypt a binary envelope. The salt is read from the envelope header.
pub fn decrypt_envelope(
    envelope: &[u8],
    password: &[u8],
    params: &DecryptParams,
) -> EnvelopeResult<Vec<u8>> {
    open_envelope(envelope, password, params)
        .inspect_err(|e| tracing::debug!(error = %e, "envelope rejected"))
}

fn open_envelope(
    envelope: &[u8],
    password: &[u8],
    params: &DecryptParams,
) -> EnvelopeResult<Vec<u8>> {
    params.validate()?;

    let (salt, ciphertext) = unwrap_envelope(envelope)?;
    // Reject malformed lengths before paying for PBKDF2.
    validate_ciphertext_len(ciphertext.len())?;

    let material = derive_with_iterations(password, &salt, params.iterations);
    let plaintext = decrypt_cbc(ciphertext, material.key(), material.iv())?;

    tracing::debug!(
        salt = %hex::encode(salt),
        iterations = params.iterations,
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decrypted envelope"
    );

    Ok(plaintext)
}

// -----------------------------------------------------------------------------
// Text envelopes (base32)
// -----------------------------------------------------------------------------

/// Encrypt and encode as base32 with default parameters.
/// `salt_override` is used verbatim when given, otherwise a random salt is drawn.
pub fn encrypt_to_envelope_text(
    plaintext: &[u8],
    password: &[u8],
    salt_override: Option<Salt>,
) -> EnvelopeResult<String> {
    let params = EncryptParams {
        salt: salt_override,
        ..EncryptParams::default()
    };
    encrypt_to_text_with_params(plaintext, password, &params)
}

/// Decode base32 text and decrypt with default parameters.
pub fn decrypt_envelope_text(text: &str, password: &[u8]) -> EnvelopeResult<Vec<u8>> {
    decrypt_text_with_params(text, password, &DecryptParams::default())
}

pub fn encrypt_to_text_with_params(
    plaintext: &[u8],
    password: &[u8],
    params: &EncryptParams,
) -> EnvelopeResult<String> {
    encrypt_to_text_with_rng(plaintext, password, params, &mut OsRng)
}

pub fn encrypt_to_text_with_rng<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    password: &[u8],
    params: &EncryptParams,
    rng: &mut R,
) -> EnvelopeResult<String> {
    let envelope = encrypt_envelope_with_rng(plaintext, password, params, rng)?;
    Ok(encode_to_text(&envelope))
}

pub fn decrypt_text_with_params(
    text: &str,
    password: &[u8],
    params: &DecryptParams,
) -> EnvelopeResult<Vec<u8>> {
    let envelope = decode_from_text(text)
        .inspect_err(|e| tracing::debug!(error = %e, "envelope text rejected"))?;
    decrypt_envelope(&envelope, password, params)
}

// -----------------------------------------------------------------------------
// UTF-8 strings
// -----------------------------------------------------------------------------

/// Encrypt a UTF-8 string into base32 envelope text.
pub fn encrypt_string_to_text(
    plaintext: &str,
    password: &str,
    params: &EncryptParams,
) -> EnvelopeResult<String> {
    encrypt_to_text_with_params(plaintext.as_bytes(), password.as_bytes(), params)
}

/// Decrypt base32 envelope text into a UTF-8 string.
///
/// Non-UTF-8 plaintext fails with `InvalidUtf8`; it is never lossily replaced.
pub fn decrypt_text_to_string(
    text: &str,
    password: &str,
    params: &DecryptParams,
) -> EnvelopeResult<String> {
    let plaintext = decrypt_text_with_params(text, password.as_bytes(), params)?;
    String::from_utf8(plaintext).map_err(|_| EnvelopeError::InvalidUtf8)
}
