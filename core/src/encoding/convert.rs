//! encoding/convert.rs
//! Conversion between the reference tool's base64 text and this crate's base32 text.
//!
//! `openssl enc -base64` prints base64; envelopes here travel as base32. Both
//! carry the same binary envelope, so converting one into the other allows
//! direct text comparison.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::encoding::base32::{decode_from_text, encode_to_text};
use crate::encoding::types::EncodingError;

/// Re-express standard padded base64 as padded base32.
///
/// Line breaks (as emitted by `openssl enc -base64` every 64 columns) are ignored.
pub fn base64_to_base32(text: &str) -> Result<String, EncodingError> {
    let joined: String = text.lines().map(str::trim_end).collect();
    let bytes = STANDARD
        .decode(joined.as_bytes())
        .map_err(|e| EncodingError::InvalidBase64(e.to_string()))?;
    Ok(encode_to_text(&bytes))
}

/// Re-express padded base32 as standard padded base64, on a single line.
pub fn base32_to_base64(text: &str) -> Result<String, EncodingError> {
    let bytes = decode_from_text(text)?;
    Ok(STANDARD.encode(bytes))
}
