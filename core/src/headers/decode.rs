// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header and envelope decoding.
//!
//! Design notes:
//! - Reads by fixed offsets; field order must match `encode.rs` exactly.
//! - Validation runs right after decoding so a wrong marker never reaches the cipher.

use crate::constants::SALT_LEN;
use crate::headers::types::{HeaderError, SaltedHeader};

/// Parse and validate the first 16 bytes of `buf` as a `SaltedHeader`.
///
/// # Returns
/// - `Err(HeaderError::BufferTooShort)` if fewer than 16 bytes are available.
/// - `Err(HeaderError::InvalidMagic)` if the marker does not match.
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<SaltedHeader, HeaderError> {
    if buf.len() < SaltedHeader::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: SaltedHeader::LEN });
    }

    let mut i = 0usize;
    #[inline] fn get_bytes<const N: usize>(buf: &[u8], i: &mut usize) -> [u8; N] {
        let mut dst = [0u8; N]; dst.copy_from_slice(&buf[*i..*i+N]); *i += N; dst
    }

    let h = SaltedHeader {
        magic: get_bytes::<8>(buf, &mut i),
        salt: get_bytes::<SALT_LEN>(buf, &mut i),
    };

    debug_assert_eq!(i, SaltedHeader::LEN, "decoding consumed incorrect length");

    h.validate()?;
    Ok(h)
}

/// Split a binary envelope into its salt and ciphertext.
///
/// Everything after byte 16 is returned as ciphertext, unchecked; the cipher
/// layer validates its length.
pub fn unwrap_envelope(buf: &[u8]) -> Result<([u8; SALT_LEN], &[u8]), HeaderError> {
    let header = decode_header(buf)?;
    Ok((header.salt, &buf[SaltedHeader::LEN..]))
}
