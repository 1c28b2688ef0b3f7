// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header and envelope encoding.
//!
//! Design notes:
//! - Marker, then salt, then ciphertext. No length field, no delimiter.

use crate::constants::SALT_LEN;
use crate::headers::types::SaltedHeader;

/// Serialize a `SaltedHeader` into its 16 wire bytes.
#[inline]
pub fn encode_header(h: &SaltedHeader) -> [u8; SaltedHeader::LEN] {
    let mut out = [0u8; SaltedHeader::LEN];
    let mut i = 0usize;

    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_bytes(&mut out, &mut i, &h.magic); // 0..8   marker
    put_bytes(&mut out, &mut i, &h.salt);  // 8..16  salt

    debug_assert_eq!(i, SaltedHeader::LEN, "encoding wrote incorrect length");

    out
}

/// Build the binary envelope: "Salted__" || salt || ciphertext.
///
/// Total length is always `16 + ciphertext.len()`.
pub fn wrap_envelope(salt: &[u8; SALT_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let header = encode_header(&SaltedHeader::new_with_salt(*salt));

    let mut out = Vec::with_capacity(SaltedHeader::LEN + ciphertext.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(ciphertext);
    out
}
