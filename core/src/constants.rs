
/// Magic marker opening every envelope.
/// "Salted__" = the `openssl enc` salted-format identifier.
// The marker is a protocol field, so it is typed `[u8; 8]` to match `SaltedHeader::magic`.
pub const MAGIC_SALTED: [u8; 8] = *b"Salted__";

/// Salt length in bytes (fixed by the wire format).
pub const SALT_LEN: usize = 8;

/// Header length: marker + salt. Everything after this offset is ciphertext.
pub const HEADER_LEN: usize = MAGIC_SALTED.len() + SALT_LEN;

/// AES-256 key length in bytes.
pub const KEY_LEN_32: usize = 32;

/// CBC initialization vector length in bytes.
pub const IV_LEN_16: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// PBKDF2 output length: key followed by IV.
pub const DERIVED_LEN: usize = KEY_LEN_32 + IV_LEN_16;

/// PBKDF2-HMAC-SHA256 iteration count used by `openssl enc -pbkdf2 -iter 10000`.
pub const PBKDF2_ITERATIONS: u32 = 10_000;
