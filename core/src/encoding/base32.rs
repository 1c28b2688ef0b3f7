//! encoding/base32.rs
//! RFC 4648 base32 text form of binary envelopes.
//!
//! Design notes:
//! - Alphabet `A-Z2-7`, 5 bits per symbol, 8 symbols per 5 input bytes.
//! - Output is always `=` padded to a multiple of 8 symbols.
//! - Decoding folds ASCII lowercase to uppercase; every other deviation is an error.

use data_encoding::{DecodeError, DecodeKind, BASE32};

use crate::encoding::types::EncodingError;

/// Encode raw bytes as padded upper-case base32.
#[inline]
pub fn encode_to_text(bytes: &[u8]) -> String {
    BASE32.encode(bytes)
}

/// Decode padded base32 text back to bytes.
///
/// Errors:
/// - `InvalidSymbol` for any character outside `A-Z`, `a-z`, `2-7`, `=`.
/// - `InvalidLength`, `InvalidPadding` or `TrailingBits` for malformed groups.
pub fn decode_from_text(text: &str) -> Result<Vec<u8>, EncodingError> {
    // ASCII case folding keeps byte offsets unchanged.
    let folded = text.to_ascii_uppercase();
    BASE32
        .decode(folded.as_bytes())
        .map_err(|e| map_decode_error(text, e))
}

/// Expected encoded length for `len` input bytes.
#[inline]
pub fn encoded_len(len: usize) -> usize {
    BASE32.encode_len(len)
}

fn map_decode_error(text: &str, e: DecodeError) -> EncodingError {
    let position = e.position;
    match e.kind {
        DecodeKind::Symbol => EncodingError::InvalidSymbol {
            position,
            symbol: text
                .get(position..)
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        },
        DecodeKind::Length => EncodingError::InvalidLength { position },
        DecodeKind::Padding => EncodingError::InvalidPadding { position },
        _ => EncodingError::TrailingBits { position },
    }
}
