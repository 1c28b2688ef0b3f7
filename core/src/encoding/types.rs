use thiserror::Error;

/// Text decoding failures. Positions are byte offsets into the input text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A character outside the base32 alphabet (or `=` padding).
    #[error("invalid base32 symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    /// Total length is not a whole number of 8-symbol groups.
    #[error("invalid base32 length at position {position}")]
    InvalidLength { position: usize },

    /// `=` padding missing, misplaced, or of an impossible length.
    #[error("invalid base32 padding at position {position}")]
    InvalidPadding { position: usize },

    /// Final symbol carries non-zero bits that no input byte could produce.
    #[error("non-zero trailing bits at position {position}")]
    TrailingBits { position: usize },

    /// Base64 input to the alphabet converter was malformed.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
}
