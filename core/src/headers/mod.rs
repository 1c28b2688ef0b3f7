//! headers/mod.rs
//! Binary "Salted__" envelope header.
//!
//! Notes:
//! - Fixed-size 16-byte header (marker + salt); the ciphertext follows directly.
//! - Same bytes as `openssl enc -salt`, so files round-trip with the CLI.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
