//! encoding/mod.rs
//! Text forms of the binary envelope.

pub mod types;
pub mod base32;
pub mod convert;

pub use types::*;
pub use base32::*;
pub use convert::*;
