pub mod types;
pub mod kdf;
pub mod cipher;
pub mod salt;

pub use types::*;
pub use kdf::*;
pub use cipher::*;
pub use salt::*;
