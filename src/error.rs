use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type. Every variant except [`Rng`](Error::Rng) is a caller
/// precondition violation, detected before any transform work begins.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build an AES key from a slice that is not 16, 24, or 32 bytes.
    /// Keys are never silently truncated or padded.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Supplied a plaintext or ciphertext block that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected exactly 16)")]
    InvalidBlockLength { len: usize },

    /// Supplied an expanded key schedule whose round-key count matches no AES
    /// variant. A valid schedule holds Nr+1 round keys: 11, 13, or 15.
    #[error("schedule matches no AES variant: {keys} round keys (expected 11, 13, or 15)")]
    VariantMismatch { keys: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
