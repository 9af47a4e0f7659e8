//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or
//! 256 bits, and [`KeySize`], which ties the FIPS-197 parameters Nk and Nr
//! together so that an inconsistent pairing cannot be expressed.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// The three AES variants. Each variant fixes the key length in 32-bit words
/// (Nk) and the round count (Nr) together; Nb is always 4.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Number of 32-bit words in the cipher key (Nk).
    pub const fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Number of rounds (Nr). Always Nk + 6.
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn byte_len(self) -> usize {
        4 * self.nk()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// A valid AES cipher key. Can be generated randomly or built from an
/// existing byte slice of exactly 16, 24, or 32 bytes; the variant is
/// inferred from the length. A `Key` is required to instantiate a
/// [`Cipher`](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> blockaes::Result<()> {
/// use blockaes::{Key, KeySize};
///
/// let bytes: [u8; 32] = [
///     0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe,
///     0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d, 0x77, 0x81,
///     0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7,
///     0x2d, 0x98, 0x10, 0xa3, 0x09, 0x14, 0xdf, 0xf4,
/// ];
///
/// let key = Key::try_from_slice(&bytes)?;
/// assert_eq!(key.size(), KeySize::Aes256);
/// assert_eq!(key.as_bytes(), &bytes);
///
/// // Anything other than 16, 24, or 32 bytes is rejected, never truncated.
/// assert!(Key::try_from_slice(&bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K128(k),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        let mut k = [0u8; 24];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K192(k),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K256(k),
        })
    }

    /// Attempts to build a key from a slice of bytes. Returns an
    /// [`InvalidKeyLength`](Error::InvalidKeyLength) error unless the slice
    /// is exactly 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = match bytes.len() {
            // match arm guarantees the conversion cannot fail
            16 => KeyBytes::K128(bytes.try_into().unwrap()),
            24 => KeyBytes::K192(bytes.try_into().unwrap()),
            32 => KeyBytes::K256(bytes.try_into().unwrap()),
            len => return Err(Error::InvalidKeyLength { len }),
        };
        Ok(Self { bytes })
    }

    /// The AES variant this key selects.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Aes128,
            KeyBytes::K192(_) => KeySize::Aes192,
            KeyBytes::K256(_) => KeySize::Aes256,
        }
    }

    /// Returns the raw key material.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}
