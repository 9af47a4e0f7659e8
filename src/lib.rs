//! Single-block AES as specified in FIPS-197: the key schedule plus the
//! forward and inverse round pipelines over a 16-byte block. There is no
//! mode of operation, padding, or I/O here; an embedding application is
//! expected to treat [`Cipher`] as an opaque one-block-at-a-time primitive.
//!
//! The implementation favours clarity over speed and makes no constant-time
//! guarantees beyond straightforward branch-free field arithmetic.
//!
//! ```
//! # fn main() -> blockaes::Result<()> {
//! use blockaes::{Cipher, Key};
//!
//! // FIPS-197 Appendix B example key and input.
//! let key = Key::try_from_slice(&[
//!     0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!     0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//! ])?;
//! let cipher = Cipher::new(&key);
//!
//! let plaintext: [u8; 16] = [
//!     0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
//!     0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34,
//! ];
//! let ciphertext = cipher.encrypt_block(&plaintext);
//!
//! assert_eq!(ciphertext[0], 0x39);
//! assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);
//! # Ok(())
//! # }
//! ```

mod cipher;
mod core;
mod error;
mod key;

pub use cipher::{Cipher, decrypt_block, encrypt_block};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
