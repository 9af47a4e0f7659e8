//! The [`Cipher`] struct, which owns an expanded key schedule and exposes
//! single-block encryption and decryption against it, plus free functions
//! for callers that hold a raw schedule.

use crate::core::constants::RCON;
use crate::core::util::{rot_word, sub_word, xor_words};
use crate::core::{decryption, encryption};
use crate::error::{Error, Result};
use crate::key::Key;

/// A single-block AES cipher. Instantiated with a [`Key`], which is expanded
/// once into Nr+1 round keys; the schedule is immutable afterwards and may
/// be shared freely across threads (every transform copies the block into
/// its own local state).
///
/// Both transforms are infallible here: the round keys were derived from
/// the key inside this struct, so a schedule/variant mismatch cannot be
/// expressed through this API.
pub struct Cipher {
    round_keys: Vec<[u8; 16]>,
}

impl Cipher {
    /// Expands the key and stores the resulting round keys in the returned
    /// instance. The expansion is deterministic: equal keys always produce
    /// byte-identical schedules.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// The expanded schedule as a slice of Nr+1 column-major round keys.
    pub fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, plaintext: &[u8; 16]) -> [u8; 16] {
        encryption::encrypt_block(plaintext, &self.round_keys)
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&self, ciphertext: &[u8; 16]) -> [u8; 16] {
        decryption::decrypt_block(ciphertext, &self.round_keys)
    }

    /// Encrypts one block in place, reusing the input buffer as output.
    /// Safe under aliasing: the transform fully consumes the block into a
    /// local state before writing back.
    pub fn encrypt_block_in_place(&self, block: &mut [u8; 16]) {
        *block = encryption::encrypt_block(block, &self.round_keys);
    }

    /// Decrypts one block in place, reusing the input buffer as output.
    pub fn decrypt_block_in_place(&self, block: &mut [u8; 16]) {
        *block = decryption::decrypt_block(block, &self.round_keys);
    }

    /// Encrypts a slice that must be exactly 16 bytes. Returns
    /// [`InvalidBlockLength`](Error::InvalidBlockLength) otherwise, before
    /// any transform work is done.
    pub fn encrypt_slice(&self, plaintext: &[u8]) -> Result<[u8; 16]> {
        let block = as_block(plaintext)?;
        Ok(encryption::encrypt_block(block, &self.round_keys))
    }

    /// Decrypts a slice that must be exactly 16 bytes. Returns
    /// [`InvalidBlockLength`](Error::InvalidBlockLength) otherwise.
    pub fn decrypt_slice(&self, ciphertext: &[u8]) -> Result<[u8; 16]> {
        let block = as_block(ciphertext)?;
        Ok(decryption::decrypt_block(block, &self.round_keys))
    }
}

/// Encrypts one block against a raw expanded schedule. The schedule must
/// hold exactly 11, 13, or 15 round keys (AES-128/192/256); any other
/// count is a [`VariantMismatch`](Error::VariantMismatch).
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> Result<[u8; 16]> {
    check_schedule(round_keys)?;
    Ok(encryption::encrypt_block(plaintext, round_keys))
}

/// Decrypts one block against a raw expanded schedule, with the same
/// schedule-length check as [`encrypt_block`].
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &[[u8; 16]]) -> Result<[u8; 16]> {
    check_schedule(round_keys)?;
    Ok(decryption::decrypt_block(ciphertext, round_keys))
}

fn check_schedule(round_keys: &[[u8; 16]]) -> Result<()> {
    match round_keys.len() {
        11 | 13 | 15 => Ok(()),
        keys => Err(Error::VariantMismatch { keys }),
    }
}

fn as_block(bytes: &[u8]) -> Result<&[u8; 16]> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}

/// AES key schedule (FIPS-197 section 5.2). Expands the Nk words of the
/// cipher key into 4 * (Nr + 1) words, then regroups them into Nr+1
/// column-major round keys. The first round key is the cipher key itself.
fn expand_key(key: &Key) -> Vec<[u8; 16]> {
    let nk = key.size().nk();
    let total_words = 4 * (key.size().nr() + 1);

    // words 0..nk are the key verbatim
    let mut w: Vec<[u8; 4]> = Vec::with_capacity(total_words);
    for word in key.as_bytes().chunks_exact(4) {
        w.push([word[0], word[1], word[2], word[3]]);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            // rotate, substitute, and fold in the round constant
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            // extra substitution, 256-bit variant only
            temp = sub_word(temp);
        }
        w.push(xor_words(&w[i - nk], &temp));
    }

    // every 4 consecutive words form one 16-byte round key
    w.chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (col, word) in words.iter().enumerate() {
                round_key[col * 4..col * 4 + 4].copy_from_slice(word);
            }
            round_key
        })
        .collect()
}
