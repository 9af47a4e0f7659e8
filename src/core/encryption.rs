use super::constants::SBOX;
use super::gf;
use super::util::add_round_key;

/// Forward cipher (FIPS-197 section 5.1). Transforms one 16-byte block,
/// stored column-major, using the provided expanded round keys. Round 0 is
/// key addition only; the final round omits MixColumns.
#[inline(always)]
pub(crate) fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *plaintext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

/// SubBytes: every state byte replaced by its S-box image. Purely local,
/// no dependency between bytes.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows: row r of the state rotated left by r positions across the
/// four columns. Row 0 is untouched.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    // column-major layout: byte (col, row) lives at col * 4 + row,
    // so row r's source column is (col + r) mod 4
    let s = *state;
    for row in 0..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns: each column, taken as a vector over GF(2^8), is multiplied
/// by the fixed MDS matrix
/// ```text
/// [ 02 03 01 01 ]
/// [ 01 02 03 01 ]
/// [ 01 01 02 03 ]
/// [ 03 01 01 02 ]
/// ```
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = gf::mul(a, 0x02) ^ gf::mul(b, 0x03) ^ c ^ d;
        state[i + 1] = a ^ gf::mul(b, 0x02) ^ gf::mul(c, 0x03) ^ d;
        state[i + 2] = a ^ b ^ gf::mul(c, 0x02) ^ gf::mul(d, 0x03);
        state[i + 3] = gf::mul(a, 0x03) ^ b ^ c ^ gf::mul(d, 0x02);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cipher;
    use crate::error::Result;
    use crate::key::Key;
    use hex_literal::hex;

    #[test]
    fn test_shift_rows() {
        let mut state: [u8; 16] = [
            // col 0
            0x00, 0x01, 0x02, 0x03,
            // col 1
            0x04, 0x05, 0x06, 0x07,
            // col 2
            0x08, 0x09, 0x0a, 0x0b,
            // col 3
            0x0c, 0x0d, 0x0e, 0x0f,
        ];

        shift_rows(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0x00, 0x05, 0x0a, 0x0f,
                // col 1
                0x04, 0x09, 0x0e, 0x03,
                // col 2
                0x08, 0x0d, 0x02, 0x07,
                // col 3
                0x0c, 0x01, 0x06, 0x0b,
            ],
            "row r must rotate left by r positions"
        );
    }

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns,
        // expressed as 4 columns of 4 bytes (column-major [u8; 16])
        let mut state: [u8; 16] = [
            // col 0
            0x63, 0x47, 0xa2, 0xf0,
            // col 1
            0xf2, 0x0a, 0x22, 0x5c,
            // col 2
            0x01, 0x01, 0x01, 0x01,
            // col 3
            0xc6, 0xc6, 0xc6, 0xc6,
        ];

        mix_columns(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0x5d, 0xe0, 0x70, 0xbb,
                // col 1
                0x9f, 0xdc, 0x58, 0x9d,
                // col 2: all-equal columns are fixed points
                0x01, 0x01, 0x01, 0x01,
                // col 3
                0xc6, 0xc6, 0xc6, 0xc6,
            ],
            "mix columns does not match reference vectors"
        );
    }

    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core128.pdf
        let key = Key::try_from_slice(&hex!("2b7e151628aed2a6abf7158809cf4f3c"))?;
        let cipher = Cipher::new(&key);

        let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
        let expected = hex!("3ad77bb40d7a3660a89ecaf32466ef97");

        let actual = encrypt_block(&plaintext, cipher.round_keys());
        assert_eq!(actual, expected, "incorrect AES-128 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_192() -> Result<()> {
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core192.pdf
        let key = Key::try_from_slice(&hex!(
            "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"
        ))?;
        let cipher = Cipher::new(&key);

        let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
        let expected = hex!("bd334f1d6e45f25ff712a214571fa5cc");

        let actual = encrypt_block(&plaintext, cipher.round_keys());
        assert_eq!(actual, expected, "incorrect AES-192 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_256() -> Result<()> {
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core256.pdf
        let key = Key::try_from_slice(&hex!(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"
        ))?;
        let cipher = Cipher::new(&key);

        let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
        let expected = hex!("f3eed1bdb5d2a03c064b5a7e3db181f8");

        let actual = encrypt_block(&plaintext, cipher.round_keys());
        assert_eq!(actual, expected, "incorrect AES-256 encryption of block");
        Ok(())
    }
}
