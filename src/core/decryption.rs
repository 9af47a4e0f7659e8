use super::constants::SBOX_INV;
use super::gf;
use super::util::add_round_key;

/// Inverse cipher (FIPS-197 section 5.3). Undoes the forward cipher by
/// applying the inverse sub-transforms in reverse round order.
#[inline(always)]
pub(crate) fn decrypt_block(ciphertext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *ciphertext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[last]);

    for round_key in round_keys[1..last].iter().rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[0]);

    state
}

/// InvSubBytes: every state byte replaced by its inverse S-box image.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// InvShiftRows: row r of the state rotated right by r positions,
/// mirroring the forward rotation.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    // right rotation by r == left rotation by 4 - r
    let s = *state;
    for row in 0..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// InvMixColumns: each column multiplied by the inverse MDS matrix
/// ```text
/// [ 0e 0b 0d 09 ]
/// [ 09 0e 0b 0d ]
/// [ 0d 09 0e 0b ]
/// [ 0b 0d 09 0e ]
/// ```
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = gf::mul(a, 0x0e) ^ gf::mul(b, 0x0b) ^ gf::mul(c, 0x0d) ^ gf::mul(d, 0x09);
        state[i + 1] = gf::mul(a, 0x09) ^ gf::mul(b, 0x0e) ^ gf::mul(c, 0x0b) ^ gf::mul(d, 0x0d);
        state[i + 2] = gf::mul(a, 0x0d) ^ gf::mul(b, 0x09) ^ gf::mul(c, 0x0e) ^ gf::mul(d, 0x0b);
        state[i + 3] = gf::mul(a, 0x0b) ^ gf::mul(b, 0x0d) ^ gf::mul(c, 0x09) ^ gf::mul(d, 0x0e);
    }
}
