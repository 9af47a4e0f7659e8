use super::constants::SBOX;

// used by both the forward and inverse pipelines
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

#[inline(always)]
pub(crate) fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// RotWord from the key schedule: cyclic left shift by one byte.
#[inline(always)]
pub(crate) fn rot_word(w: [u8; 4]) -> [u8; 4] {
    [w[1], w[2], w[3], w[0]]
}

/// SubWord from the key schedule: S-box applied to every byte.
#[inline(always)]
pub(crate) fn sub_word(w: [u8; 4]) -> [u8; 4] {
    w.map(|b| SBOX[b as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_round_key_is_its_own_inverse() {
        let mut state: [u8; 16] = std::array::from_fn(|i| i as u8);
        let round_key: [u8; 16] = std::array::from_fn(|i| (0xa5 ^ i) as u8);
        let expected = state;

        add_round_key(&mut state, &round_key);
        assert_ne!(state, expected);
        add_round_key(&mut state, &round_key);
        assert_eq!(state, expected);
    }

    #[test]
    fn rot_word_rotates_left() {
        assert_eq!(rot_word([0x09, 0xcf, 0x4f, 0x3c]), [0xcf, 0x4f, 0x3c, 0x09]);
    }

    #[test]
    fn sub_word_substitutes_each_byte() {
        // values straight off the S-box table
        assert_eq!(
            sub_word([0x00, 0x01, 0x53, 0xff]),
            [0x63, 0x7c, 0xed, 0x16]
        );
    }
}
