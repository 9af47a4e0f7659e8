//! Byte arithmetic in GF(2^8) modulo the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11b). Addition is plain XOR; only doubling
//! and the generic product are needed by the round pipeline.

/// Doubles a field element: shift left one bit, folding an overflow back
/// in with the reduction constant 0x1B. Branch-free.
#[inline(always)]
pub(crate) fn xtime(b: u8) -> u8 {
    (b << 1) ^ (0x1B & 0u8.wrapping_sub(b >> 7))
}

/// GF(2^8) product via double-and-add: for every set bit k of `b`, XOR in
/// `a` doubled k times. Total function over all byte pairs.
#[inline(always)]
pub(crate) fn mul(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        product ^= a & 0u8.wrapping_sub(b & 1);
        a = xtime(a);
        b >>= 1;
    }
    product
}
