//! Core single-block machinery: the substitution tables, GF(2^8)
//! arithmetic, and the forward and inverse round pipelines.

pub(crate) mod constants;
pub(crate) mod decryption;
pub(crate) mod encryption;
pub(crate) mod gf;
pub(crate) mod util;
