//! Reed-Solomon error correction over GF(256), as used per data block.

use crate::galois;

/// Builds the generator polynomial g(x) = (x - α^0)(x - α^1)...(x - α^(e-1)).
///
/// Coefficients are returned highest power first, including the leading 1,
/// so the result has `ec_len + 1` entries.
pub fn generator_poly(ec_len: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&ec_len));
    let mut poly = vec![1u8];
    for i in 0..ec_len {
        let root = galois::exp(i as u32);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            // (current * x) + (current * root)
            next[j] = galois::add(next[j], coeff);
            next[j + 1] = galois::add(next[j + 1], galois::mul(coeff, root));
        }
        poly = next;
    }
    poly
}

/// Computes the `ec_len` ECC codewords for one data block.
///
/// The data codewords are taken as polynomial coefficients, multiplied by
/// x^ec_len and reduced mod g(x); the remainder coefficients come back
/// highest degree first. Pure: no state survives between blocks.
pub fn encode_block(data: &[u8], ec_len: usize) -> Vec<u8> {
    let gen = generator_poly(ec_len);
    let mut rem = vec![0u8; ec_len];
    for &codeword in data {
        let factor = galois::add(codeword, rem[0]);
        rem.rotate_left(1);
        rem[ec_len - 1] = 0;
        for (r, &g) in rem.iter_mut().zip(&gen[1..]) {
            *r = galois::add(*r, galois::mul(g, factor));
        }
    }
    rem
}
