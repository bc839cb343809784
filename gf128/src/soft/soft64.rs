//! Constant-time software implementation of GF(2^128) multiplication for 64-bit architectures.
//! Adapted from BearSSL's `ghash_ctmul64.c`:
//!
//! <https://bearssl.org/gitweb/?p=BearSSL;a=blob;f=src/hash/ghash_ctmul64.c;hb=4b6046412>
//!
//! Copyright (c) 2016 Thomas Pornin <pornin@bolet.org>
//!
//! The Karatsuba core is shared with the `polyval` crate's soft backend; the GHASH one-bit shift
//! and reduction are specific to this crate.

/// Multiply two elements held as big-endian integers, i.e. bit-reversed polynomials.
#[inline]
pub(super) fn polymul(a: u128, b: u128) -> u128 {
    let (v0, v1, v2, v3) = karatsuba(split(a), split(b));
    let (v0, v1, v2, v3) = shl1(v0, v1, v2, v3);
    let (lo, hi) = reduce(v0, v1, v2, v3);
    (u128::from(hi) << 64) | u128::from(lo)
}

/// Split into `(low, high)` 64-bit limbs.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn split(x: u128) -> (u64, u64) {
    (x as u64, (x >> 64) as u64)
}

/// Compute the unreduced 256-bit carryless product of two 128-bit values.
///
/// Uses a Karatsuba decomposition in which the 128x128 multiplication is reduced to three 64x64
/// multiplications together with a bit-reversal trick to efficiently recover the high half.
#[inline]
fn karatsuba(h: (u64, u64), y: (u64, u64)) -> (u64, u64, u64, u64) {
    // Karatsuba input decomposition for H
    let (h0, h1) = h;
    let h0r = h0.reverse_bits();
    let h1r = h1.reverse_bits();
    let h2 = h0 ^ h1;
    let h2r = h0r ^ h1r;

    // Karatsuba input decomposition for Y
    let (y0, y1) = y;
    let y0r = y0.reverse_bits();
    let y1r = y1.reverse_bits();
    let y2 = y0 ^ y1;
    let y2r = y0r ^ y1r;

    // Perform carryless multiplications
    let z0 = bmul64(y0, h0);
    let z1 = bmul64(y1, h1);
    let mut z2 = bmul64(y2, h2);
    let mut z0h = bmul64(y0r, h0r);
    let mut z1h = bmul64(y1r, h1r);
    let mut z2h = bmul64(y2r, h2r);

    // Karatsuba recombination
    z2 ^= z0 ^ z1;
    z2h ^= z0h ^ z1h;
    z0h = z0h.reverse_bits() >> 1;
    z1h = z1h.reverse_bits() >> 1;
    z2h = z2h.reverse_bits() >> 1;

    // Assemble the final 256-bit product as 64x4
    let v0 = z0;
    let v1 = z0h ^ z2;
    let v2 = z1 ^ z2h;
    let v3 = z1h;
    (v0, v1, v2, v3)
}

/// Shift the 255-bit reversed product into place as a 256-bit reversed product.
#[inline]
fn shl1(v0: u64, v1: u64, v2: u64, v3: u64) -> (u64, u64, u64, u64) {
    (
        v0 << 1,
        (v1 << 1) | (v0 >> 63),
        (v2 << 1) | (v1 >> 63),
        (v3 << 1) | (v2 >> 63),
    )
}

/// Reduce the 256-bit product modulo `x^128 + x^7 + x^2 + x + 1`.
///
/// Operands are bit-reversed, so the low limbs hold the highest powers and are folded upwards.
#[inline]
fn reduce(v0: u64, mut v1: u64, mut v2: u64, mut v3: u64) -> (u64, u64) {
    v2 ^= v0 ^ (v0 >> 1) ^ (v0 >> 2) ^ (v0 >> 7);
    v1 ^= (v0 << 63) ^ (v0 << 62) ^ (v0 << 57);
    v3 ^= v1 ^ (v1 >> 1) ^ (v1 >> 2) ^ (v1 >> 7);
    v2 ^= (v1 << 63) ^ (v1 << 62) ^ (v1 << 57);
    (v2, v3)
}

/// Carryless multiplication in GF(2)[X], truncated to the low 64-bits.
#[inline]
fn bmul64(x: u64, y: u64) -> u64 {
    super::bmul(x, y, 0x1111_1111_1111_1111)
}
