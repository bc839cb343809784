//! Portable pure Rust implementation of GHASH-convention multiplication over GF(2^128), in
//! constant time. Both 32-bit and 64-bit backends are available.
//!
//! Method described at: <https://www.bearssl.org/constanttime.html#ghash-for-gcm>
//!
//! Elements are read as big-endian 128-bit integers. Under the NIST SP 800-38D convention the most
//! significant bit of that integer is the coefficient of `x^0`, so every operand is a bit-reversed
//! polynomial. From:
//!
//! <https://crypto.stackexchange.com/questions/66448/how-does-bearssls-gcm-modular-reduction-work/66462#66462>
//!
//! > The product of two bit-reversed 128-bit polynomials yields the
//! > bit-reversed result over 255 bits, not 256. The BearSSL code ends up
//! > with a 256-bit result in zw[], and that value is shifted by one bit,
//! > because of that reversed convention issue. Thus, the code must
//! > include a shifting step to put it back where it should
//!
//! Both backends therefore compute the unreduced 256-bit product with Karatsuba, shift it left by
//! one bit, and fold the low half into the high half.

cpubits::cpubits! {
    16 | 32 => {
        #[path = "soft/soft32.rs"]
        mod soft_impl;
    }
    64 => {
        #[cfg_attr(gf128_backend = "soft32", path = "soft/soft32.rs")]
        #[cfg_attr(not(gf128_backend = "soft32"), path = "soft/soft64.rs")]
        mod soft_impl;
    }
}

use crate::{Block, Multiplier, codec::ByteOrder, error::Result};
use core::{
    num::Wrapping,
    ops::{BitAnd, BitOr, BitXor, Mul, Shl},
};

/// Constant-time software [`Multiplier`].
///
/// Never fails. Operands and result are big-endian, like [`double_gcm`](crate::double_gcm).
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftMultiplier;

impl Multiplier for SoftMultiplier {
    const OPERAND_ORDER: ByteOrder = ByteOrder::BigEndian;

    #[inline]
    fn multiply(&mut self, a: &Block, b: &Block) -> Result<Block> {
        Ok(mul(a, b))
    }
}

/// Multiply two big-endian GF(2^128) elements in the NIST SP 800-38D convention.
#[inline]
#[must_use]
pub fn mul(a: &Block, b: &Block) -> Block {
    let a = ByteOrder::BigEndian.to_u128(a);
    let b = ByteOrder::BigEndian.to_u128(b);
    ByteOrder::BigEndian.from_u128(soft_impl::polymul(a, b))
}

/// Multiplication in GF(2)[X], implemented generically and wrapped as `bmul32` and `bmul64`.
///
/// Uses "holes" (sequences of zeroes) to avoid carry spilling, as specified in the mask operand
/// `m0` which should have a full-width value with the following bit pattern:
///
/// `0b100010001...0001` (e.g. `0x1111_1111u32`)
///
/// When carries do occur, they wind up in a "hole" and are subsequently masked out of the result.
#[inline]
fn bmul<T>(x: T, y: T, m0: T) -> T
where
    T: BitAnd<Output = T> + BitOr<Output = T> + Copy + Shl<u32, Output = T>,
    Wrapping<T>: BitXor<Output = Wrapping<T>> + Mul<Output = Wrapping<T>>,
{
    let m1 = m0 << 1;
    let m2 = m1 << 1;
    let m3 = m2 << 1;

    let x0 = Wrapping(x & m0);
    let x1 = Wrapping(x & m1);
    let x2 = Wrapping(x & m2);
    let x3 = Wrapping(x & m3);

    let y0 = Wrapping(y & m0);
    let y1 = Wrapping(y & m1);
    let y2 = Wrapping(y & m2);
    let y3 = Wrapping(y & m3);

    let z0 = (x0 * y0) ^ (x1 * y3) ^ (x2 * y2) ^ (x3 * y1);
    let z1 = (x0 * y1) ^ (x1 * y0) ^ (x2 * y3) ^ (x3 * y2);
    let z2 = (x0 * y2) ^ (x1 * y1) ^ (x2 * y0) ^ (x3 * y3);
    let z3 = (x0 * y3) ^ (x1 * y2) ^ (x2 * y1) ^ (x3 * y0);

    (z0.0 & m0) | (z1.0 & m1) | (z2.0 & m2) | (z3.0 & m3)
}
