//! Multiplication in GF(2^128).
//!
//! This crate does not hard-wire a multiplication routine. Instead the product is delegated to a
//! [`Multiplier`], which may be a hardware accelerator (e.g. a secure element on a peripheral bus)
//! or the portable [`SoftMultiplier`](crate::SoftMultiplier). The façade here only marshals
//! operands into the byte order the multiplier expects and writes the product back.

use crate::{
    Block, Key,
    codec::ByteOrder,
    error::Result,
    trace::trace_multiplication,
};
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// External collaborator computing GF(2^128) products.
///
/// Implementations compute `a * b` modulo `x^128 + x^7 + x^2 + x + 1` using the bit conventions of
/// NIST SP 800-38D (the same convention as [`double_gcm`](crate::double_gcm)), with both operands
/// and the result encoded in [`Multiplier::OPERAND_ORDER`].
pub trait Multiplier {
    /// Byte order of operands and result.
    const OPERAND_ORDER: ByteOrder = ByteOrder::BigEndian;

    /// Multiply `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AcceleratorUnavailable`](crate::Error::AcceleratorUnavailable) or
    /// [`Error::AcceleratorFault`](crate::Error::AcceleratorFault) when the product could not be
    /// computed.
    fn multiply(&mut self, a: &Block, b: &Block) -> Result<Block>;
}

impl<M: Multiplier + ?Sized> Multiplier for &mut M {
    const OPERAND_ORDER: ByteOrder = M::OPERAND_ORDER;

    #[inline]
    fn multiply(&mut self, a: &Block, b: &Block) -> Result<Block> {
        (**self).multiply(a, b)
    }
}

/// Multiplication key `H`, prepared for a particular [`Multiplier`].
///
/// The key is stored in the multiplier's operand byte order, so it is converted once here rather
/// than on every multiplication.
pub struct MulKey<M: Multiplier> {
    h: Block,
    multiplier: PhantomData<fn(&mut M)>,
}

impl<M: Multiplier> MulKey<M> {
    /// Prepare the big-endian 16-byte key `H` for multiplication.
    #[must_use]
    pub fn new(key: &Key) -> Self {
        Self {
            h: ByteOrder::reorder(key, ByteOrder::BigEndian, M::OPERAND_ORDER),
            multiplier: PhantomData,
        }
    }

    /// Multiply the big-endian accumulator `y` by `H`, replacing `y` with the product.
    ///
    /// # Errors
    ///
    /// Propagates the multiplier's error unchanged. `y` is left untouched on error.
    pub fn mul(&self, multiplier: &mut M, y: &mut Block) -> Result<()> {
        trace_multiplication!(M);

        let input = ByteOrder::reorder(y, ByteOrder::BigEndian, M::OPERAND_ORDER);
        let product = multiplier.multiply(&input, &self.h)?;
        *y = ByteOrder::reorder(&product, M::OPERAND_ORDER, ByteOrder::BigEndian);
        Ok(())
    }
}

impl<M: Multiplier> Clone for MulKey<M> {
    fn clone(&self) -> Self {
        Self {
            h: self.h,
            multiplier: PhantomData,
        }
    }
}

impl<M: Multiplier> Debug for MulKey<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulKey").finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<M: Multiplier> Drop for MulKey<M> {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}
