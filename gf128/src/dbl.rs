//! Doubling in GF(2^128), i.e. multiplication by the field generator `x`.
//!
//! Block cipher modes such as XEX/XTS are similar to CTR mode, but instead of incrementing the
//! nonce every block they multiply it by 2 in GF(2^128). EAX and OCB use the same operation to
//! derive subkeys, and GCM-based constructions use it to step through powers of `H`.
//!
//! The three conventions all reduce modulo `x^128 + x^7 + x^2 + x + 1`, but disagree on bit and
//! byte order:
//!
//! | Convention | Buffer order  | Shift | Dropped bit      | Reduction            |
//! |------------|---------------|-------|------------------|----------------------|
//! | GCM        | big-endian    | right | LSB of last word | `0xE1000000` → word 0 |
//! | EAX        | big-endian    | left  | MSB of word 0    | `0x00000087` → word 3 |
//! | XTS        | little-endian | left  | MSB of word 3    | `0x00000087` → word 0 |
//!
//! GCM follows [NIST SP 800-38D], where the first bit of the buffer is the coefficient of `x^0`.
//! XTS follows IEEE 1619 and computes the same value as EAX, but on the byte-reversed buffer.
//!
//! All routines derive the reduction mask arithmetically from the dropped bit, so they contain no
//! data-dependent branches.
//!
//! [NIST SP 800-38D]: https://csrc.nist.gov/publications/detail/sp/800-38d/final

use crate::{
    Block,
    codec::{self, ByteOrder},
};

/// Reduction constant for GCM, XORed into the most significant word after a right shift.
const GCM_REDUCTION: u32 = 0xE100_0000;

/// Reduction constant for EAX and XTS, XORed into the least significant word after a left shift.
const EAX_XTS_REDUCTION: u32 = 0x0000_0087;

/// Expand a single bit (`0` or `1`) into `0` or `constant` without branching.
#[inline(always)]
fn reduction_mask(bit: u32, constant: u32) -> u32 {
    debug_assert!(bit <= 1);
    (!bit).wrapping_add(1) & constant
}

/// Double a GCM field element in place.
///
/// `v` is big-endian on entry and exit, using the polynomial and bit conventions of
/// NIST SP 800-38D.
#[inline]
pub fn double_gcm(v: &mut Block) {
    let [mut v0, mut v1, mut v2, mut v3] = codec::decode(v, ByteOrder::BigEndian);
    let mask = reduction_mask(v3 & 0x01, GCM_REDUCTION);
    v3 = (v3 >> 1) | (v2 << 31);
    v2 = (v2 >> 1) | (v1 << 31);
    v1 = (v1 >> 1) | (v0 << 31);
    v0 = (v0 >> 1) ^ mask;
    *v = codec::encode([v0, v1, v2, v3], ByteOrder::BigEndian);
}

/// Double an EAX field element in place.
///
/// `v` is big-endian on entry and exit. This is the "double" operation from the EAX and OCB
/// specifications, which use a different bit convention from GCM.
#[inline]
pub fn double_eax(v: &mut Block) {
    let [mut v0, mut v1, mut v2, mut v3] = codec::decode(v, ByteOrder::BigEndian);
    let mask = reduction_mask(v0 >> 31, EAX_XTS_REDUCTION);
    v0 = (v0 << 1) | (v1 >> 31);
    v1 = (v1 << 1) | (v2 >> 31);
    v2 = (v2 << 1) | (v3 >> 31);
    v3 = (v3 << 1) ^ mask;
    *v = codec::encode([v0, v1, v2, v3], ByteOrder::BigEndian);
}

/// Double an XTS tweak in place.
///
/// `v` is little-endian on entry and exit, as used by IEEE 1619 XTS mode.
#[inline]
pub fn double_xts(v: &mut Block) {
    let [mut v0, mut v1, mut v2, mut v3] = codec::decode(v, ByteOrder::LittleEndian);
    let mask = reduction_mask(v3 >> 31, EAX_XTS_REDUCTION);
    v3 = (v3 << 1) | (v2 >> 31);
    v2 = (v2 << 1) | (v1 >> 31);
    v1 = (v1 << 1) | (v0 >> 31);
    v0 = (v0 << 1) ^ mask;
    *v = codec::encode([v0, v1, v2, v3], ByteOrder::LittleEndian);
}

/// Bit and byte ordering convention used by a mode of operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Convention {
    /// NIST SP 800-38D (GCM, GHASH, GMAC).
    Gcm,

    /// EAX and OCB subkey doubling.
    Eax,

    /// IEEE 1619 XTS/XEX tweak doubling.
    Xts,
}

impl Convention {
    /// Byte order of field element buffers under this convention.
    #[must_use]
    pub const fn byte_order(self) -> ByteOrder {
        match self {
            Convention::Gcm | Convention::Eax => ByteOrder::BigEndian,
            Convention::Xts => ByteOrder::LittleEndian,
        }
    }

    /// Double `v` in place under this convention.
    #[inline]
    pub fn double(self, v: &mut Block) {
        match self {
            Convention::Gcm => double_gcm(v),
            Convention::Eax => double_eax(v),
            Convention::Xts => double_xts(v),
        }
    }
}
