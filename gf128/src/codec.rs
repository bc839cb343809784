//! Field element codec.
//!
//! Converts between the canonical 16-byte buffer form of a field element and the four 32-bit
//! words the doubling routines operate on. The byte order of the buffer is always explicit: GCM
//! and EAX store elements big-endian, XTS stores them little-endian.

use crate::Block;

/// Host working form of a field element: four 32-bit words in native byte order.
///
/// Word `0` holds bytes `0..4` of the buffer. Under [`ByteOrder::BigEndian`] that makes it the most
/// significant word, under [`ByteOrder::LittleEndian`] the least significant one.
pub type Words = [u32; 4];

/// Byte order of a 16-byte field element buffer, read as a single 128-bit integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    /// Most significant byte first (GCM, EAX).
    BigEndian,

    /// Least significant byte first (XTS).
    LittleEndian,
}

impl ByteOrder {
    /// Interpret `block` as a 128-bit integer in this byte order.
    #[inline]
    #[must_use]
    pub fn to_u128(self, block: &Block) -> u128 {
        match self {
            ByteOrder::BigEndian => u128::from_be_bytes(*block),
            ByteOrder::LittleEndian => u128::from_le_bytes(*block),
        }
    }

    /// Serialize a 128-bit integer in this byte order.
    #[inline]
    #[must_use]
    pub fn from_u128(self, x: u128) -> Block {
        match self {
            ByteOrder::BigEndian => x.to_be_bytes(),
            ByteOrder::LittleEndian => x.to_le_bytes(),
        }
    }

    /// Re-express a buffer holding a value in byte order `from` in byte order `to`.
    ///
    /// The represented 128-bit value is unchanged; only its memory layout moves.
    #[inline]
    #[must_use]
    pub fn reorder(block: &Block, from: ByteOrder, to: ByteOrder) -> Block {
        to.from_u128(from.to_u128(block))
    }
}

/// Decode a buffer into host-order words under the given byte order.
#[inline]
#[must_use]
pub fn decode(block: &Block, order: ByteOrder) -> Words {
    let word = |i: usize| {
        let bytes = [block[i], block[i + 1], block[i + 2], block[i + 3]];
        match order {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        }
    };

    [word(0), word(4), word(8), word(12)]
}

/// Encode host-order words into a buffer under the given byte order.
#[inline]
#[must_use]
pub fn encode(words: Words, order: ByteOrder) -> Block {
    let mut block = Block::default();
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        let bytes = match order {
            ByteOrder::BigEndian => word.to_be_bytes(),
            ByteOrder::LittleEndian => word.to_le_bytes(),
        };
        chunk.copy_from_slice(&bytes);
    }
    block
}
