use gf128::{
    BLOCK_SIZE, Block, Convention, Error, Key, MulKey, Multiplier, Result, SoftMultiplier,
    double_eax, double_gcm, double_xts,
};
use hex_literal::hex;

//
// GHASH test vectors from the GCM specification (McGrew & Viega), which accompanies
// NIST SP 800-38D
//

/// Multiply-by-`x` in the GCM convention
const X: Block = hex!("40000000000000000000000000000000");

/// GHASH over `aad` and `ciphertext`, built from the multiplication façade.
fn ghash<M: Multiplier>(multiplier: &mut M, h: &Key, aad: &[u8], ciphertext: &[u8]) -> Result<Block> {
    let key = MulKey::<M>::new(h);
    let mut y = Block::default();

    for data in [aad, ciphertext] {
        for chunk in data.chunks(BLOCK_SIZE) {
            for (y, x) in y.iter_mut().zip(chunk) {
                *y ^= x;
            }
            key.mul(multiplier, &mut y)?;
        }
    }

    let mut lengths = Block::default();
    lengths[..8].copy_from_slice(&(aad.len() as u64 * 8).to_be_bytes());
    lengths[8..].copy_from_slice(&(ciphertext.len() as u64 * 8).to_be_bytes());
    for (y, x) in y.iter_mut().zip(lengths) {
        *y ^= x;
    }
    key.mul(multiplier, &mut y)?;

    Ok(y)
}

#[test]
fn ghash_test_case_2() {
    let h = hex!("66e94bd4ef8a2c3b884cfa59ca342b2e");
    let c = hex!("0388dace60b6a392f328c2b971b2fe78");
    let tag = ghash(&mut SoftMultiplier, &h, &[], &c).unwrap();
    assert_eq!(tag, hex!("f38cbb1ad69223dcc3457ae5b6b0f885"));
}

#[test]
fn ghash_test_case_4() {
    let h = hex!("b83b533708bf535d0aa6e52980d53b78");
    let a = hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2");
    let c = hex!(
        "42831ec2217774244b7221b784d0d49c"
        "e3aa212f2c02a4e035c17e2329aca12e"
        "21d514b25466931c7d8f6a5aac84aa05"
        "1ba30b396a0aac973d58e091"
    );
    let tag = ghash(&mut SoftMultiplier, &h, &a, &c).unwrap();
    assert_eq!(tag, hex!("698e57f70e6ecc7fd9463b7260a9ae5f"));
}

//
// POLYVAL test vector from RFC 8452 Appendix A, computed through GHASH:
//
// POLYVAL(H, X_1, ..., X_n) =
//     ByteReverse(GHASH(mulX_GHASH(ByteReverse(H)), ByteReverse(X_1), ..., ByteReverse(X_n)))
//

#[test]
fn polyval_via_ghash() {
    let mut h = hex!("25629347589242761d31f826ba4b757b");
    h.reverse();
    double_gcm(&mut h);

    let key = MulKey::<SoftMultiplier>::new(&h);
    let mut y = Block::default();
    for mut x in [
        hex!("4f4f95668c83dfb6401762bb2d01a262"),
        hex!("d1a24ddd2721d006bbe45f20d3c9f362"),
    ] {
        x.reverse();
        for (y, x) in y.iter_mut().zip(x) {
            *y ^= x;
        }
        key.mul(&mut SoftMultiplier, &mut y).unwrap();
    }
    y.reverse();

    assert_eq!(y, hex!("f7a3b47b846119fae5b7866cf5e5b77e"));
}

/// A multiplier which drops out after a fixed number of products.
struct Flaky {
    remaining: usize,
}

impl Multiplier for Flaky {
    fn multiply(&mut self, a: &Block, b: &Block) -> Result<Block> {
        if self.remaining == 0 {
            return Err(Error::AcceleratorUnavailable);
        }
        self.remaining -= 1;
        SoftMultiplier.multiply(a, b)
    }
}

#[test]
fn ghash_aborts_on_multiplier_failure() {
    let h = hex!("66e94bd4ef8a2c3b884cfa59ca342b2e");
    let c = hex!("0388dace60b6a392f328c2b971b2fe78");
    let mut flaky = Flaky { remaining: 1 };
    assert_eq!(
        ghash(&mut flaky, &h, &[], &c),
        Err(Error::AcceleratorUnavailable)
    );
}

#[test]
fn x_to_the_128th() {
    // x^128 = x^7 + x^2 + x + 1
    let mut p = X;
    for _ in 0..7 {
        p = gf128::soft::mul(&p, &p);
    }
    assert_eq!(p, hex!("e1000000000000000000000000000000"));

    let mut v = hex!("0388dace60b6a392f328c2b971b2fe78");
    let expected = gf128::soft::mul(&v, &p);
    for _ in 0..128 {
        double_gcm(&mut v);
    }
    assert_eq!(v, expected);
}

#[test]
fn xts_tweak_sequence() {
    let mut tweak = hex!("ffffffffffffffffffffffffffffffff");
    double_xts(&mut tweak);
    assert_eq!(tweak, hex!("79ffffffffffffffffffffffffffffff"));
    double_xts(&mut tweak);
    assert_eq!(tweak, hex!("75feffffffffffffffffffffffffffff"));
}

#[test]
fn eax_matches_convention_dispatch() {
    let mut a = hex!("ffffffffffffffffffffffffffffffff");
    let mut b = a;
    double_eax(&mut a);
    Convention::Eax.double(&mut b);
    assert_eq!(a, hex!("ffffffffffffffffffffffffffffff79"));
    assert_eq!(a, b);
}
