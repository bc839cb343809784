#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod codec;
pub mod soft;

mod dbl;
mod error;
mod mul;
mod trace;

pub use crate::{
    codec::ByteOrder,
    dbl::{Convention, double_eax, double_gcm, double_xts},
    error::{Error, Result},
    mul::{MulKey, Multiplier},
    soft::SoftMultiplier,
};

/// Size of a GF(2^128) field element in bytes
pub const BLOCK_SIZE: usize = 16;

/// Size of a multiplication key in bytes
pub const KEY_SIZE: usize = 16;

/// GF(2^128) field element buffer (16-bytes)
pub type Block = [u8; BLOCK_SIZE];

/// Multiplication key `H` (16-bytes, big-endian)
pub type Key = [u8; KEY_SIZE];
