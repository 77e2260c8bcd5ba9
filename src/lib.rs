//! A chainable pipeline of self-describing codecs: GF(2^8) arithmetic, AES,
//! Reed-Solomon, and a framed, integrity-checked wire format.
//!
//! The dependency order is bottom-up:
//!
//! - [`field`]: GF(2^8) arithmetic, polynomial and matrix operations.
//! - [`crc`]: a table-driven CRC, used by [`pipeline`] for per-stage checksums.
//! - [`cipher`]: AES and its ECB/CBC modes of operation with padding.
//! - [`codec`]: the [`Codec`](codec::Codec) trait plus the symmetric-cipher
//!   and Reed-Solomon codecs built on the layers above.
//! - [`pipeline`]: frames codec stages into the `CFP1` wire format.
//! - [`spec`]: declarative, serializable configuration for codecs and
//!   pipelines, and the factory that builds them.

pub mod cipher;
pub mod codec;
pub mod crc;
pub mod error;
pub mod field;
pub mod fingerprint;
pub mod pipeline;
pub mod spec;

pub use {
    cipher::{
        Aes,
        Aes128,
        Aes192,
        Aes256,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        Cbc,
        Ecb,
        Padding,
        Pkcs7,
        ZeroPadding,
    },
    codec::{Codec, Meta, SymmetricCodec},
    crc::Crc,
    error::{Error, Result},
    field::Gf256,
    pipeline::CodecPipeline,
};
