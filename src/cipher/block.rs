pub mod aes;
pub mod modes;
pub mod padding;

pub use {
    aes::{Aes, Aes128, Aes192, Aes256},
    modes::{BlockMode, Cbc, Ecb},
    padding::{Padding, Pkcs7, ZeroPadding},
};

/// A block cipher encrypts and decrypts data one fixed-size block at a time.
///
/// A block cipher alone does not handle inputs of arbitrary length; for
/// that, it must be combined with a [`BlockMode`] (see [`Cbc`] and [`Ecb`])
/// and a [`Padding`] scheme.
pub trait BlockCipher: BlockEncrypt<Block = Self::Block> + BlockDecrypt<Block = Self::Block> {
    type Block;

    /// Block size in bytes.
    const BLOCK_SIZE: usize;
}

/// The encryption half of a [block cipher](BlockCipher).
pub trait BlockEncrypt {
    type Block;

    /// Encrypt a single block.
    fn encrypt_block(&self, block: &Self::Block) -> Self::Block;
}

/// The decryption half of a [block cipher](BlockCipher).
pub trait BlockDecrypt {
    type Block;

    /// Decrypt a single block.
    fn decrypt_block(&self, block: &Self::Block) -> Self::Block;
}
