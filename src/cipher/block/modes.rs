mod cbc;
mod ecb;

pub use {cbc::Cbc, ecb::Ecb};

use crate::error::Result;

/// A way to execute a [block cipher](crate::BlockCipher) on data of arbitrary
/// length.
///
/// A block cipher can only encrypt or decrypt one block at a time. In order to
/// encrypt arbitrary amounts of data, there needs to be a way to ensure that
/// the data is a multiple of the block size ([padding](crate::Padding)) and a
/// way to map input blocks of plaintext to output blocks of ciphertext. The
/// "mode of operation" usually refers to the combination of these two
/// requirements.
pub trait BlockMode {
    /// Pads and encrypts `plaintext`.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts and unpads `ciphertext`.
    ///
    /// Fails with [`crate::Error::BadPadding`] if the padding is malformed,
    /// or [`crate::Error::BlockSizeMismatch`] if `ciphertext` is not a
    /// multiple of the block size (plus, for CBC without a fixed IV, one
    /// extra leading block).
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
