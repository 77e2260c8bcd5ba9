mod pkcs7;
mod zero;

pub use {pkcs7::Pkcs7, zero::ZeroPadding};

use crate::error::Result;

/// A scheme to pad messages to be a multiple of some block size.
///
/// [Block ciphers](`crate::BlockCipher`) expect the input data to be a multiple
/// of the block size. However, messages are rarely an exact multiple of the
/// block size, so a padding scheme is needed as a way to extend the length of
/// the data.
///
/// Exposing information about the validity of padding can be dangerous. Imagine
/// a server which accepts encrypted messages from clients. An adversary can
/// send arbitrary ciphertexts to such a server. This attack model is called a
/// chosen ciphertext attack. Now imagine that the server has a design flaw, and
/// it will return a specific type of error if the padding is invalid. This
/// allows the attacker to send arbitrary ciphertexts to the server and learn
/// whether the padding is valid or not. The attacker can use this information
/// to decrypt the ciphertext faster than a simple bruteforce attack, since he
/// can learn whether the last bytes of the plaintext constitute valid padding.
///
/// This is called a padding oracle attack. Every implementation of `unpad`
/// returns the same [`crate::Error::BadPadding`] variant regardless of which
/// byte of the padding was wrong, so callers can't distinguish "the last byte
/// was wrong" from "the whole block was wrong" from the error alone.
pub trait Padding {
    /// Pad `data` to a multiple of `n`. The returned length is always a
    /// multiple of `n`, even when `data.len()` already is (an entire extra
    /// block is appended in that case, so `unpad` can always find the marker).
    fn pad(&self, data: &[u8], n: usize) -> Vec<u8>;

    /// Remove the padding from `data`. Fails with [`crate::Error::BadPadding`]
    /// if the padding is malformed.
    fn unpad(&self, data: &[u8], n: usize) -> Result<Vec<u8>>;
}

impl Padding for Box<dyn Padding> {
    fn pad(&self, data: &[u8], n: usize) -> Vec<u8> {
        (**self).pad(data, n)
    }

    fn unpad(&self, data: &[u8], n: usize) -> Result<Vec<u8>> {
        (**self).unpad(data, n)
    }
}
