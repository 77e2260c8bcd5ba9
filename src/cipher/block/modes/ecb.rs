use crate::{
    cipher::block::{modes::BlockMode, BlockCipher, Padding},
    error::{Error, Result},
};

/// Electronic Codebook mode: each block is encrypted independently.
///
/// Identical plaintext blocks produce identical ciphertext blocks, which
/// leaks the repetition structure of the message. [`Cbc`](super::Cbc) should
/// be preferred; ECB is provided because the wire format this crate supports
/// names it as a recognized mode.
pub struct Ecb<C, P> {
    cipher: C,
    padding: P,
}

impl<C, P> Ecb<C, P>
where
    C: BlockCipher<Block = [u8; 16]>,
    P: Padding,
{
    pub fn new(cipher: C, padding: P) -> Self {
        Ecb { cipher, padding }
    }
}

impl<C, P> BlockMode for Ecb<C, P>
where
    C: BlockCipher<Block = [u8; 16]>,
    P: Padding,
{
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = self.padding.pad(plaintext, 16);
        let mut out = Vec::with_capacity(padded.len());
        for block in padded.chunks_exact(16) {
            let block: [u8; 16] = block.try_into().unwrap();
            out.extend_from_slice(&self.cipher.encrypt_block(&block));
        }
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() % 16 != 0 {
            return Err(Error::BlockSizeMismatch { expected: 16, got: ciphertext.len() % 16 });
        }
        let mut out = Vec::with_capacity(ciphertext.len());
        for block in ciphertext.chunks_exact(16) {
            let block: [u8; 16] = block.try_into().unwrap();
            out.extend_from_slice(&self.cipher.decrypt_block(&block));
        }
        self.padding.unpad(&out, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::block::{Aes128, Pkcs7};

    #[test]
    fn encrypt_decrypt_round_trips() {
        let ecb = Ecb::new(Aes128::new([0x42; 16]), Pkcs7);
        for len in [0, 1, 15, 16, 17, 100] {
            let data: Vec<u8> = (0..len as u8).collect();
            let ct = ecb.encrypt(&data).unwrap();
            assert_eq!(ct.len() % 16, 0);
            assert_eq!(ecb.decrypt(&ct).unwrap(), data);
        }
    }

    #[test]
    fn identical_blocks_produce_identical_ciphertext() {
        let ecb = Ecb::new(Aes128::new([0x11; 16]), Pkcs7);
        let data = [0xaa; 32];
        let ct = ecb.encrypt(&data).unwrap();
        assert_eq!(&ct[0..16], &ct[16..32]);
    }
}
