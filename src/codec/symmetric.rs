//! Wraps a [`BlockMode`] (a block cipher plus a mode of operation) as a [`Codec`].

use {
    super::{Codec, Meta},
    crate::{cipher::block::BlockMode, error::Result},
};

/// A [`Codec`] that delegates entirely to a [`BlockMode`] (AES in CBC or ECB,
/// with whatever padding the mode was built with.
///
/// This codec never produces parameters of its own: an IV, if the mode
/// generates one, is embedded directly in the ciphertext bytes by
/// [`Cbc`](crate::cipher::block::Cbc) rather than carried in [`Meta`].
pub struct SymmetricCodec<M> {
    mode: M,
    fingerprint: u64,
}

impl<M: BlockMode> SymmetricCodec<M> {
    /// `fingerprint` is computed by the caller (typically the
    /// [spec factory](crate::spec)) from the cipher/mode/padding
    /// configuration, since `M` itself doesn't expose those parameters.
    pub fn new(mode: M, fingerprint: u64) -> Self {
        SymmetricCodec { mode, fingerprint }
    }
}

impl<M: BlockMode> Codec for SymmetricCodec<M> {
    fn encode(&self, data: &[u8]) -> Result<(Meta, Vec<u8>)> {
        Ok((Meta::new(), self.mode.encrypt(data)?))
    }

    fn decode(&self, _meta: &Meta, data: &[u8]) -> Result<Vec<u8>> {
        self.mode.decrypt(data)
    }

    fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}
