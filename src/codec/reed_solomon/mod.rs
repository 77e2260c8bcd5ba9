//! A Reed-Solomon codec over $GF(2^8)$, usable as a [`Codec`] in a pipeline.
//!
//! A message is chunked into `k`-byte blocks; each block is expanded into an
//! `n`-byte codeword by a [`BlockCodecStrategy`]. Two strategies are
//! provided: [`PolyStrategy`] (Lagrange interpolation over a single global
//! product polynomial) and [`LinAlgStrategy`] (a systematic Vandermonde
//! generator matrix), kept as a deliberately redundant pair for
//! cross-validation in tests, not a runtime-pluggable extension point. They
//! use different evaluation-point conventions (see each strategy's docs) and
//! so do not produce the same bytes for the same message; each is
//! self-consistent (repeatable, round-trips under its own `decode_block`),
//! and their differing [`fingerprint`](BlockCodecStrategy::fingerprint)s
//! keep a frame built by one from ever being decoded by the other.
//!
//! `n` is fixed at 256 (every nonzero field element plus zero, each used
//! exactly once as an evaluation point); `k` is derived from a code rate in
//! `(0, 1)`, clamped to `[1, n - 1]`.

mod linalg_strategy;
mod poly_strategy;

pub use {linalg_strategy::LinAlgStrategy, poly_strategy::PolyStrategy};

use {
    super::{Codec, Meta},
    crate::{
        error::{Error, Result},
        field::Gf256,
        fingerprint::FingerprintBuilder,
    },
};

/// One `k`-symbol-in, `n`-symbol-out encode/decode step.
///
/// Implementors commit to internal determinism: the same `(n, k, message)`
/// must always encode to the same bytes under one strategy, and must
/// round-trip through that same strategy's `decode_block`. Strategies are
/// not required to agree with each other byte-for-byte.
pub trait BlockCodecStrategy {
    /// Expands a `k`-byte message block into an `n`-byte codeword.
    fn encode_block(&self, msg: &[u8]) -> Vec<u8>;

    /// Recovers the `k`-byte message from at least `k` codeword symbols at
    /// the positions listed in `valid` (the first `k` of which are used).
    fn decode_block(&self, codeword: &[u8], valid: &[usize]) -> Result<Vec<u8>>;

    fn n(&self) -> usize;
    fn k(&self) -> usize;
    fn fingerprint(&self) -> u64;
}

/// Codeword length: every field element is used exactly once as an
/// evaluation point.
pub const BLOCK_SYMBOLS: usize = 256;

/// Derives `k` (message symbols per block) from a code rate in `(0, 1)`,
/// clamped to `[1, n - 1]`. Used by [`crate::spec`] when building a codec
/// from a [`ReedSolomonCodecSpec`](crate::spec::ReedSolomonCodecSpec).
pub fn derive_k(code_rate: f64, n: usize) -> Result<usize> {
    if !(code_rate > 0.0 && code_rate < 1.0) {
        return Err(Error::InvalidCodeRate(code_rate));
    }
    let raw = (code_rate * n as f64).floor() as usize;
    Ok(raw.clamp(1, n - 1))
}

/// The `n` evaluation points shared by both strategies: `0`, followed by
/// every power of the field's primitive element (i.e. every nonzero field
/// element, each exactly once).
fn evaluation_points(gf: &Gf256) -> Vec<u8> {
    let mut xs = vec![0u8];
    xs.extend_from_slice(&gf.exp_table()[0..255]);
    xs
}

/// A chunking Reed-Solomon codec: `n = 256`, `k` derived from a code rate.
pub struct ReedSolomonCodec<S> {
    strategy: S,
}

impl<S: BlockCodecStrategy> ReedSolomonCodec<S> {
    pub fn new(strategy: S) -> Self {
        ReedSolomonCodec { strategy }
    }
}

impl<S: BlockCodecStrategy> Codec for ReedSolomonCodec<S> {
    fn encode(&self, data: &[u8]) -> Result<(Meta, Vec<u8>)> {
        let k = self.strategy.k();
        let mut out = Vec::new();
        for chunk in data.chunks(k) {
            let mut block = chunk.to_vec();
            block.resize(k, 0);
            out.extend(self.strategy.encode_block(&block));
        }
        let mut meta = Meta::new();
        meta.insert("msg_length".to_string(), (data.len() as u64).to_le_bytes().to_vec());
        Ok((meta, out))
    }

    fn decode(&self, meta: &Meta, data: &[u8]) -> Result<Vec<u8>> {
        let n = self.strategy.n();
        if data.len() % n != 0 {
            return Err(Error::DecodeOverflow(data.len()));
        }
        let valid: Vec<usize> = (0..n).collect();
        let mut out = Vec::new();
        for codeword in data.chunks(n) {
            out.extend(self.strategy.decode_block(codeword, &valid)?);
        }

        let len_bytes = meta.get("msg_length").ok_or(Error::IncompleteFrame("msg_length"))?;
        let len_array: [u8; 8] =
            len_bytes.as_slice().try_into().map_err(|_| Error::IncompleteFrame("msg_length"))?;
        let msg_length = u64::from_le_bytes(len_array) as usize;
        out.truncate(msg_length);
        Ok(out)
    }

    fn fingerprint(&self) -> u64 {
        FingerprintBuilder::new()
            .tag("reed-solomon")
            .u64(self.strategy.n() as u64)
            .u64(self.strategy.k() as u64)
            .u64(self.strategy.fingerprint())
            .finish()
    }
}

/// Reads back the `"erasures"` parameter a decoder was told about: a list of
/// little-endian `u32` codeword positions known to be unreadable.
///
/// `ReedSolomonCodec::decode` always treats every position as valid
/// ([`evaluation_points`]/`0..n`) and never calls this; erasure localization
/// is out of scope, so this bookkeeping stays an inert, documented extension
/// point rather than a wired-up decode path.
pub fn unpack_erasures(meta: &Meta) -> Vec<usize> {
    meta.get("erasures")
        .map(|bytes| bytes.chunks_exact(4).map(|c| u32::from_le_bytes(c.try_into().unwrap()) as usize).collect())
        .unwrap_or_default()
}

/// Given a codeword length `n` and a set of known-erased positions, returns
/// the remaining valid positions in ascending order. See [`unpack_erasures`].
pub fn valid_from_erasures(n: usize, erasures: &[usize]) -> Vec<usize> {
    (0..n).filter(|i| !erasures.contains(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_k_clamps_to_valid_range() {
        assert_eq!(derive_k(0.5, 256).unwrap(), 128);
        assert_eq!(derive_k(0.001, 256).unwrap(), 1);
        assert_eq!(derive_k(0.999, 256).unwrap(), 255);
        assert!(derive_k(0.0, 256).is_err());
        assert!(derive_k(1.0, 256).is_err());
    }

    #[test]
    fn unpack_and_valid_from_erasures_are_consistent() {
        let mut meta = Meta::new();
        let erasures: Vec<u8> = [1u32, 5, 10].iter().flat_map(|v| v.to_le_bytes()).collect();
        meta.insert("erasures".to_string(), erasures);
        let parsed = unpack_erasures(&meta);
        assert_eq!(parsed, vec![1, 5, 10]);
        let valid = valid_from_erasures(8, &parsed);
        assert_eq!(valid, vec![0, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn unpack_erasures_defaults_to_empty() {
        let meta = Meta::new();
        assert!(unpack_erasures(&meta).is_empty());
    }
}
