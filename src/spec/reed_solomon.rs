//! [`ReedSolomonCodecSpec`]: the tagged-union configuration for a
//! Reed-Solomon codec stage.

use {
    crate::{
        codec::{
            reed_solomon::{derive_k, BlockCodecStrategy, LinAlgStrategy, PolyStrategy, ReedSolomonCodec, BLOCK_SYMBOLS},
            Codec,
        },
        error::Result,
        field::Gf256,
    },
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsStrategyKind {
    Poly,
    Linalg,
}

/// Configuration for one Reed-Solomon codec stage: `code_rate` picks `k`
/// (see [`derive_k`]) and `codec_strategy` picks which [`BlockCodecStrategy`]
/// computes the codewords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReedSolomonCodecSpec {
    pub code_rate: f64,
    pub codec_strategy: RsStrategyKind,
}

/// Validates and constructs the codec a [`ReedSolomonCodecSpec`] describes.
///
/// Fails with [`Error::InvalidCodeRate`](crate::error::Error::InvalidCodeRate)
/// if `code_rate` is outside `(0, 1)`.
pub fn build(spec: &ReedSolomonCodecSpec) -> Result<Box<dyn Codec>> {
    let n = BLOCK_SYMBOLS;
    let k = derive_k(spec.code_rate, n)?;

    Ok(match spec.codec_strategy {
        RsStrategyKind::Poly => {
            let strategy = PolyStrategy::new(Gf256::default(), k);
            debug_assert_eq!(strategy.n(), n);
            Box::new(ReedSolomonCodec::new(strategy))
        }
        RsStrategyKind::Linalg => {
            let strategy = LinAlgStrategy::new(Gf256::default(), k)?;
            debug_assert_eq!(strategy.n(), n);
            Box::new(ReedSolomonCodec::new(strategy))
        }
    })
}
