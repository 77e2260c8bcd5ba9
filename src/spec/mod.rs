//! Declarative codec configuration: the serializable counterpart to the
//! `Codec`/`BlockCodecStrategy` types actually constructed at runtime.
//!
//! A [`CodecPipelineSpec`] is what a caller would load from a pipeline spec
//! file; [`build_pipeline`] turns it into a runnable [`CodecPipeline`].

mod reed_solomon;
mod symmetric;

pub use reed_solomon::{build as build_reed_solomon, ReedSolomonCodecSpec, RsStrategyKind};
pub use symmetric::{build as build_symmetric, BlockModeKind, CipherKind, PaddingKind, SymmetricCryptoSpec};

use {
    crate::{codec::Codec, error::Error, error::Result, pipeline::CodecPipeline},
    serde::{Deserialize, Serialize},
};

/// One stage of a [`CodecPipelineSpec`]: either a symmetric cipher or a
/// Reed-Solomon codec. Tagged on the wire by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodecSpec {
    Symmetric(SymmetricCryptoSpec),
    ReedSolomon(ReedSolomonCodecSpec),
}

/// Validates and constructs the codec a [`CodecSpec`] describes.
pub fn build_codec(spec: &CodecSpec) -> Result<Box<dyn Codec>> {
    match spec {
        CodecSpec::Symmetric(s) => build_symmetric(s),
        CodecSpec::ReedSolomon(s) => build_reed_solomon(s),
    }
}

/// A non-empty, ordered list of [`CodecSpec`]s describing a whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<CodecSpec>", into = "Vec<CodecSpec>")]
pub struct CodecPipelineSpec(Vec<CodecSpec>);

impl CodecPipelineSpec {
    /// Fails with [`Error::IncompleteFrame`] if `stages` is empty.
    pub fn new(stages: Vec<CodecSpec>) -> Result<Self> {
        if stages.is_empty() {
            return Err(Error::IncompleteFrame("pipeline spec stages"));
        }
        Ok(CodecPipelineSpec(stages))
    }

    pub fn stages(&self) -> &[CodecSpec] {
        &self.0
    }
}

impl TryFrom<Vec<CodecSpec>> for CodecPipelineSpec {
    type Error = Error;

    fn try_from(stages: Vec<CodecSpec>) -> std::result::Result<Self, Error> {
        CodecPipelineSpec::new(stages)
    }
}

impl From<CodecPipelineSpec> for Vec<CodecSpec> {
    fn from(spec: CodecPipelineSpec) -> Vec<CodecSpec> {
        spec.0
    }
}

/// Builds every stage in order and assembles them into a [`CodecPipeline`].
pub fn build_pipeline(spec: &CodecPipelineSpec) -> Result<CodecPipeline> {
    let codecs = spec.stages().iter().map(build_codec).collect::<Result<Vec<_>>>()?;
    CodecPipeline::new(codecs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_spec_rejects_empty_stages() {
        assert!(CodecPipelineSpec::new(vec![]).is_err());
    }

    #[test]
    fn builds_and_runs_a_mixed_pipeline() {
        let spec = CodecPipelineSpec::new(vec![
            CodecSpec::ReedSolomon(ReedSolomonCodecSpec { code_rate: 0.8, codec_strategy: RsStrategyKind::Poly }),
            CodecSpec::Symmetric(SymmetricCryptoSpec {
                cipher: CipherKind::Aes,
                key: vec![0x09; 16],
                mode: Some(BlockModeKind::Ecb),
                iv: None,
                nonce: None,
                padding: None,
            }),
        ])
        .unwrap();

        let pipeline = build_pipeline(&spec).unwrap();
        let data = vec![0xab; 1024];
        let frame = pipeline.encode(&data).unwrap();
        assert_eq!(pipeline.decode(&frame).unwrap(), data);
    }

    #[test]
    fn pipeline_spec_stages_preserve_order() {
        let spec = CodecPipelineSpec::new(vec![
            CodecSpec::ReedSolomon(ReedSolomonCodecSpec { code_rate: 0.5, codec_strategy: RsStrategyKind::Poly }),
            CodecSpec::Symmetric(SymmetricCryptoSpec {
                cipher: CipherKind::Aes,
                key: vec![0x09; 16],
                mode: Some(BlockModeKind::Ecb),
                iv: None,
                nonce: None,
                padding: None,
            }),
        ])
        .unwrap();
        assert!(matches!(spec.stages()[0], CodecSpec::ReedSolomon(_)));
        assert!(matches!(spec.stages()[1], CodecSpec::Symmetric(_)));
    }
}
