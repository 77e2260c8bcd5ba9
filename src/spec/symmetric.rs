//! [`SymmetricCryptoSpec`]: the tagged-union configuration for a symmetric
//! cipher codec stage.

use {
    crate::{
        cipher::block::{Aes, Cbc, Ecb, Padding, Pkcs7, ZeroPadding},
        codec::{Codec, SymmetricCodec},
        error::{Error, Result},
        fingerprint::FingerprintBuilder,
    },
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Aes,
    ChaCha20,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockModeKind {
    Ecb,
    Cbc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingKind {
    Pkcs7,
    Zero,
}

/// Configuration for one symmetric-cipher codec stage.
///
/// Validity depends on `cipher`: AES requires `mode` and forbids `nonce`;
/// ChaCha20 requires `nonce` and forbids `mode`/`iv`/`padding`. See
/// [`validate`](Self::validate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetricCryptoSpec {
    pub cipher: CipherKind,
    pub key: Vec<u8>,
    #[serde(default)]
    pub mode: Option<BlockModeKind>,
    #[serde(default)]
    pub iv: Option<Vec<u8>>,
    #[serde(default)]
    pub nonce: Option<Vec<u8>>,
    #[serde(default)]
    pub padding: Option<PaddingKind>,
}

impl SymmetricCryptoSpec {
    /// Checks the cipher-dependent field combination described in the type
    /// docs. Fails with [`Error::UnsupportedSpec`] on a violation.
    pub fn validate(&self) -> Result<()> {
        match self.cipher {
            CipherKind::Aes => {
                if self.mode.is_none() {
                    return Err(Error::UnsupportedSpec("aes cipher spec requires a mode"));
                }
                if self.nonce.is_some() {
                    return Err(Error::UnsupportedSpec("aes cipher spec forbids nonce"));
                }
            }
            CipherKind::ChaCha20 => {
                if self.nonce.is_none() {
                    return Err(Error::UnsupportedSpec("chacha20 cipher spec requires nonce"));
                }
                if self.mode.is_some() || self.iv.is_some() || self.padding.is_some() {
                    return Err(Error::UnsupportedSpec("chacha20 cipher spec forbids mode/iv/padding"));
                }
            }
        }
        Ok(())
    }
}

fn build_padding(kind: Option<PaddingKind>) -> Box<dyn Padding> {
    match kind.unwrap_or(PaddingKind::Pkcs7) {
        PaddingKind::Pkcs7 => Box::new(Pkcs7),
        PaddingKind::Zero => Box::new(ZeroPadding),
    }
}

fn fingerprint(spec: &SymmetricCryptoSpec) -> u64 {
    let mut b = FingerprintBuilder::new().tag("symmetric").tag(match spec.cipher {
        CipherKind::Aes => "aes",
        CipherKind::ChaCha20 => "chacha20",
    });
    b = b.bytes(&spec.key);
    if let Some(mode) = spec.mode {
        b = b.tag(match mode {
            BlockModeKind::Ecb => "ecb",
            BlockModeKind::Cbc => "cbc",
        });
    }
    if let Some(iv) = &spec.iv {
        b = b.bytes(iv);
    }
    if let Some(nonce) = &spec.nonce {
        b = b.bytes(nonce);
    }
    b.finish()
}

/// Validates and constructs the codec a [`SymmetricCryptoSpec`] describes.
///
/// Fails with [`Error::UnsupportedSpec`] if validation fails or the spec
/// names ChaCha20, a documented but unimplemented extension point.
pub fn build(spec: &SymmetricCryptoSpec) -> Result<Box<dyn Codec>> {
    spec.validate()?;
    let fp = fingerprint(spec);

    match spec.cipher {
        CipherKind::ChaCha20 => Err(Error::UnsupportedSpec("chacha20 is not implemented")),
        CipherKind::Aes => {
            let aes = Aes::from_key_bytes(&spec.key)?;
            let padding = build_padding(spec.padding);
            match spec.mode.expect("validated above") {
                BlockModeKind::Ecb => Ok(Box::new(SymmetricCodec::new(Ecb::new(aes, padding), fp))),
                BlockModeKind::Cbc => {
                    let mode = match &spec.iv {
                        Some(iv) => {
                            let iv: [u8; 16] = iv
                                .as_slice()
                                .try_into()
                                .map_err(|_| Error::UnsupportedSpec("cbc iv must be exactly 16 bytes"))?;
                            Cbc::with_iv(aes, padding, iv)
                        }
                        None => Cbc::new(aes, padding),
                    };
                    Ok(Box::new(SymmetricCodec::new(mode, fp)))
                }
            }
        }
    }
}
