//! Self-describing codecs: the unit a [pipeline](crate::pipeline) chains.
//!
//! A [`Codec`] turns data into (possibly different) data, plus a small bag of
//! parameters ([`Meta`]) it needs to reverse the transformation later. Those
//! parameters travel with the frame on the wire (as `PARAM` records), so a
//! codec that generates something per call, a random IV say, can still be
//! decoded without the caller holding onto out-of-band state.

pub mod reed_solomon;
pub mod symmetric;

pub use symmetric::SymmetricCodec;

use crate::error::Result;
use indexmap::IndexMap;

/// Parameters a codec attaches to one encoded unit. Iteration order matches
/// insertion order, which matters because the pipeline writes `PARAM`
/// records in that order and must read them back the same way.
pub type Meta = IndexMap<String, Vec<u8>>;

/// A single, invertible transformation stage.
pub trait Codec {
    /// Transforms `data`, returning the transformed bytes and any parameters
    /// needed to invert the transformation.
    fn encode(&self, data: &[u8]) -> Result<(Meta, Vec<u8>)>;

    /// Inverts [`encode`](Codec::encode) given the parameters it produced.
    fn decode(&self, meta: &Meta, data: &[u8]) -> Result<Vec<u8>>;

    /// A deterministic, content-addressed identifier for this codec's
    /// configuration. Two codecs built from equal parameters fingerprint
    /// equal; this is not a secret and carries no information about `self`'s
    /// address.
    fn fingerprint(&self) -> u64;
}
