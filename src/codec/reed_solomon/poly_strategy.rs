use {
    super::{evaluation_points, BlockCodecStrategy},
    crate::{
        error::{Error, Result},
        field::{
            poly::{poly_eval, poly_interpolate},
            Gf256,
        },
        fingerprint::FingerprintBuilder,
    },
};

/// Reed-Solomon via Lagrange interpolation over a single global product
/// polynomial: encode is `k` Horner evaluations of the message, decode is one
/// [`poly_interpolate`] call.
pub struct PolyStrategy {
    gf: Gf256,
    n: usize,
    k: usize,
    xs: Vec<u8>,
}

impl PolyStrategy {
    pub fn new(gf: Gf256, k: usize) -> Self {
        let xs = evaluation_points(&gf);
        let n = xs.len();
        log::trace!("building polynomial RS strategy: n={n}, k={k}");
        PolyStrategy { gf, n, k, xs }
    }
}

impl BlockCodecStrategy for PolyStrategy {
    fn encode_block(&self, msg: &[u8]) -> Vec<u8> {
        self.xs.iter().map(|&x| poly_eval(&self.gf, msg, x)).collect()
    }

    fn decode_block(&self, codeword: &[u8], valid: &[usize]) -> Result<Vec<u8>> {
        if valid.len() < self.k {
            return Err(Error::InsufficientSymbols { needed: self.k, have: valid.len() });
        }
        let chosen = &valid[..self.k];
        let xs: Vec<u8> = chosen.iter().map(|&i| self.xs[i]).collect();
        let ys: Vec<u8> = chosen.iter().map(|&i| codeword[i]).collect();
        poly_interpolate(&self.gf, &xs, &ys)
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }

    fn fingerprint(&self) -> u64 {
        FingerprintBuilder::new().tag("reed-solomon-strategy-poly").u64(self.n as u64).u64(self.k as u64).finish()
    }
}
