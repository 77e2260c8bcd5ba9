use {
    super::{BlockCodecStrategy, BLOCK_SYMBOLS},
    crate::{
        error::{Error, Result},
        field::{
            matrix::{inv_mat, matmul, solve},
            poly::vander_mat,
            Gf256,
        },
        fingerprint::FingerprintBuilder,
    },
};

fn as_column(values: &[u8]) -> Vec<Vec<u8>> {
    values.iter().map(|&b| vec![b]).collect()
}

fn from_column(col: &[Vec<u8>]) -> Vec<u8> {
    col.iter().map(|row| row[0]).collect()
}

/// Reed-Solomon via a systematic generator matrix: `xs_la[i] = i`, `V` the
/// `n × k` Vandermonde matrix over those points, `V_k` its top `k` (square)
/// rows, and `G = V · V_k^-1`. Since `V_k · V_k^-1 = I`, the top `k` rows of
/// `G` are themselves the identity, so the first `k` codeword symbols equal
/// the message, a systematic code (hence the name). Encode is
/// `codeword = G · message`; decode re-solves `A x = b` for
/// whichever `k` rows of `G` are at the valid positions.
pub struct LinAlgStrategy {
    gf: Gf256,
    n: usize,
    k: usize,
    g: Vec<Vec<u8>>,
}

impl LinAlgStrategy {
    pub fn new(gf: Gf256, k: usize) -> Result<Self> {
        let n = BLOCK_SYMBOLS;
        log::trace!("building linear-algebra RS strategy: n={n}, k={k}");
        let xs_la: Vec<u8> = (0..n).map(|i| i as u8).collect();
        let v = vander_mat(&gf, &xs_la, k);
        let v_k: Vec<Vec<u8>> = v[..k].to_vec();
        let v_k_inv = inv_mat(&gf, &v_k)?;
        let g = matmul(&gf, &v, &v_k_inv);
        Ok(LinAlgStrategy { gf, n, k, g })
    }
}

impl BlockCodecStrategy for LinAlgStrategy {
    fn encode_block(&self, msg: &[u8]) -> Vec<u8> {
        let codeword = matmul(&self.gf, &self.g, &as_column(msg));
        from_column(&codeword)
    }

    fn decode_block(&self, codeword: &[u8], valid: &[usize]) -> Result<Vec<u8>> {
        if valid.len() < self.k {
            return Err(Error::InsufficientSymbols { needed: self.k, have: valid.len() });
        }
        let chosen = &valid[..self.k];
        let a: Vec<Vec<u8>> = chosen.iter().map(|&i| self.g[i].clone()).collect();
        let b = as_column(&chosen.iter().map(|&i| codeword[i]).collect::<Vec<u8>>());
        let msg_col = solve(&self.gf, &a, &b)?;
        Ok(from_column(&msg_col))
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }

    fn fingerprint(&self) -> u64 {
        FingerprintBuilder::new().tag("reed-solomon-strategy-linalg").u64(self.n as u64).u64(self.k as u64).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        let strategy = LinAlgStrategy::new(Gf256::default(), 10).unwrap();
        let msg = [7u8, 20, 255, 0, 1, 2, 3, 4, 5, 6];
        let codeword = strategy.encode_block(&msg);
        assert_eq!(codeword.len(), strategy.n());
        let valid: Vec<usize> = (0..strategy.n()).collect();
        assert_eq!(strategy.decode_block(&codeword, &valid).unwrap(), msg);
    }

    #[test]
    fn encode_is_systematic() {
        let strategy = LinAlgStrategy::new(Gf256::default(), 10).unwrap();
        let msg = [7u8, 20, 255, 0, 1, 2, 3, 4, 5, 6];
        let codeword = strategy.encode_block(&msg);
        assert_eq!(&codeword[..10], &msg[..]);
    }

    #[test]
    fn decode_tolerates_missing_symbols() {
        let strategy = LinAlgStrategy::new(Gf256::default(), 10).unwrap();
        let msg = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let codeword = strategy.encode_block(&msg);
        let valid: Vec<usize> = (30..strategy.n()).collect();
        assert_eq!(strategy.decode_block(&codeword, &valid).unwrap(), msg);
    }

    #[test]
    fn repeated_construction_is_deterministic() {
        let msg = [9u8, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let a = LinAlgStrategy::new(Gf256::default(), 10).unwrap().encode_block(&msg);
        let b = LinAlgStrategy::new(Gf256::default(), 10).unwrap().encode_block(&msg);
        assert_eq!(a, b);
    }
}
