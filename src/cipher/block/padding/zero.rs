use {
    super::Padding,
    crate::error::Result,
};

/// Zero padding appends `0x00` bytes to reach a multiple of the block size,
/// and removes them on `unpad` by stripping trailing zero bytes.
///
/// Unlike [`Pkcs7`](super::Pkcs7), zero padding cannot tell padding apart from
/// a message that genuinely ends in zero bytes, and it adds no padding at all
/// when the input is already block-aligned. It exists here because the wire
/// format this crate supports documents it as an alternative, not because it
/// is recommended for new use.
pub struct ZeroPadding;

impl Padding for ZeroPadding {
    fn pad(&self, data: &[u8], n: usize) -> Vec<u8> {
        let pad_len = (n - (data.len() % n)) % n;
        let mut out = data.to_vec();
        out.extend(std::iter::repeat(0u8).take(pad_len));
        out
    }

    fn unpad(&self, data: &[u8], _n: usize) -> Result<Vec<u8>> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(data[..end].to_vec())
    }
}
