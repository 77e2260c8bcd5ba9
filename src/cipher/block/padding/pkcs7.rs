use {
    super::Padding,
    crate::error::{Error, Result},
    docext::docext,
};

/// PKCS#7 is a simple approach to padding.
///
/// If the message needs to be padded with $n$ bytes and the block size is $B$,
/// this padding scheme will append $n$ bytes with the value $n$. If $n = 0$,
/// then an entire block of padding is added, i.e. $B$ bytes with the value $B$.
/// This guarantees `unpad` can always locate the padding: the last byte names
/// its own length.
///
/// # Examples
///
/// ```ignore
/// let padded = Pkcs7.pad(b"hello", 8);
/// assert_eq!(padded, b"hello\x03\x03\x03");
/// ```
#[docext]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(&self, data: &[u8], n: usize) -> Vec<u8> {
        let pad_len = n - (data.len() % n);
        let mut out = data.to_vec();
        out.extend(std::iter::repeat(pad_len as u8).take(pad_len));
        out
    }

    fn unpad(&self, data: &[u8], n: usize) -> Result<Vec<u8>> {
        let pad_len = *data.last().ok_or(Error::BadPadding)? as usize;
        if pad_len == 0 || pad_len > n || pad_len > data.len() {
            return Err(Error::BadPadding);
        }
        let (rest, padding) = data.split_at(data.len() - pad_len);
        if padding.iter().any(|&b| b as usize != pad_len) {
            return Err(Error::BadPadding);
        }
        Ok(rest.to_vec())
    }
}
