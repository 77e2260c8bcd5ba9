//! TLV wire framing: `"CFP1"` magic followed by a sequence of tagged records.
//!
//! Every record is `<tag: u8><length: u32 LE><value: length bytes>`. Only
//! [`Tag::Checksum`], [`Tag::Param`], and [`Tag::Data`] carry information;
//! [`Tag::CodecBegin`] and [`Tag::CodecEnd`] are empty markers that must
//! still parse cleanly.

use crate::{
    codec::Meta,
    error::{Error, Result},
};

const MAGIC: &[u8; 4] = b"CFP1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    CodecBegin = 0x01,
    Checksum = 0x02,
    Param = 0x03,
    CodecEnd = 0x04,
    Data = 0x05,
}

impl Tag {
    fn from_byte(b: u8) -> Option<Tag> {
        match b {
            0x01 => Some(Tag::CodecBegin),
            0x02 => Some(Tag::Checksum),
            0x03 => Some(Tag::Param),
            0x04 => Some(Tag::CodecEnd),
            0x05 => Some(Tag::Data),
            _ => None,
        }
    }
}

fn write_record(out: &mut Vec<u8>, tag: Tag, value: &[u8]) {
    out.push(tag as u8);
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
}

/// One parsed frame: the checksum it carried, its meta in PARAM emission
/// order, and its payload.
pub struct ParsedFrame {
    pub checksum: [u8; 4],
    pub meta: Meta,
    pub payload: Vec<u8>,
}

/// Serializes `meta` (in insertion order) and `payload` into a complete
/// frame, given the already-computed 4-byte checksum.
pub fn encode_frame(checksum: &[u8], meta: &Meta, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    write_record(&mut out, Tag::CodecBegin, &[]);
    write_record(&mut out, Tag::Checksum, checksum);
    for (key, value) in meta {
        let mut param = Vec::with_capacity(key.len() + 1 + value.len());
        param.extend_from_slice(key.as_bytes());
        param.push(0);
        param.extend_from_slice(value);
        write_record(&mut out, Tag::Param, &param);
    }
    write_record(&mut out, Tag::Data, payload);
    write_record(&mut out, Tag::CodecEnd, &[]);
    out
}

/// Parses a frame, restoring `meta` in the order its PARAM records appeared.
///
/// Fails with [`Error::BadMagic`] if `frame` doesn't start with `CFP1`, or
/// [`Error::IncompleteFrame`] if CHECKSUM or DATA is missing.
pub fn decode_frame(frame: &[u8]) -> Result<ParsedFrame> {
    if frame.len() < 4 || &frame[..4] != MAGIC {
        return Err(Error::BadMagic);
    }

    let mut pos = 4;
    let mut checksum: Option<[u8; 4]> = None;
    let mut meta = Meta::new();
    let mut payload: Option<Vec<u8>> = None;

    while pos < frame.len() {
        let tag_byte = frame[pos];
        pos += 1;
        let len_bytes: [u8; 4] =
            frame.get(pos..pos + 4).ok_or(Error::IncompleteFrame("record length"))?.try_into().unwrap();
        pos += 4;
        let len = u32::from_le_bytes(len_bytes) as usize;
        let value = frame.get(pos..pos + len).ok_or(Error::IncompleteFrame("record value"))?;
        pos += len;

        match Tag::from_byte(tag_byte) {
            Some(Tag::CodecBegin) | Some(Tag::CodecEnd) => {}
            Some(Tag::Checksum) => {
                let arr: [u8; 4] = value.try_into().map_err(|_| Error::IncompleteFrame("checksum"))?;
                checksum = Some(arr);
            }
            Some(Tag::Param) => {
                let nul = value.iter().position(|&b| b == 0).ok_or(Error::IncompleteFrame("param"))?;
                let key = String::from_utf8_lossy(&value[..nul]).into_owned();
                meta.insert(key, value[nul + 1..].to_vec());
            }
            Some(Tag::Data) => payload = Some(value.to_vec()),
            None => {}
        }
    }

    Ok(ParsedFrame {
        checksum: checksum.ok_or(Error::IncompleteFrame("checksum"))?,
        meta,
        payload: payload.ok_or(Error::IncompleteFrame("data"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_meta_and_payload() {
        let mut meta = Meta::new();
        meta.insert("iv".to_string(), vec![1, 2, 3]);
        meta.insert("msg_length".to_string(), vec![4, 5, 6, 7]);
        let frame = encode_frame(&[0xaa, 0xbb, 0xcc, 0xdd], &meta, b"payload bytes");
        assert_eq!(&frame[..4], MAGIC);

        let parsed = decode_frame(&frame).unwrap();
        assert_eq!(parsed.checksum, [0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(parsed.payload, b"payload bytes");
        assert_eq!(parsed.meta.keys().collect::<Vec<_>>(), vec!["iv", "msg_length"]);
        assert_eq!(parsed.meta["iv"], vec![1, 2, 3]);
    }

    #[test]
    fn rejects_missing_magic() {
        assert_eq!(decode_frame(b"XXXX").unwrap_err(), Error::BadMagic);
    }

    #[test]
    fn rejects_missing_checksum() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        write_record(&mut out, Tag::Data, b"x");
        assert_eq!(decode_frame(&out).unwrap_err(), Error::IncompleteFrame("checksum"));
    }

    #[test]
    fn rejects_missing_data() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        write_record(&mut out, Tag::Checksum, &[0, 0, 0, 0]);
        assert_eq!(decode_frame(&out).unwrap_err(), Error::IncompleteFrame("data"));
    }

    #[test]
    fn empty_meta_round_trips() {
        let frame = encode_frame(&[1, 2, 3, 4], &Meta::new(), b"");
        let parsed = decode_frame(&frame).unwrap();
        assert!(parsed.meta.is_empty());
        assert!(parsed.payload.is_empty());
    }
}
