//! Persisted representations of an encoded bit stream, and ratio reporting.
//!
//! Two interchangeable formats:
//!
//! - **Packed** ([`pack`]/[`unpack`]): byte-aligned payload preceded by a
//!   little-endian `u64` bit count, so trailing padding bits are never
//!   mistaken for data. This is the format to persist.
//! - **Bit text** ([`to_bit_text`]/[`from_bit_text`]): one ASCII `'0'` or
//!   `'1'` per bit, an 8x expansion over the packed form. A legacy/debug
//!   format kept for compatibility with tools that store the stream as
//!   readable text.

use bit_vec::BitVec;

use crate::error::{Error, Result};

/// Bytes taken by the bit-count header in the packed format.
const HEADER_LEN: usize = std::mem::size_of::<u64>();

/// Serializes a bit stream as a bit-count header followed by the packed
/// payload. The final payload byte is zero-padded.
///
/// ```rust
/// let mut bits = bit_vec::BitVec::new();
/// bits.push(true);
/// bits.push(false);
/// bits.push(true);
/// let packed = huffcode::pack(&bits);
/// assert_eq!(packed.len(), 8 + 1);
/// ```
pub fn pack(bits: &BitVec) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + (bits.len() + 7) / 8);
    out.extend_from_slice(&(bits.len() as u64).to_le_bytes());
    out.extend_from_slice(&bits.to_bytes());
    out
}

/// Reverses [`pack`]. Fails with [`Error::MalformedStream`] when the header
/// is missing or claims more bits than the payload holds.
///
/// ```rust
/// let bits = bit_vec::BitVec::from_elem(5, true);
/// let packed = huffcode::pack(&bits);
/// assert_eq!(huffcode::unpack(&packed).unwrap(), bits);
/// ```
pub fn unpack(data: &[u8]) -> Result<BitVec> {
    if data.len() < HEADER_LEN {
        return Err(Error::MalformedStream("missing bit-count header".into()));
    }
    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&data[..HEADER_LEN]);
    let bit_len = u64::from_le_bytes(header) as usize;

    let payload = &data[HEADER_LEN..];
    if bit_len > payload.len() * 8 {
        return Err(Error::MalformedStream(format!(
            "header claims {bit_len} bits but payload holds {}",
            payload.len() * 8
        )));
    }

    let mut bits = BitVec::from_bytes(payload);
    bits.truncate(bit_len);
    Ok(bits)
}

/// Renders a bit stream as ASCII `'0'`/`'1'` text.
///
/// ```rust
/// let mut bits = bit_vec::BitVec::new();
/// bits.push(true);
/// bits.push(false);
/// assert_eq!(huffcode::to_bit_text(&bits), "10");
/// ```
pub fn to_bit_text(bits: &BitVec) -> String {
    bits.iter().map(|bit| if bit { '1' } else { '0' }).collect()
}

/// Parses ASCII `'0'`/`'1'` text back into a bit stream. Any other
/// character fails with [`Error::MalformedStream`].
///
/// ```rust
/// let bits = huffcode::from_bit_text("0110").unwrap();
/// assert_eq!(bits.len(), 4);
/// ```
pub fn from_bit_text(text: &str) -> Result<BitVec> {
    let mut bits = BitVec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => {
                return Err(Error::MalformedStream(format!(
                    "invalid bit character {other:?}"
                )))
            }
        }
    }
    Ok(bits)
}

/// Compression ratio as defined for this codec: encoded bit count over the
/// *bit* size of the original, `encoded_bits / (original_bytes * 8)`.
///
/// Zero original bytes reports a ratio of `0.0`.
///
/// ```rust
/// assert_eq!(huffcode::compression_ratio(350, 100), 0.4375);
/// ```
pub fn compression_ratio(encoded_bits: usize, original_bytes: usize) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    encoded_bits as f64 / (original_bytes as f64 * 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trip() {
        let mut bits = BitVec::new();
        for i in 0..13 {
            bits.push(i % 3 == 0);
        }
        assert_eq!(unpack(&pack(&bits)).unwrap(), bits);
    }

    #[test]
    fn pack_unpack_empty_stream() {
        let bits = BitVec::new();
        assert_eq!(unpack(&pack(&bits)).unwrap(), bits);
    }

    #[test]
    fn unpack_rejects_short_buffer() {
        let err = unpack(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::MalformedStream(_)));
    }

    #[test]
    fn unpack_rejects_overlong_header_count() {
        let mut data = 64u64.to_le_bytes().to_vec();
        data.push(0xff); // only 8 bits of payload
        let err = unpack(&data).unwrap_err();
        assert!(matches!(err, Error::MalformedStream(_)));
    }

    #[test]
    fn bit_text_round_trip() {
        let text = "1011001";
        let bits = from_bit_text(text).unwrap();
        assert_eq!(to_bit_text(&bits), text);
    }

    #[test]
    fn bit_text_rejects_non_binary_characters() {
        let err = from_bit_text("0102").unwrap_err();
        assert!(matches!(err, Error::MalformedStream(_)));
    }

    #[test]
    fn ratio_matches_the_reference_formula() {
        assert_eq!(compression_ratio(350, 100), 0.4375);
    }

    #[test]
    fn ratio_of_nothing_is_zero() {
        assert_eq!(compression_ratio(0, 0), 0.0);
    }
}
