//! Output codecs: pure byte buffer to representation transformations.
//!
//! One [`Codec`] implementation per [`Format`], dispatched through
//! [`Format::codec`]. Codecs are stateless, deterministic, and never insert
//! line breaks of their own; wrapping is the caller's concern via
//! [`crate::wrap::LineWriter`]. Output length is a pure function of input
//! length and format.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};

use crate::config::Format;

/// A pure encoding of a byte buffer into its output representation.
pub trait Codec {
    /// Encode `buf`. Raw is the identity; everything else produces ASCII.
    fn encode(&self, buf: &[u8]) -> Vec<u8>;

    /// Whether the representation already ends in a visual line terminator.
    ///
    /// Consulted by the generator to decide if a trailing newline is owed
    /// when writing to an interactive terminal. No shipped codec carries
    /// one, but the decision point lives here rather than in orchestration.
    fn natural_terminator(&self) -> bool {
        false
    }
}

impl Format {
    /// The codec implementing this format.
    pub fn codec(&self) -> &'static dyn Codec {
        match self {
            Self::Base64 => &Base64Codec,
            Self::UrlBase64 => &UrlBase64Codec,
            Self::Raw => &RawCodec,
            Self::HexUpper => &HexUpperCodec,
            Self::HexLower => &HexLowerCodec,
            Self::UrlEncoded => &UrlEncodedCodec,
        }
    }
}

/// Standard-alphabet padded base64.
pub struct Base64Codec;

impl Codec for Base64Codec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        STANDARD.encode(buf).into_bytes()
    }
}

/// URL-safe-alphabet padded base64.
pub struct UrlBase64Codec;

impl Codec for UrlBase64Codec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        URL_SAFE.encode(buf).into_bytes()
    }
}

/// Identity codec: the bytes themselves.
pub struct RawCodec;

impl Codec for RawCodec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        buf.to_vec()
    }
}

/// Two lowercase hex digits per byte.
pub struct HexLowerCodec;

impl Codec for HexLowerCodec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        hex::encode(buf).into_bytes()
    }
}

/// Two uppercase hex digits per byte.
pub struct HexUpperCodec;

impl Codec for HexUpperCodec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        hex::encode_upper(buf).into_bytes()
    }
}

/// Percent-encoding over raw bytes.
///
/// Bytes in `[A-Za-z0-9_.~/-]` pass through; every other value, 0x00
/// included, becomes `%` plus two uppercase hex digits. Per-byte
/// classification, no tables, all 256 values are valid input.
pub struct UrlEncodedCodec;

const HEX_UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn url_passthrough(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b'~' | b'/')
}

impl Codec for UrlEncodedCodec {
    fn encode(&self, buf: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(buf.len());
        for &b in buf {
            if url_passthrough(b) {
                out.push(b);
            } else {
                out.push(b'%');
                out.push(HEX_UPPER_DIGITS[(b >> 4) as usize]);
                out.push(HEX_UPPER_DIGITS[(b & 0x0F) as usize]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_byte_values() -> Vec<u8> {
        (0..=255u8).collect()
    }

    #[test]
    fn test_hex_lower_round_trip() {
        let data = all_byte_values();
        let encoded = HexLowerCodec.encode(&data);
        assert_eq!(hex::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_upper_round_trip() {
        let data = all_byte_values();
        let encoded = HexUpperCodec.encode(&data);
        assert_eq!(hex::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_cases_differ_only_in_letter_case() {
        let data = all_byte_values();
        let lower = HexLowerCodec.encode(&data);
        let upper = HexUpperCodec.encode(&data);
        assert_eq!(lower.to_ascii_uppercase(), upper);
    }

    #[test]
    fn test_base64_round_trip() {
        let data = all_byte_values();
        let encoded = Base64Codec.encode(&data);
        assert_eq!(STANDARD.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_url_base64_round_trip_and_alphabet() {
        let data = all_byte_values();
        let encoded = UrlBase64Codec.encode(&data);
        assert_eq!(URL_SAFE.decode(&encoded).unwrap(), data);
        assert!(!encoded.contains(&b'+'));
        assert!(!encoded.contains(&b'/'));
    }

    #[test]
    fn test_base64_never_wraps() {
        let data = vec![0u8; 4096];
        assert!(!Base64Codec.encode(&data).contains(&b'\n'));
        assert!(!UrlBase64Codec.encode(&data).contains(&b'\n'));
    }

    #[test]
    fn test_raw_is_identity() {
        let data = all_byte_values();
        assert_eq!(RawCodec.encode(&data), data);
        assert!(!RawCodec.natural_terminator());
    }

    /// Decode `%XX` escapes back into bytes.
    fn percent_decode(encoded: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut it = encoded.iter();
        while let Some(&b) = it.next() {
            if b == b'%' {
                let hi = *it.next().unwrap() as char;
                let lo = *it.next().unwrap() as char;
                let hi = hi.to_digit(16).unwrap() as u8;
                let lo = lo.to_digit(16).unwrap() as u8;
                out.push((hi << 4) | lo);
            } else {
                out.push(b);
            }
        }
        out
    }

    #[test]
    fn test_url_encoded_round_trips_all_values() {
        let data = all_byte_values();
        let encoded = UrlEncodedCodec.encode(&data);
        assert_eq!(percent_decode(&encoded), data);
    }

    #[test]
    fn test_url_encoded_fixture() {
        // 0x2F is '/', unencoded; 0x41 is 'A', unencoded; 0x00 escapes.
        let encoded = UrlEncodedCodec.encode(&[0x2F, 0x41, 0x00]);
        assert_eq!(encoded, b"/A%00");
    }

    #[test]
    fn test_url_encoded_passthrough_set() {
        let plain = b"AZaz09_.~-/";
        assert_eq!(UrlEncodedCodec.encode(plain), plain);
    }

    #[test]
    fn test_url_encoded_escapes_use_uppercase_hex() {
        assert_eq!(UrlEncodedCodec.encode(&[0xAB]), b"%AB");
        assert_eq!(UrlEncodedCodec.encode(&[0x0F]), b"%0F");
        assert_eq!(UrlEncodedCodec.encode(&[b' ']), b"%20");
    }

    #[test]
    fn test_empty_input_empty_output() {
        for format in [
            Format::Base64,
            Format::UrlBase64,
            Format::Raw,
            Format::HexUpper,
            Format::HexLower,
            Format::UrlEncoded,
        ] {
            assert!(format.codec().encode(&[]).is_empty());
        }
    }

    #[test]
    fn test_no_codec_claims_natural_terminator() {
        for format in [
            Format::Base64,
            Format::UrlBase64,
            Format::Raw,
            Format::HexUpper,
            Format::HexLower,
            Format::UrlEncoded,
        ] {
            assert!(!format.codec().natural_terminator());
        }
    }
}
