//! Decoding raw input bytes to text using chardetng and `encoding_rs`.

use chardetng::EncodingDetector;
use simdutf8::basic::from_utf8;
use std::borrow::Cow;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (EF BB BF).
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Decoded text and whether it had to be transcoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    pub transcoded: bool,
}

/// Decode bytes to UTF-8 text.
///
/// A UTF-8 BOM is dropped. UTF-16 input with a BOM and legacy encodings
/// guessed by chardetng (Windows-1252, Windows-1251, GBK, ...) are transcoded.
pub fn decode(data: &[u8]) -> Decoded<'_> {
    // UTF-16 BOMs first, chardetng does not handle them.
    if data.starts_with(&[0xFF, 0xFE]) {
        return transcoded(encoding_rs::UTF_16LE.decode(data).0);
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        return transcoded(encoding_rs::UTF_16BE.decode(data).0);
    }

    let data = skip_bom(data);
    if let Ok(text) = from_utf8(data) {
        return Decoded {
            text: Cow::Borrowed(text),
            transcoded: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, true);
    log::warn!("input is not UTF-8, decoding as {}", encoding.name());

    transcoded(encoding.decode(data).0)
}

fn transcoded(text: Cow<'_, str>) -> Decoded<'_> {
    Decoded {
        text: Cow::Owned(text.into_owned()),
        transcoded: true,
    }
}
