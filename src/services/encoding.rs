use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
    pub had_errors: bool,
}

/// Decode a locale file's bytes to text.
///
/// A UTF-8 BOM wins outright. Otherwise valid UTF-8 is taken as is, and
/// anything else goes through detection; French files exported from older
/// editors are usually windows-1252.
pub fn decode(bytes: &[u8]) -> DecodedText {
    // BOM UTF-8 (EF BB BF)
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        let (text, had_errors) = UTF_8.decode_without_bom_handling(rest);
        if had_errors {
            tracing::warn!(encoding = "utf-8-sig", "locale file decoded with replacement characters");
        }
        return DecodedText {
            text: text.into_owned(),
            encoding: "utf-8-sig".into(),
            had_errors,
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_string(),
            encoding: "utf-8".into(),
            had_errors: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding: &'static Encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "locale file decoded with replacement characters");
    }

    DecodedText {
        text: text.into_owned(),
        encoding: encoding.name().to_lowercase(),
        had_errors,
    }
}
