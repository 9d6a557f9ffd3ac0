//! Character decoding for exported task files.
//!
//! Exports are read as UTF-8. Only bytes that are not valid UTF-8 consult a
//! legacy charset stamped in a `<meta>` tag, decoded through `encoding_rs`;
//! without one, invalid byte sequences are dropped. Decoding never fails.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Number of leading bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the declared character encoding of an HTML file.
///
/// Looks for, in order, `<meta charset>` and `<meta http-equiv="Content-Type">`
/// within the first 1024 bytes. Unknown labels and missing declarations fall
/// back to UTF-8, and a declared UTF-16 is read as UTF-8 as browsers do.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(&head_str))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode UTF-8, silently dropping every invalid byte sequence.
#[must_use]
pub fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                out.push_str(&String::from_utf8_lossy(valid));
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at the very end of the input.
                    None => return out,
                }
            }
        }
    }
}

/// Decode raw file bytes into a string for parsing.
///
/// Valid UTF-8 is taken as is whatever the document declares.
///
/// # Examples
///
/// ```
/// use task_index::encoding::decode_html;
///
/// let html = b"<dt>Status</dt><dd>ok\xFF</dd>";
/// assert_eq!(decode_html(html), "<dt>Status</dt><dd>ok</dd>");
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let encoding = detect_encoding(bytes);

    if encoding == UTF_8 {
        return decode_utf8_ignoring_invalid(bytes);
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_windows1252_from_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn declared_utf16_is_read_as_utf8() {
        let html = br#"<meta charset="utf-16">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn invalid_utf8_bytes_are_dropped() {
        let decoded = decode_utf8_ignoring_invalid(b"Task \xFF\xFEID");
        assert_eq!(decoded, "Task ID");
    }

    #[test]
    fn truncated_trailing_sequence_is_dropped() {
        // First two bytes of a three-byte sequence.
        let decoded = decode_utf8_ignoring_invalid(b"ok\xE2\x82");
        assert_eq!(decoded, "ok");
    }

    #[test]
    fn valid_multibyte_text_survives() {
        let decoded = decode_utf8_ignoring_invalid("Größe: 中文".as_bytes());
        assert_eq!(decoded, "Größe: 中文");
    }

    #[test]
    fn legacy_charset_is_transcoded() {
        let html = b"<meta charset=\"ISO-8859-1\"><dd>Caf\xE9</dd>";
        assert!(decode_html(html).contains("Café"));
    }

    #[test]
    fn valid_utf8_ignores_declared_legacy_charset() {
        let html = "<meta charset=\"iso-8859-1\"><dd>Café</dd>".as_bytes();
        assert_eq!(decode_html(html), "<meta charset=\"iso-8859-1\"><dd>Café</dd>");
    }
}
