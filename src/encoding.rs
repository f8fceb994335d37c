//! Character encoding detection for saved profile pages.
//!
//! Pages handed over by the browser layer are usually UTF-8, but pages saved
//! to disk by other tools may carry a BOM or a legacy charset declaration.
//! This module picks the encoding and decodes to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and the `http-equiv` content-type form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("META_CHARSET_RE regex")
});

/// Detect the character encoding of an HTML byte buffer.
///
/// Precedence: byte-order mark, then the first charset declaration in the
/// leading bytes, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Return the charset label declared in the document head, if any.
fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing, so a damaged page
/// still yields whatever fields survive.
///
/// # Examples
///
/// ```
/// use profile_lens::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><h1>Jos\xE9 Garc\xEDa</h1>";
/// assert!(decode_html(html).contains("José García"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
