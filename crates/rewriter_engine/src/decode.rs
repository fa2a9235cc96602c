use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use engine_logging::engine_warn;

/// How far into the document to look for a `<meta charset>` declaration.
const META_PRESCAN_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    pub had_errors: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> meta charset
/// -> chardetng (hinted by the page's top-level domain).
///
/// Malformed sequences become U+FFFD; a page with a few broken bytes is still
/// worth rewriting.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>, url: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    if let Some(enc) = prescan_meta_charset(bytes) {
        return decode_with(bytes, enc);
    }

    let tld = url
        .and_then(|u| url::Url::parse(u).ok())
        .and_then(|u| u.host_str().map(str::to_string))
        .and_then(|host| host.rsplit('.').next().map(str::to_ascii_lowercase));
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(tld.as_deref().map(str::as_bytes), true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim_matches([' ', '"', '\'']).to_string())
    })
}

fn prescan_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_PRESCAN_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let label: String = head[start..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    Encoding::for_label(label.as_bytes())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    // A UTF-16 label cannot describe ASCII-compatible bytes.
    let enc = enc.output_encoding();
    let (text, actual, had_errors) = enc.decode(bytes);
    if had_errors {
        engine_warn!("page contained malformed {} sequences", actual.name());
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: actual.name().to_string(),
        had_errors,
    }
}
