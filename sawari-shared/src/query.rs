//! Query-string codec for the navigation parameters carried between views
//! (`from`, `to`, `date`, `busId`, `seat`). Values are free text; the only
//! transformation applied is standard percent-encoding.

/// Percent-encode a single component. Unreserved characters pass through,
/// everything else is emitted as %XX per UTF-8 byte.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

/// Decode a percent-encoded component. Tolerant: malformed escapes are kept
/// literally, `+` decodes to a space.
pub fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => {
                    let hi = char::from(hex[0]).to_digit(16).unwrap_or(0) as u8;
                    let lo = char::from(hex[1]).to_digit(16).unwrap_or(0) as u8;
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Build a query string from key/value pairs, in order.
pub fn build(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into decoded key/value pairs. A leading `?` is
/// tolerated, pairs without `=` decode to an empty value.
pub fn parse(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Look up a single decoded parameter.
pub fn get(raw: &str, key: &str) -> Option<String> {
    parse(raw)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value)
}
