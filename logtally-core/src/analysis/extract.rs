use crate::analysis::types::RequestLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// `… [timestamp] "METHOD /path HTTP/1.1" STATUS …`
///
/// The leading `.*` is greedy and the endpoint is lazy, so a path containing
/// `HTTP/1.1` is cut at the first ` HTTP/1.1"` that still lets the status match.
static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#".*\[.*\] "([A-Za-z0-9_]+) (.+?) HTTP/1\.1" ([0-9]+) .*"#)
        .expect("valid request line pattern")
});

static PLAIN_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}")
        .expect("valid plain timestamp pattern")
});

/// Extract method, endpoint and status from a request line.
///
/// Returns `None` for anything that does not look like a request; that is the
/// normal outcome for noise lines, not an error.
pub fn extract_request(line: &str) -> Option<RequestLine<'_>> {
    let caps = REQUEST_LINE.captures(line)?;
    let whole = caps.get(0)?.as_str();

    Some(RequestLine {
        method: caps.get(1)?.as_str(),
        endpoint: caps.get(2)?.as_str(),
        status_code: caps.get(3)?.as_str(),
        raw_timestamp: extract_bracketed_timestamp(whole),
    })
}

/// Text between the first `[` and the next `]`.
pub fn extract_bracketed_timestamp(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('[')?;
    let end = rest.find(']').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// First `YYYY-MM-DD HH:MM` substring of the line, wherever it appears.
pub fn extract_plain_timestamp(line: &str) -> Option<&str> {
    PLAIN_TIMESTAMP.find(line).map(|m| m.as_str())
}
