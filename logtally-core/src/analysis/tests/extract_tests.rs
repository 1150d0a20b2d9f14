use crate::analysis::{
    RequestLine, extract_bracketed_timestamp, extract_plain_timestamp, extract_request,
};
use pretty_assertions::assert_eq;

const SCENARIO_A: &str =
    r#"127.0.0.1 - - [10/Oct/2023:13:55:36] "GET /api/users HTTP/1.1" 200 512"#;

#[test]
fn extracts_method_endpoint_and_status() {
    // Act
    let req = extract_request(SCENARIO_A);

    // Assert
    assert_eq!(
        req,
        Some(RequestLine {
            method: "GET",
            endpoint: "/api/users",
            status_code: "200",
            raw_timestamp: Some("10/Oct/2023:13:55:36"),
        })
    );
}

#[test]
fn keeps_query_string_in_endpoint() {
    let line = r#"10.0.0.1 - - [10/Oct/2023:13:55:36 +0000] "POST /api/items?page=2&sort=asc HTTP/1.1" 201 0"#;

    let req = extract_request(line).unwrap();

    assert_eq!(req.method, "POST");
    assert_eq!(req.endpoint, "/api/items?page=2&sort=asc");
    assert_eq!(req.status_code, "201");
    assert_eq!(req.raw_timestamp, Some("10/Oct/2023:13:55:36 +0000"));
}

#[test]
fn endpoint_stops_at_first_protocol_marker() {
    // Arrange
    let line = r#"h - - [t] "GET /a HTTP/1.1" 200 x HTTP/1.1" 404 y"#;

    // Act
    let req = extract_request(line).unwrap();

    // Assert
    assert_eq!(req.endpoint, "/a");
    assert_eq!(req.status_code, "200");
}

#[test]
fn endpoint_may_contain_protocol_text() {
    // The path's own `HTTP/1.1` is not preceded by a space, so it is not a marker.
    let line = r#"h - - [t] "GET /docs/HTTP/1.1/spec HTTP/1.1" 200 10"#;

    let req = extract_request(line).unwrap();

    assert_eq!(req.endpoint, "/docs/HTTP/1.1/spec");
}

#[test]
fn requires_bracketed_segment() {
    let line = r#"127.0.0.1 - - "GET /api/users HTTP/1.1" 200 512"#;

    assert_eq!(extract_request(line), None);
}

#[test]
fn requires_http_1_1() {
    let line = r#"127.0.0.1 - - [10/Oct/2023:13:55:36] "GET /api/users HTTP/2.0" 200 512"#;

    assert_eq!(extract_request(line), None);
}

#[test]
fn requires_text_after_status() {
    // No space after the status code.
    let line = r#"127.0.0.1 - - [10/Oct/2023:13:55:36] "GET /api/users HTTP/1.1" 200"#;

    assert_eq!(extract_request(line), None);
}

#[test]
fn rejects_noise_lines() {
    for line in ["", "   ", "server started", "[INFO] ready", "GET / HTTP/1.1"] {
        assert_eq!(extract_request(line), None, "line: {line:?}");
    }
}

#[test]
fn status_may_have_any_number_of_digits() {
    let line = r#"h - - [t] "GET /x HTTP/1.1" 9999 1"#;

    assert_eq!(extract_request(line).unwrap().status_code, "9999");
}

#[test]
fn bracketed_timestamp_is_first_bracket_pair() {
    assert_eq!(
        extract_bracketed_timestamp("a [one] b [two]"),
        Some("one")
    );
    assert_eq!(extract_bracketed_timestamp("no brackets"), None);
    assert_eq!(extract_bracketed_timestamp("open [only"), Some("only"));
}

#[test]
fn finds_plain_timestamp_anywhere() {
    assert_eq!(
        extract_plain_timestamp("2023-10-10 13:55:12 INFO started"),
        Some("2023-10-10 13:55")
    );
    assert_eq!(
        extract_plain_timestamp("job done at 2024-01-02 03:04"),
        Some("2024-01-02 03:04")
    );
}

#[test]
fn bracketed_access_log_timestamp_is_not_plain() {
    assert_eq!(extract_plain_timestamp(SCENARIO_A), None);
}

#[test]
fn plain_timestamp_takes_first_occurrence() {
    assert_eq!(
        extract_plain_timestamp("2023-01-01 00:00 then 2023-01-01 00:01"),
        Some("2023-01-01 00:00")
    );
}
