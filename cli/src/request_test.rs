use super::*;

#[test]
fn content_type_defaults_to_json() {
    let headers = merge_headers(&[]).unwrap();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.len(), 1);
}

#[test]
fn caller_headers_override_content_type() {
    let headers = merge_headers(&["content-type: text/plain".into(), "X-Trace:abc".into()]).unwrap();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(headers.get("x-trace").unwrap(), "abc");
}

#[test]
fn header_without_separator_is_rejected() {
    let err = merge_headers(&["Authorization Bearer x".into()]).unwrap_err();
    assert!(matches!(err, CliError::InvalidHeader(ref h) if h == "Authorization Bearer x"));
}

#[test]
fn header_value_may_contain_colons() {
    let (name, value) = parse_header("Referer: http://localhost:3000/").unwrap();
    assert_eq!(name.as_str(), "referer");
    assert_eq!(value, "http://localhost:3000/");
}

#[test]
fn body_must_be_json() {
    assert!(parse_body(r#"{"a":1}"#).is_ok());
    assert!(matches!(parse_body("not json"), Err(CliError::InvalidJson(_))));
}

#[test]
fn json_response_is_pretty_printed() {
    assert_eq!(render_body(r#"{"a":[1,2]}"#), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn non_json_response_is_returned_raw() {
    assert_eq!(render_body("plain text"), "plain text");
    assert_eq!(render_body(""), "");
}

#[test]
fn status_error_message() {
    let err = CliError::Status(reqwest::StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
}

#[tokio::test]
async fn unknown_method_is_rejected_before_sending() {
    let spec = RequestSpec {
        url: "http://127.0.0.1:1/".into(),
        method: "NOT A METHOD".into(),
        headers: Vec::new(),
        body: None,
        timeout: Duration::from_secs(1),
    };
    assert!(matches!(run(spec).await, Err(CliError::InvalidMethod(_))));
}
