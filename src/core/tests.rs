use super::*;

#[test]
fn test_redact_auth_replaces_token() {
    assert_eq!(
        redact_auth("https://db.example.com/users.json?auth=secret"),
        "https://db.example.com/users.json?auth=<redacted>"
    );
    assert_eq!(
        redact_auth("https://db.example.com/users.json?shallow=true&auth=secret"),
        "https://db.example.com/users.json?shallow=true&auth=<redacted>"
    );
}

#[test]
fn test_redact_auth_leaves_other_urls_alone() {
    assert_eq!(
        redact_auth("https://db.example.com/users.json"),
        "https://db.example.com/users.json"
    );
    assert_eq!(
        redact_auth("https://db.example.com/users.json?author=alan"),
        "https://db.example.com/users.json?author=alan"
    );
}

#[test]
fn test_parse_error_response() {
    let error = parse_error_response(r#"{"error": "Permission denied"}"#).unwrap();
    assert_eq!(error.error, "Permission denied");
    assert_eq!(error.display_message(401), "Permission denied (code: 401)");

    assert!(parse_error_response(r#"{"name": "-Nabc"}"#).is_none());
    assert!(parse_error_response("").is_none());
}
