use super::*;

// =============================================================
// Count response parsing
// =============================================================

#[test]
fn count_is_read_for_the_requested_path() {
    let body = r#"{"success":true,"commentCounts":{"/blog/first-post":4,"/blog/other":9}}"#;
    assert_eq!(count_for_path(body, "/blog/first-post"), Some(4));
}

#[test]
fn missing_path_yields_nothing() {
    let body = r#"{"success":true,"commentCounts":{"/blog/other":9}}"#;
    assert_eq!(count_for_path(body, "/blog/first-post"), None);
}

#[test]
fn rejected_request_yields_nothing() {
    let body = r#"{"success":false,"commentCounts":{"/blog/first-post":4}}"#;
    assert_eq!(count_for_path(body, "/blog/first-post"), None);
}

#[test]
fn absent_count_map_yields_nothing() {
    assert_eq!(count_for_path(r#"{"success":true}"#, "/blog/first-post"), None);
}

#[test]
fn malformed_body_yields_nothing() {
    assert_eq!(count_for_path("not json", "/blog/first-post"), None);
    assert_eq!(
        count_for_path(r#"{"success":true,"commentCounts":{"/p":-1}}"#, "/p"),
        None
    );
}
