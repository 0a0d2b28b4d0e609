//! REST helper for the comment service's count endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an `Option` instead of an error type: a failed or malformed
//! count response leaves the trigger button's default label in place, which
//! is the correct degraded behavior for an optional enhancement. Failures
//! are logged and otherwise absorbed here.

#[cfg(test)]
#[path = "net_test.rs"]
mod net_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::consts::COUNT_ENDPOINT;

/// Shape of the count endpoint's response body.
#[derive(Deserialize)]
struct CountResponse {
    success: bool,
    #[serde(rename = "commentCounts", default)]
    comment_counts: HashMap<String, u64>,
}

/// Fetch the number of comments recorded for the page at `path`.
///
/// Returns `None` when the endpoint is unreachable, answers with an error
/// status, rejects the request, or has no entry for the path.
pub async fn fetch_comment_count(path: &str) -> Option<u64> {
    let body = serde_json::json!({ "paths": [path] });

    let request = match gloo_net::http::Request::post(COUNT_ENDPOINT).json(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("could not build comment count request: {e}");
            return None;
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("comment count request failed: {e}");
            return None;
        }
    };
    let status = response.status();
    if !(200..300).contains(&status) {
        log::warn!("comment count request returned {status}");
        return None;
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("could not read comment count response: {e}");
            return None;
        }
    };

    count_for_path(&text, path)
}

/// Pull the count for `path` out of a raw response body.
fn count_for_path(body: &str, path: &str) -> Option<u64> {
    let parsed: CountResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("malformed comment count response: {e}");
            return None;
        }
    };
    if !parsed.success {
        log::warn!("comment service rejected the count request");
        return None;
    }
    parsed.comment_counts.get(path).copied()
}
