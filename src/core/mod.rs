pub mod middleware;

use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Error envelope returned by the Realtime Database REST API,
/// e.g. `{"error": "Permission denied"}`.
#[derive(Debug, Deserialize)]
pub struct DatabaseErrorResponse {
    pub error: String,
}

impl DatabaseErrorResponse {
    pub fn display_message(&self, code: u16) -> String {
        format!("{} (code: {})", self.error, code)
    }
}

/// Extracts the error message from a raw response body, if it carries one.
pub fn parse_error_response(raw_body: &str) -> Option<DatabaseErrorResponse> {
    serde_json::from_str::<DatabaseErrorResponse>(raw_body).ok()
}

/// Drops the request URL (and with it any `auth=` token) that `reqwest` embeds in
/// its errors.
pub fn strip_url(error: reqwest_middleware::Error) -> reqwest_middleware::Error {
    match error {
        reqwest_middleware::Error::Reqwest(e) => reqwest_middleware::Error::Reqwest(e.without_url()),
        other => other,
    }
}

/// Replaces the value of the `auth` query parameter so tokens never reach logs
/// or error messages.
pub fn redact_auth(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("auth=") {
                "auth=<redacted>"
            } else {
                pair
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}
