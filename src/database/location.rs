use super::config::{DatabaseConfig, FIREBASE_API_JSON_EXTENSION};
use super::models::QueryParams;
use url::form_urlencoded;

/// Trims `path` and makes sure a non-empty path starts with `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// `<base><path>[.json][?name=value&...][&auth=<token>]`
pub(crate) fn build_url(config: &DatabaseConfig, path: &str, query: &QueryParams) -> String {
    let mut url = format!("{}{}", config.base_url, normalize_path(path));

    if config.json_suffix {
        url.push_str(FIREBASE_API_JSON_EXTENSION);
    }

    let mut separator = '?';
    for (name, value) in query.iter() {
        url.push(separator);
        url.push_str(name);
        url.push('=');
        url.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        separator = '&';
    }

    if let Some(token) = &config.auth {
        url.push(separator);
        url.push_str("auth=");
        url.push_str(token);
    }

    url
}
