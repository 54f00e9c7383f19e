//! URL helpers for the external auth service.

use super::config::api_port;

/// Base URL of the auth service: same protocol and host as the page, on
/// the configured port.
///
/// # Returns
/// - a URL like "http://localhost:3000"
/// - an empty string if no window is available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api_port())
}

/// `api_base()` followed by `path` (which should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
