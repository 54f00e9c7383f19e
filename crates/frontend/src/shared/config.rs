//! Build-time settings.
//!
//! Both values are read with `option_env!` when the WASM bundle is built:
//!
//! - `OHADA_AUTH_MODE`: `demo` (default) keeps authentication in-process,
//!   `remote` talks to the external auth service over HTTP.
//! - `OHADA_API_PORT`: port of the auth service on the page's host
//!   (default 3000).

pub const DEFAULT_API_PORT: u16 = 3000;

/// Simulated latency of wizard and form submissions, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Demo,
    Remote,
}

pub fn auth_mode() -> AuthMode {
    parse_auth_mode(option_env!("OHADA_AUTH_MODE"))
}

pub fn api_port() -> u16 {
    parse_api_port(option_env!("OHADA_API_PORT"))
}

fn parse_auth_mode(value: Option<&str>) -> AuthMode {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("remote") => AuthMode::Remote,
        _ => AuthMode::Demo,
    }
}

fn parse_api_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_defaults_to_demo() {
        assert_eq!(parse_auth_mode(None), AuthMode::Demo);
        assert_eq!(parse_auth_mode(Some("unknown")), AuthMode::Demo);
        assert_eq!(parse_auth_mode(Some(" Remote ")), AuthMode::Remote);
    }

    #[test]
    fn test_api_port() {
        assert_eq!(parse_api_port(None), 3000);
        assert_eq!(parse_api_port(Some("8080")), 8080);
        assert_eq!(parse_api_port(Some("http")), 3000);
    }
}
