//! Session cookie helpers.
//!
//! The token pair issued by the auth provider travels in two HTTP-only
//! cookies. The session gate rotates them on refresh; the logout handler
//! clears them.

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::Cookie;

use cellhub_backend::Session;

/// Access-token cookie name.
pub const ACCESS_COOKIE: &str = "cellhub_access";
/// Refresh-token cookie name.
pub const REFRESH_COOKIE: &str = "cellhub_refresh";

const DEFAULT_ACCESS_SECONDS: i64 = 3600;
const REFRESH_SECONDS: i64 = 30 * 86400;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn build_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> Option<HeaderValue> {
    let built = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(cookie_secure())
        .build();
    HeaderValue::from_str(&built.to_string()).ok()
}

/// Set both session cookies from a provider-issued token pair.
pub fn set_session_cookies(headers: &mut HeaderMap, session: &Session) {
    let access_seconds = session.expires_in.unwrap_or(DEFAULT_ACCESS_SECONDS);
    if let Some(value) = build_cookie(ACCESS_COOKIE, &session.access_token, access_seconds) {
        headers.append(header::SET_COOKIE, value);
    }
    if let Some(value) = build_cookie(REFRESH_COOKIE, &session.refresh_token, REFRESH_SECONDS) {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Clear both session cookies on the response.
pub fn clear_session_cookies(headers: &mut HeaderMap) {
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        if let Some(value) = build_cookie(name, "", 0) {
            headers.append(header::SET_COOKIE, value);
        }
    }
}

/// Extract the access token from cookies (preferred) or a Bearer header.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    // Bearer fallback for non-browser clients.
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

/// Extract the refresh token from cookies.
pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(parsed) = Cookie::parse(piece.trim().to_string()) {
                    if parsed.name() == name {
                        return Some(parsed.value().to_string());
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_access_from_cookie() {
        let headers = headers_with_cookie("cellhub_access=tok-a; cellhub_refresh=tok-r");
        assert_eq!(extract_access_token(&headers).as_deref(), Some("tok-a"));
        assert_eq!(extract_refresh_token(&headers).as_deref(), Some("tok-r"));
    }

    #[test]
    fn test_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer tok-b"),
        );
        assert_eq!(extract_access_token(&headers).as_deref(), Some("tok-b"));
    }

    #[test]
    fn test_set_session_cookies_appends_both() {
        let session = Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            expires_in: Some(1800),
            user: None,
        };
        let mut headers = HeaderMap::new();
        set_session_cookies(&mut headers, &session);
        let values: Vec<_> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values[0].starts_with("cellhub_access=at"));
        assert!(values[0].contains("HttpOnly"));
        assert!(values[1].starts_with("cellhub_refresh=rt"));
    }
}
