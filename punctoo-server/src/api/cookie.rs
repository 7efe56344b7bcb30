//! Device token cookie

use http::HeaderMap;
use http::header::COOKIE;

const ONE_YEAR_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Set-Cookie builder for the device token
pub struct DeviceCookie<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub max_age_seconds: i64,
    pub secure: bool,
}

impl<'a> DeviceCookie<'a> {
    /// Cookie valid for one year
    pub fn new(name: &'a str, value: &'a str, secure: bool) -> Self {
        Self {
            name,
            value,
            max_age_seconds: ONE_YEAR_SECONDS,
            secure,
        }
    }

    /// Build the Set-Cookie header value
    pub fn to_header_value(&self) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, self.value),
            format!("Max-Age={}", self.max_age_seconds),
            "Path=/".to_string(),
            "HttpOnly".to_string(),
            "SameSite=Lax".to_string(),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }
}

/// Extract the device token from request cookies
///
/// Browsers may split cookies over several `Cookie` headers; all are searched.
pub fn device_token(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
