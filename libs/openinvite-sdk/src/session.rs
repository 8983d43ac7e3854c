//! Session cookie handling.

use secrecy::{ExposeSecret, SecretString};
use url::form_urlencoded;

/// Name of the Better Auth session cookie the backend authenticates with.
pub const SESSION_COOKIE_NAME: &str = "__Secure-better-auth.session_token";

/// Session token sent with every authenticated request.
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Build a token from either the bare token value or a full cookie
    /// header that contains the session cookie.
    pub fn from_raw(raw: &str) -> Self {
        let value = extract_from_cookie(raw).unwrap_or_else(|| raw.trim().to_string());
        Self(SecretString::new(value.into_boxed_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Value for the `cookie` request header.
    pub(crate) fn cookie_header(&self) -> String {
        let encoded: String =
            form_urlencoded::byte_serialize(self.0.expose_secret().as_bytes()).collect();
        format!("{SESSION_COOKIE_NAME}={encoded}")
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Extract the session token from a cookie header.
pub fn extract_from_cookie(cookie_header: &str) -> Option<String> {
    let prefix = format!("{SESSION_COOKIE_NAME}=");
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(prefix.as_str()) {
            return Some(urlencoding_decode(value).unwrap_or_else(|_| value.to_string()));
        }
    }
    None
}

/// Simple URL decoding (handles %XX sequences).
fn urlencoding_decode(s: &str) -> Result<String, ()> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.bytes();

    while let Some(b) = chars.next() {
        if b == b'%' {
            let hi = chars.next().ok_or(())?;
            let lo = chars.next().ok_or(())?;
            let hex = [hi, lo];
            let hex = std::str::from_utf8(&hex).map_err(|_| ())?;
            bytes.push(u8::from_str_radix(hex, 16).map_err(|_| ())?);
            continue;
        }
        bytes.push(b);
    }

    String::from_utf8(bytes).map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bare_token() {
        let token = SessionToken::from_raw("  abc123  ");
        assert_eq!(
            token.cookie_header(),
            "__Secure-better-auth.session_token=abc123"
        );
    }

    #[test]
    fn test_from_raw_cookie_header() {
        let token = SessionToken::from_raw(
            "theme=dark; __Secure-better-auth.session_token=abc%2Edef; other=1",
        );
        assert_eq!(
            token.cookie_header(),
            "__Secure-better-auth.session_token=abc.def"
        );
    }

    #[test]
    fn test_cookie_header_encodes_signature_chars() {
        let token = SessionToken::from_raw("tok.sig+/=");
        assert_eq!(
            token.cookie_header(),
            "__Secure-better-auth.session_token=tok.sig%2B%2F%3D"
        );
    }

    #[test]
    fn test_cookie_header_round_trips_through_extract() {
        let token = SessionToken::from_raw("a/b=c;d");
        let header = token.cookie_header();
        assert_eq!(
            header,
            "__Secure-better-auth.session_token=a%2Fb%3Dc%3Bd"
        );
        assert_eq!(extract_from_cookie(&header), Some("a/b=c;d".to_string()));
    }

    #[test]
    fn test_extract_from_cookie_not_found() {
        assert_eq!(extract_from_cookie("session=abc; other=xyz"), None);
    }

    #[test]
    fn test_extract_from_cookie_bad_escape_keeps_raw() {
        let cookie = "__Secure-better-auth.session_token=abc%zz";
        assert_eq!(extract_from_cookie(cookie), Some("abc%zz".to_string()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = SessionToken::from_raw("secret");
        assert_eq!(format!("{token:?}"), "SessionToken([REDACTED])");
    }

    #[test]
    fn test_is_empty() {
        assert!(SessionToken::from_raw("   ").is_empty());
        assert!(!SessionToken::from_raw("x").is_empty());
    }
}
