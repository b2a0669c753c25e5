//! Identifier encoding for path and query parameters.
//!
//! Identifiers (`aasIdentifier`, `submodelIdentifier`, ...) travel as
//! unpadded base64url.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode an identifier into the URL-safe token format.
pub fn b64url(id: &str) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a token produced by [`b64url`]; `None` if it is not valid.
pub fn b64url_decode(token: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim_end_matches('=')).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_is_url_safe_and_unpadded() {
        let token = b64url("https://example.com/ids/aas/1?x=1");
        assert!(!token.contains('='));
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert_eq!(
            b64url_decode(&token).as_deref(),
            Some("https://example.com/ids/aas/1?x=1")
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(b64url_decode("@@@"), None);
    }
}
