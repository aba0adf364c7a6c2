use axum::http::{HeaderMap, header::AUTHORIZATION};

use chirpy_core::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token carried in `Authorization: Bearer <token>`.
///
/// The prefix is matched exactly, case included, and removed once. Whatever
/// follows it is returned verbatim.
///
/// # Errors
///
/// - [`AuthError::TokenMissing`] if there is no `Authorization` header
/// - [`AuthError::TokenMalformed`] if the value is not visible ASCII, lacks the
///   prefix, or has nothing after it
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::TokenMissing)?;
    let value = value.to_str().map_err(|_| AuthError::TokenMalformed)?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::TokenMalformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        let h = headers("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&h).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            extract_bearer_token(&HeaderMap::new()),
            Err(AuthError::TokenMissing)
        ));
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        for value in ["Basic dXNlcjpwYXNz", "bearer abc", "Token abc", "abc"] {
            assert!(
                matches!(extract_bearer_token(&headers(value)), Err(AuthError::TokenMalformed)),
                "{value}"
            );
        }
    }

    #[test]
    fn test_empty_token_is_malformed() {
        assert!(matches!(
            extract_bearer_token(&headers("Bearer ")),
            Err(AuthError::TokenMalformed)
        ));
    }

    #[test]
    fn test_prefix_removed_only_once() {
        let h = headers("Bearer Bearer abc");
        assert_eq!(extract_bearer_token(&h).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_prefix_in_middle_is_malformed() {
        assert!(matches!(
            extract_bearer_token(&headers("xBearer abc")),
            Err(AuthError::TokenMalformed)
        ));
    }

    #[test]
    fn test_non_ascii_value_is_malformed() {
        let mut h = HeaderMap::new();
        h.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert!(matches!(extract_bearer_token(&h), Err(AuthError::TokenMalformed)));
    }
}
