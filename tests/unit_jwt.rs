use chirpy::chirpy_auth::jwt::{issue_access_token, verify_access_token};
use chirpy::chirpy_auth::{create_access_token, validate_access_token};
use chirpy::chirpy_config::JwtConfig;
use chirpy::chirpy_core::AuthError;
use chrono::Duration;
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 60 * 24 * 3600,
    }
}

#[test]
fn test_issue_and_verify_with_config() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = issue_access_token(user_id, &jwt_config).unwrap();

    assert!(!token.is_empty());
    assert_eq!(verify_access_token(&token, &jwt_config).unwrap(), user_id);
}

#[test]
fn test_verify_with_different_secret_fails() {
    let jwt_config = get_test_jwt_config();
    let token = issue_access_token(Uuid::new_v4(), &jwt_config).unwrap();

    let other = JwtConfig {
        secret: "different_secret".to_string(),
        ..get_test_jwt_config()
    };

    assert!(matches!(
        verify_access_token(&token, &other),
        Err(AuthError::InvalidSignature)
    ));
}

#[test]
fn test_tampered_token_fails() {
    let jwt_config = get_test_jwt_config();
    let token = issue_access_token(Uuid::new_v4(), &jwt_config).unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = issue_access_token(Uuid::new_v4(), &jwt_config).unwrap();
    let forged_payload = forged.split('.').nth(1).unwrap();
    parts[1] = forged_payload;
    let tampered = parts.join(".");

    assert!(matches!(
        verify_access_token(&tampered, &jwt_config),
        Err(AuthError::InvalidSignature)
    ));
}

#[test]
fn test_verify_garbage_token_fails() {
    let jwt_config = get_test_jwt_config();

    for token in ["", "invalid.token.here", "not-even-a-jwt"] {
        assert!(verify_access_token(token, &jwt_config).is_err(), "{token:?}");
    }
}

#[test]
fn test_token_expires_after_ttl() {
    let secret = b"test_secret_key_for_testing_purposes";
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, secret, Duration::seconds(2)).unwrap();
    assert_eq!(validate_access_token(&token, secret).unwrap(), user_id);

    std::thread::sleep(std::time::Duration::from_secs(3));

    assert!(matches!(
        validate_access_token(&token, secret),
        Err(AuthError::TokenExpired)
    ));
}

#[test]
fn test_zero_access_lifetime_is_expired_immediately() {
    let jwt_config = JwtConfig {
        access_token_expiry: 0,
        ..get_test_jwt_config()
    };
    let token = issue_access_token(Uuid::new_v4(), &jwt_config).unwrap();

    assert!(matches!(
        verify_access_token(&token, &jwt_config),
        Err(AuthError::TokenExpired)
    ));
}
