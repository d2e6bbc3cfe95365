use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

const TEST_SECRET: &str = "supersecretjwtsecretforunittesting123";

fn set_env_vars() {
    unsafe {
        env::set_var("SERVER_PORT", "8080");
        env::set_var("SERVER_BODY_LIMIT", "10");
        env::set_var("SERVER_TIMEOUT", "30");
        env::set_var("DATABASE_URL", "postgres://localhost:5432/db");
        env::set_var("AUTH_JWT_SECRET", TEST_SECRET);
    }
}

fn issue_token(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_validate_token_success() {
    set_env_vars();
    let my_claims = Claims {
        sub: "1".to_string(),
        email: Some("admin@admin.com".to_string()),
        email_verified: true,
        exp: 9999999999, // far future
    };

    let token = issue_token(&my_claims, TEST_SECRET);

    let claims = validate_token(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, my_claims.sub);
    assert_eq!(claims.email, my_claims.email);
    assert!(claims.email_verified);
}

#[test]
fn test_validate_token_expired() {
    set_env_vars();
    let my_claims = Claims {
        sub: "1".to_string(),
        email: Some("admin@admin.com".to_string()),
        email_verified: true,
        exp: 1, // past
    };

    let token = issue_token(&my_claims, TEST_SECRET);

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_token_invalid_signature() {
    set_env_vars();
    let my_claims = Claims {
        sub: "1".to_string(),
        email: Some("admin@admin.com".to_string()),
        email_verified: true,
        exp: 9999999999,
    };

    let token = issue_token(&my_claims, "wrongsecret");

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_email_verified_defaults_to_false() {
    let claims: Claims = serde_json::from_value(serde_json::json!({
        "sub": "1",
        "email": "admin@admin.com",
        "exp": 9999999999u64,
    }))
    .unwrap();

    assert!(!claims.email_verified);
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("123123").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("123123", &hash).unwrap());
    assert!(!verify_password("wrong-password", &hash).unwrap());
}
