use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::config_loader;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: Option<String>,
    pub email_verified: bool,
}

/// An `AuthUser` whose email is verified. Required by the dashboard route.
#[derive(Debug, Clone)]
pub struct VerifiedUser(pub AuthUser);

#[derive(Debug)]
pub struct AuthError(anyhow::Error);

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError(err)
    }
}

// Unauthenticated requests are sent back to the login flow.
impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        warn!(reason = %self.0, "auth: rejected request");
        Redirect::to("/login").into_response()
    }
}

pub fn validate_token(token: &str) -> Result<Claims, AuthError> {
    let auth_secret = config_loader::get_auth_secret()
        .map_err(|e| anyhow!("Failed to load auth secret: {}", e))?;

    let decoding_key = DecodingKey::from_secret(auth_secret.jwt_secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or_else(|| anyhow!("Missing Authorization header"))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| anyhow!("Invalid Authorization header"))?;

        if !auth_str.starts_with("Bearer ") {
            return Err(anyhow!("Invalid Authorization header format").into());
        }

        let token = &auth_str[7..];

        let claims = validate_token(token)?;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| anyhow!("Invalid user ID in token"))?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
            email_verified: claims.email_verified,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.email_verified {
            return Err(anyhow!("Email is not verified").into());
        }

        Ok(VerifiedUser(auth_user))
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| anyhow!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests;
