use axum::{http::StatusCode, response::IntoResponse};

use crate::infrastructure::axum_http::error_responses;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn not_found() -> impl IntoResponse {
    error_responses::not_found_body()
}
