use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::{application::usecases::plans::PlanError, domain::value_objects::plans::ValidationErrors};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub code: u16,
    pub message: String,
    pub errors: ValidationErrors,
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            PlanError::Validation(errors) => (
                status,
                Json(ValidationErrorResponse {
                    code: status.as_u16(),
                    message: "Validation failed".to_string(),
                    errors,
                }),
            )
                .into_response(),
            PlanError::Internal(err) => {
                // Don't leak internal error detail to the client.
                error!(error = ?err, "http: internal server error");
                (
                    status,
                    Json(ErrorResponse {
                        code: status.as_u16(),
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            other => (
                status,
                Json(ErrorResponse {
                    code: status.as_u16(),
                    message: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

pub fn not_found_body() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: StatusCode::NOT_FOUND.as_u16(),
            message: "Not found".to_string(),
        }),
    )
}
