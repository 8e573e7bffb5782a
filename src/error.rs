// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Every variant renders as `{success, error, description}` with a fixed description;
/// the carried message is only logged.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed(String),

    // 422 Unprocessable Entity (reserved)
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing description for this error class.
    pub fn description(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Malformed Request",
            AppError::NotFound(_) => "Requested endpoint is not found",
            AppError::MethodNotAllowed(_) => {
                "Method not setup, please make sure that the HTTP method type is set correctly"
            }
            AppError::Unprocessable(_) => "Unprocessable due to origin restrictions",
            AppError::InternalServerError(_) => "Server Error, please contact administrator",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
            }
            AppError::BadRequest(msg) => tracing::debug!("Bad Request: {}", msg),
            AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Unprocessable(msg) => tracing::debug!("{}: {}", self.status(), msg),
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "description": self.description(),
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let (status, body) =
            body_of(AppError::InternalServerError("connection refused".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 500);
        assert_eq!(body["description"], "Server Error, please contact administrator");
        assert!(!body.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn each_variant_uses_its_status_code() {
        let cases = [
            (AppError::BadRequest(String::new()), 400, "Malformed Request"),
            (AppError::NotFound(String::new()), 404, "Requested endpoint is not found"),
            (
                AppError::MethodNotAllowed(String::new()),
                405,
                "Method not setup, please make sure that the HTTP method type is set correctly",
            ),
            (
                AppError::Unprocessable(String::new()),
                422,
                "Unprocessable due to origin restrictions",
            ),
        ];

        for (err, code, description) in cases {
            let (status, body) = body_of(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body["error"], code);
            assert_eq!(body["description"], description);
        }
    }
}
