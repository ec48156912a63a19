use crate::errors::{
    error::ErrorResponse,
    repository::RepositoryError,
    service::{FieldErrors, ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Validation {
        message: String,
        errors: FieldErrors,
    },
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl HttpError {
    pub fn validation(errors: FieldErrors) -> Self {
        HttpError::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    /// Maps a service failure onto a status code. `failure_message` is what
    /// the client sees for unexpected failures; the underlying error text is
    /// attached separately for diagnostics.
    pub fn from_service(err: ServiceError, failure_message: &str) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Validation(errors) => HttpError::validation(errors),

            ServiceError::Repo(repo_err) => match repo_err {
                err @ RepositoryError::EntityNotFound { .. } => {
                    HttpError::NotFound(err.to_string())
                }
                other => HttpError::Internal {
                    message: failure_message.to_string(),
                    detail: Some(other.to_string()),
                },
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => {
                HttpError::Unauthorized("Invalid token type".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal {
                message: failure_message.to_string(),
                detail: Some(msg),
            },
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        HttpError::from_service(err, "Internal server error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            HttpError::Validation { message, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    errors: Some(errors),
                    ..ErrorResponse::new(message)
                },
            ),
            HttpError::Internal { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: detail,
                    ..ErrorResponse::new(message)
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
