use autosim_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `autosim_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Shape of a failed response before serialization.
enum ErrorBody {
    Client {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
    Internal {
        details: String,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ErrorBody::Client {
                    status: StatusCode::NOT_FOUND,
                    code: "NOT_FOUND",
                    message: format!("{entity} with id {id} not found"),
                },
                CoreError::Validation(message) => ErrorBody::Client {
                    status: StatusCode::BAD_REQUEST,
                    code: "VALIDATION_ERROR",
                    message,
                },
                CoreError::Internal(details) => ErrorBody::Internal { details },
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(message) => ErrorBody::Client {
                status: StatusCode::BAD_REQUEST,
                code: "BAD_REQUEST",
                message,
            },
        };

        match body {
            ErrorBody::Client {
                status,
                code,
                message,
            } => (
                status,
                axum::Json(json!({
                    "error": message,
                    "code": code,
                })),
            )
                .into_response(),
            ErrorBody::Internal { details } => {
                tracing::error!(error = %details, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "error": "internal_error",
                        "code": "INTERNAL_ERROR",
                        "details": details,
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Classify a sqlx error into a response body.
///
/// `RowNotFound` maps to 404; connection failures, constraint violations and
/// everything else map to 500 carrying the underlying message.
fn classify_sqlx_error(err: sqlx::Error) -> ErrorBody {
    match err {
        sqlx::Error::RowNotFound => ErrorBody::Client {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Resource not found".to_string(),
        },
        sqlx::Error::Database(db_err) => ErrorBody::Internal {
            details: match db_err.constraint() {
                Some(constraint) => format!("{db_err} (constraint: {constraint})"),
                None => db_err.to_string(),
            },
        },
        other => ErrorBody::Internal {
            details: other.to_string(),
        },
    }
}
