use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::forms::FormErrors;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid form submission: {0}")]
    InvalidForm(#[from] FormErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A create/update/delete that was rolled back. Only `message` is
    /// shown to the client, whatever the underlying cause.
    #[error("{message}")]
    OperationFailed {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(kind: &str, id: i32) -> Self {
        AppError::NotFound(format!("{} with id '{}' was not found", kind, id))
    }

    /// Wraps a storage failure in the generic message for the operation.
    pub fn failed(message: impl Into<String>) -> impl FnOnce(sqlx::Error) -> Self {
        let message = message.into();
        move |source| AppError::OperationFailed { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidForm(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::OperationFailed { .. } => "OPERATION_FAILED",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::InvalidForm(errors) => {
                warn!(fields = errors.len(), "Rejected form submission");
            }
            AppError::NotFound(msg) => {
                warn!(message = %msg, "Resource not found");
            }
            AppError::OperationFailed { message, source } => {
                error!(error = ?source, message = %message, "Transaction rolled back");
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let (public_message, details) = match self {
            AppError::InvalidForm(errors) => (
                "The submitted form is invalid".to_string(),
                serde_json::to_value(&errors).ok(),
            ),
            AppError::NotFound(msg) => (msg, None),
            AppError::OperationFailed { message, .. } => (message, None),
            AppError::DatabaseError(_) => ("A database error occurred".to_string(), None),
        };

        error_response(code, public_message, details, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldError;

    #[test]
    fn test_failed_keeps_generic_message() {
        let err = AppError::failed("An error occurred. Venue Hop could not be listed.")(
            sqlx::Error::RowNotFound,
        );
        assert_eq!(
            err.to_string(),
            "An error occurred. Venue Hop could not be listed."
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "OPERATION_FAILED");
    }

    #[test]
    fn test_status_codes() {
        let invalid = AppError::from(FormErrors::from(vec![FieldError::new(
            "name",
            "This field is required.",
        )]));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::not_found("Venue", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::PoolTimedOut).code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            AppError::not_found("Artist", 3).to_string(),
            "Resource not found: Artist with id '3' was not found"
        );
    }
}
