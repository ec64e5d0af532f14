//! Error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use campus_core::payment::PaymentError;
use campus_core::student::StudentError;
use campus_db::repositories::StudentRepositoryError;
use campus_shared::AppError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// 403 with the given message.
    #[must_use]
    pub fn forbidden(message: &str) -> Self {
        Self(AppError::Forbidden(message.to_string()))
    }

    /// 404 with the given message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }

    /// 401 for a request that reached a handler without verified claims.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self(AppError::Unauthorized("Authentication required".to_string()))
    }

    /// A request Axum could not extract. Client mistakes become 400s;
    /// extractor misconfiguration stays a server error.
    fn rejected(status: StatusCode, detail: String) -> Self {
        if status.is_server_error() {
            Self(AppError::Internal(detail))
        } else {
            Self(AppError::Validation(detail))
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<StudentRepositoryError> for ApiError {
    fn from(err: StudentRepositoryError) -> Self {
        match err {
            StudentRepositoryError::DuplicateId(_) | StudentRepositoryError::DuplicateRoll => {
                Self(AppError::Conflict(err.to_string()))
            }
            StudentRepositoryError::NotFound(_) => Self(AppError::NotFound(err.to_string())),
            StudentRepositoryError::Database(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.public_message()
            })),
        )
            .into_response()
    }
}
