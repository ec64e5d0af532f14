//! Authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use campus_core::school::{Role, Staff};
use campus_shared::{Claims, JwtError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware that validates tokens from the login service.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Verifies it with the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "missing_token",
                "message": "Authorization header with Bearer token is required"
            })),
        )
            .into_response();
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "Rejected bearer token");
            let (error, message) = match e {
                JwtError::Expired => ("token_expired", "Token has expired"),
                _ => ("invalid_token", "Invalid or malformed token"),
            };

            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": error, "message": message })),
            )
                .into_response()
        }
    }
}

/// Extractor for the signed-in staff member.
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let staff = auth.staff();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the user's email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.0.email()
    }

    /// Returns the user's role.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::parse(&self.0.role)
    }

    /// Returns the staff member with their class assignment.
    #[must_use]
    pub fn staff(&self) -> Staff {
        Staff {
            role: self.role(),
            assigned_class: self.0.assigned_class,
            assigned_section: self.0.assigned_section.clone(),
        }
    }

    /// Fails with 403 unless the user may create or edit students.
    pub fn require_student_editor(&self) -> Result<(), ApiError> {
        if self.role().can_edit_students() {
            Ok(())
        } else {
            Err(ApiError::forbidden(
                "Only Admin, Accountant or Accounts Officer can edit students",
            ))
        }
    }

    /// Fails with 403 unless the user may record or delete payments.
    pub fn require_payment_editor(&self) -> Result<(), ApiError> {
        if self.role().can_edit_payments() {
            Ok(())
        } else {
            Err(ApiError::forbidden(
                "Only an Accounts Officer can record or delete payments",
            ))
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(ApiError::unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn user(role: &str) -> AuthUser {
        AuthUser(Claims::new(
            "staff@school.test",
            role,
            Utc::now() + Duration::hours(1),
        ))
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_staff_carries_assignment() {
        let auth = AuthUser(
            Claims::new("t@school.test", "Class Teacher", Utc::now() + Duration::hours(1))
                .with_assignment(7, "DOYEL"),
        );
        let staff = auth.staff();
        assert_eq!(staff.role, Role::ClassTeacher);
        assert!(staff.can_view(7, "DOYEL"));
        assert!(!staff.can_view(7, "KOYEL"));
    }

    #[tokio::test]
    async fn test_extractor_without_claims_is_unauthorized() {
        let (mut parts, ()) = axum::http::Request::new(()).into_parts();
        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.0.error_code(), "UNAUTHORIZED");
        assert_eq!(err.0.status_code(), 401);
    }

    #[test]
    fn test_permission_guards() {
        assert!(user("Admin").require_student_editor().is_ok());
        assert!(user("Admin").require_payment_editor().is_err());
        assert!(user("Accounts Officer").require_payment_editor().is_ok());
        assert!(user("Class Teacher").require_student_editor().is_err());
    }
}
