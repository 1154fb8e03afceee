/// Error types for the blog service.
///
/// Every failure is recoverable at the request boundary: errors are converted
/// into HTTP responses by the `ResponseError` impl, and redirect-style
/// outcomes (login required) carry their target location with them.
use actix_web::http::{header, StatusCode};
use actix_web::{error::ResponseError, HttpResponse};
use thiserror::Error;

/// Result type for blog-service operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Submitted fields failed validation; nothing was persisted.
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Resource lookup (group slug, username, post id) came up empty.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Mutation attempted without an authenticated caller; the response
    /// redirects to the login page with a `next` parameter.
    #[error("login required")]
    LoginRequired { location: String },

    /// A bearer token was supplied but could not be validated.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::LoginRequired { .. } => StatusCode::FOUND,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::LoginRequired { location } => HttpResponse::Found()
                .insert_header((header::LOCATION, location.clone()))
                .finish(),
            AppError::Validation(errors) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "fields": errors,
                }))
            }
            _ => {
                let status = self.status_code();
                HttpResponse::build(status).json(serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationErrors;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            AppError::NotFound("post").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation(ValidationErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn login_required_redirects_to_location() {
        let err = AppError::LoginRequired {
            location: "/auth/login?next=%2Fapi%2Fv1%2Fposts".to_string(),
        };
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/auth/login?next=%2Fapi%2Fv1%2Fposts"
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(AppError::NotFound("group").to_string(), "group not found");
    }
}
