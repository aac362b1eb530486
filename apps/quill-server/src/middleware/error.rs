//! Error handling - maps failures to rendered error pages.

use actix_web::dev::ServiceResponse;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpMessage, HttpResponse, ResponseError, http::StatusCode};
use quill_core::DomainError;
use quill_core::domain::CurrentUser;
use quill_core::error::RepoError;
use quill_shared::ErrorPage;
use std::fmt;

use crate::views::{self, View};

/// Application-level error type that converts to HTML error pages.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    fn problem(&self) -> ErrorPage {
        match self {
            AppError::NotFound(detail) => ErrorPage::not_found(detail),
            AppError::BadRequest(detail) => ErrorPage::rejected(detail),
            AppError::Unauthorized => ErrorPage::login_required(),
            AppError::Forbidden => ErrorPage::forbidden(),
            AppError::Internal(_) => ErrorPage::internal(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        // No request here; `render_error_page` redraws it for the visitor.
        let problem = self.problem();
        views::page(
            self.status_code(),
            &View::Error { problem: &problem },
            &CurrentUser::Anonymous,
        )
    }
}

/// `ErrorHandlers` hook that re-renders `AppError` pages for the identity
/// the `Visitor` extractor resolved, so the nav matches the session.
pub fn render_error_page<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let problem = res
        .response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .map(AppError::problem);
    let current = res
        .request()
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .unwrap_or_default();

    let Some(problem) = problem else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };
    if !current.is_authenticated() {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let page = views::page(res.status(), &View::Error { problem: &problem }, &current);
    Ok(ErrorHandlerResponse::Response(
        res.into_response(page).map_into_right_body(),
    ))
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        DomainError::from(err).into()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_403() {
        let err = AppError::from(DomainError::Forbidden);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_constraint_is_not_a_server_error() {
        let err = AppError::from(RepoError::Constraint("title".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::from(DomainError::NotFound {
            entity_type: "Post",
            id: 3,
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("Post with id 3"));
    }
}
