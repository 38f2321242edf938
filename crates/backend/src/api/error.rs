//! HTTP error mapping
//!
//! Every failure leaves the service as a JSON `{"error": ...}` body with a
//! status the frontend's taxonomy can classify.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::api::ApiErrorBody;
use thiserror::Error;

use crate::domain::readme::service::ReadmeError;
use crate::shared::github::GithubError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(ApiErrorBody {
            error: self.to_string(),
        }))
            .into_response()
    }
}

impl From<ReadmeError> for ApiError {
    fn from(err: ReadmeError) -> Self {
        match &err {
            ReadmeError::Github(GithubError::NotFound(_)) => ApiError::NotFound(err.to_string()),
            ReadmeError::Github(_) | ReadmeError::Llm(_) => ApiError::Upstream(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_failure_class() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Upstream("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn unknown_repository_maps_to_not_found() {
        let err = ReadmeError::Github(GithubError::NotFound("octocat/nope".into()));
        assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));
    }

    #[test]
    fn rate_limit_maps_to_upstream() {
        let err = ReadmeError::Github(GithubError::RateLimited);
        assert!(matches!(ApiError::from(err), ApiError::Upstream(_)));
    }
}
