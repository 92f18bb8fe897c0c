//! Error handling

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;
use tracing::{error, info};

use crate::ai::ProviderError;
use crate::models::ErrorBody;
use crate::sanitize::SanitizeError;

/// Why a model reply could not be turned into a [`crate::models::BlogPost`].
#[derive(Debug, Error)]
pub enum MalformedResponse {
    /// The reply did not contain a parseable JSON object.
    #[error(transparent)]
    Sanitize(#[from] SanitizeError),
    /// The reply parsed but does not have the blog post shape.
    #[error("Response is not a valid blog post ({reason}). Got: {excerpt}...")]
    Schema {
        /// What was wrong with the object.
        reason: String,
        /// Leading characters of the offending JSON.
        excerpt: String,
    },
}

/// Failures of a generation request.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The caller's input failed a precondition; no upstream call was made.
    #[error("{0}")]
    InvalidRequest(&'static str),
    /// The model provider call itself failed.
    #[error(transparent)]
    UpstreamError(#[from] ProviderError),
    /// The model answered but its reply was unusable.
    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}

impl From<SanitizeError> for GenerationError {
    fn from(err: SanitizeError) -> Self {
        GenerationError::MalformedResponse(MalformedResponse::Sanitize(err))
    }
}

/// A [`GenerationError`] caught at the HTTP boundary.
#[derive(Debug)]
pub struct ApiError {
    /// Fixed message returned for server-side failures.
    pub summary: &'static str,
    /// The failure being reported.
    pub error: GenerationError,
}

impl ApiError {
    /// Wraps an error with the summary for its endpoint.
    pub fn new(summary: &'static str, error: GenerationError) -> Self {
        Self { summary, error }
    }

    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self.error {
            GenerationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GenerationError::UpstreamError(_) | GenerationError::MalformedResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self.error {
            GenerationError::InvalidRequest(message) => {
                info!("Bad request received: {}", message);
                ErrorBody {
                    error: message.to_string(),
                    details: None,
                }
            }
            err => {
                error!("{}: {}", self.summary, err);
                ErrorBody {
                    error: self.summary.to_string(),
                    details: Some(err.to_string()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLOG_FAILURE, TOPIC_REQUIRED};

    #[test]
    fn invalid_request_is_bad_request() {
        let err = ApiError::new(BLOG_FAILURE, GenerationError::InvalidRequest(TOPIC_REQUIRED));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_and_malformed_are_server_errors() {
        let upstream = ApiError::new(
            BLOG_FAILURE,
            GenerationError::UpstreamError(ProviderError::MissingApiKey),
        );
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let malformed = ApiError::new(
            BLOG_FAILURE,
            SanitizeError::NotJson {
                excerpt: "hello".to_string(),
            }
            .into(),
        );
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_carry_the_underlying_detail() {
        let err: GenerationError = SanitizeError::NotJson {
            excerpt: "Sure!".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Response doesn't appear to be JSON. Got: Sure!..."
        );
        assert_eq!(
            GenerationError::from(ProviderError::MissingApiKey).to_string(),
            "OPENAI_API_KEY is not set"
        );
    }
}
