use axum::{http::StatusCode, response::{IntoResponse, Json}};
use serde_json::json;
use thiserror::Error;

use crate::domain::scan::MAX_PROFILES_PER_REQUEST;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Too many scan requests. Please wait a few minutes before trying again.")]
    RateLimited { retry_after_secs: u64 },
    #[error("Invalid request body. Expected JSON payload.")]
    MalformedBody,
    #[error("Please provide a valid Instagram username (letters, numbers, underscores, or periods).")]
    InvalidUsername,
    #[error("Add at least one public Instagram profile URL to scan.")]
    NoProfileUrls,
    #[error("You can scan up to {} profiles in a single request.", MAX_PROFILES_PER_REQUEST)]
    TooManyProfileUrls,
    #[error("None of the provided URLs looked like Instagram profile links. Please paste full public profile URLs.")]
    NoResolvableProfiles,
    #[error("Select a valid niche before running a niche scan.")]
    UnknownNiche,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self {
            AppError::RateLimited { retry_after_secs } => {
                json!({ "error": self.to_string(), "retryAfterSeconds": retry_after_secs })
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "scan request failed");
                json!({ "error": "internal error" })
            }
            _ => {
                tracing::debug!(reason = %self, "rejected scan request");
                json!({ "error": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        for e in [
            AppError::MalformedBody,
            AppError::InvalidUsername,
            AppError::NoProfileUrls,
            AppError::TooManyProfileUrls,
            AppError::NoResolvableProfiles,
            AppError::UnknownNiche,
        ] {
            assert_eq!(e.status(), StatusCode::BAD_REQUEST, "{e}");
        }
        assert_eq!(AppError::RateLimited { retry_after_secs: 300 }.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn too_many_message_names_the_limit() {
        assert_eq!(
            AppError::TooManyProfileUrls.to_string(),
            "You can scan up to 10 profiles in a single request."
        );
    }
}
