// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Backend API client errors.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication error (rejected or missing access token).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The backend reported an error status in its response envelope.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Response body did not match the documented envelope.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
