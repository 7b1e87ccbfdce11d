// Error types for the Management/Subscription API transport

/// Errors produced by API requests, classified from the HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {resource}")]
    NotFound { resource: String },

    #[error("permission denied: {body}")]
    PermissionDenied { body: String },

    #[error("invalid data: {body}")]
    InvalidData { body: String },

    /// The variant is published and immutable. Handled internally by the
    /// unpublish-then-retry rule; only surfaced if the retry also fails.
    #[error("variant is published and cannot be updated")]
    PublishedConflict,

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx response. The published-conflict body check runs
    /// first because the CMS reports it as a plain 400.
    pub fn from_response(status: u16, resource: &str, body: String) -> Self {
        if body.contains("published") && body.contains("cannot be updated") {
            return ApiError::PublishedConflict;
        }
        match status {
            404 => ApiError::NotFound {
                resource: resource.to_string(),
            },
            403 => ApiError::PermissionDenied { body },
            400 => ApiError::InvalidData { body },
            _ => ApiError::RequestFailed { status, body },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub fn is_published_conflict(&self) -> bool {
        matches!(self, ApiError::PublishedConflict)
    }
}
