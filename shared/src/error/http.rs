//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::TableNotFound | Self::IssueNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict (state-machine and edit-gating violations)
            Self::InvalidTransition => StatusCode::CONFLICT,

            // 422 Unprocessable Entity (order rejected by business validation)
            Self::InvalidOrder => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::StorageFailure | Self::SerializationFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
