//! Unified error codes for the Mesa table-ordering system
//!
//! Error codes are shared between the floor server and its clients and are
//! organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 7xxx: Floor errors (tables, service issues)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Malformed input (negative price, out-of-range rating, unknown enum value)
    InvalidArgument = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Status-machine or edit-gating violation
    InvalidTransition = 4002,
    /// Order rejected at creation or edit (empty items, bad price/quantity)
    InvalidOrder = 4003,

    // ==================== 7xxx: Floor ====================
    /// Table not found
    TableNotFound = 7001,
    /// Service issue not found
    IssueNotFound = 7101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Durable store operation failed
    StorageFailure = 9002,
    /// Record could not be encoded or decoded
    SerializationFailure = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NotFound => "Resource not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidTransition => "Order status transition is not allowed",
            ErrorCode::InvalidOrder => "Order is invalid",

            // Floor
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::IssueNotFound => "Service issue not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageFailure => "Durable store operation failed",
            ErrorCode::SerializationFailure => "Record serialization failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::InvalidArgument),
            3 => Ok(ErrorCode::NotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidTransition),
            4003 => Ok(ErrorCode::InvalidOrder),

            // Floor
            7001 => Ok(ErrorCode::TableNotFound),
            7101 => Ok(ErrorCode::IssueNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageFailure),
            9003 => Ok(ErrorCode::SerializationFailure),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
