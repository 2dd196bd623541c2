//! Shared types for the Mesa table-ordering system
//!
//! Wire-facing data models, the unified error system, and common utility
//! types consumed by the floor server and its clients.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::Timestamp;
