//! Assistance Request Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Active "call waiter" signal for one table
///
/// At most one active request exists per table; re-calling while active is
/// a no-op and only staff acknowledgment removes the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistanceRequest {
    pub table_id: String,
    /// When the table first signalled (Unix milliseconds)
    pub requested_at: Timestamp,
}
