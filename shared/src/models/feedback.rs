//! Feedback Model

use crate::types::{DateRange, Timestamp};
use serde::{Deserialize, Serialize};

/// Post-order rating entry
///
/// Immutable once recorded and never deleted. The order/table ids are
/// stored as given; feedback may outlive housekeeping of old orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub order_id: String,
    pub table_id: String,
    /// Star rating, 1 (worst) to 5 (best)
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// Record feedback payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub order_id: String,
    pub table_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Feedback reporting filter
///
/// Flat from/to fields instead of a nested range so the filter can come
/// straight out of a query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackFilter {
    /// Case-insensitive substring match over table id
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    /// Inclusive lower bound over `created_at` (Unix milliseconds)
    #[serde(default)]
    pub from: Option<Timestamp>,
    /// Inclusive upper bound over `created_at` (Unix milliseconds)
    #[serde(default)]
    pub to: Option<Timestamp>,
}

impl FeedbackFilter {
    /// The inclusive date window of this filter
    pub fn date_range(&self) -> DateRange {
        DateRange {
            from: self.from,
            to: self.to,
        }
    }
}
