//! Service Issue Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// What went wrong on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceIssueKind {
    OutOfStock,
    Complaint,
    Equipment,
    Other,
}

impl ServiceIssueKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ServiceIssueKind::OutOfStock => "Out of Stock",
            ServiceIssueKind::Complaint => "Customer Complaint",
            ServiceIssueKind::Equipment => "Equipment Issue",
            ServiceIssueKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for ServiceIssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Service issue record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceIssue {
    pub id: String,
    pub kind: ServiceIssueKind,
    pub description: String,
    pub resolved: bool,
    pub reported_at: Timestamp,
}

/// Report service issue payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceIssueDraft {
    pub kind: ServiceIssueKind,
    pub description: String,
}

/// Service issue listing filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ServiceIssueFilter {
    /// Resolved issues are hidden unless asked for
    #[serde(default)]
    pub include_resolved: bool,
}
