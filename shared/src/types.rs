//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Date range with inclusive bounds, used by read filters
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound (Unix milliseconds)
    pub from: Option<Timestamp>,
    /// Inclusive upper bound (Unix milliseconds)
    pub to: Option<Timestamp>,
}

impl DateRange {
    /// Check whether a timestamp falls inside the range
    pub fn contains(&self, ts: Timestamp) -> bool {
        if let Some(from) = self.from
            && ts < from
        {
            return false;
        }
        if let Some(to) = self.to
            && ts > to
        {
            return false;
        }
        true
    }
}
