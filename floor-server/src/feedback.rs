//! Feedback ledger
//!
//! Append-only ratings with a filtered listing and an unrounded average.
//! Entries keep whatever order/table ids they were given; feedback is
//! allowed to outlive housekeeping of old orders, so nothing here checks
//! that the order still exists.

use crate::store::FloorStore;
use crate::utils::time;
use shared::models::{FeedbackDraft, FeedbackEntry, FeedbackFilter};
use shared::{AppError, AppResult};

/// Feedback ledger over the floor store
#[derive(Clone)]
pub struct FeedbackLedger {
    store: FloorStore,
}

impl FeedbackLedger {
    pub fn new(store: FloorStore) -> Self {
        Self { store }
    }

    /// Record one rating
    pub fn record(&self, draft: FeedbackDraft) -> AppResult<FeedbackEntry> {
        if !(1..=5).contains(&draft.rating) {
            return Err(AppError::invalid_argument(format!(
                "rating must be between 1 and 5, got {}",
                draft.rating
            )));
        }

        let txn = self.store.begin_write()?;
        let id = self.store.next_feedback_id(&txn)?;
        let entry = FeedbackEntry {
            id,
            order_id: draft.order_id,
            table_id: draft.table_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: time::now_millis(),
        };
        self.store.save_feedback(&txn, &entry)?;
        self.store.commit(txn)?;

        tracing::info!(
            feedback_id = %entry.id,
            order_id = %entry.order_id,
            rating = entry.rating,
            "Feedback recorded"
        );
        Ok(entry)
    }

    /// Entries matching the filter, newest first
    pub fn list(&self, filter: &FeedbackFilter) -> AppResult<Vec<FeedbackEntry>> {
        let mut entries = self.store.get_all_feedback()?;

        if let Some(needle) = filter.table_id.as_deref() {
            let needle = needle.to_lowercase();
            if !needle.is_empty() {
                entries.retain(|e| e.table_id.to_lowercase().contains(&needle));
            }
        }
        if let Some(rating) = filter.rating {
            entries.retain(|e| e.rating == rating);
        }
        let range = filter.date_range();
        entries.retain(|e| range.contains(e.created_at));

        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }

    /// Arithmetic mean of ratings over the filtered set, `0.0` when empty
    ///
    /// Returned unrounded; display rounding is a caller concern.
    pub fn average(&self, filter: &FeedbackFilter) -> AppResult<f64> {
        let entries = self.list(filter)?;
        if entries.is_empty() {
            return Ok(0.0);
        }
        let sum: u32 = entries.iter().map(|e| u32::from(e.rating)).sum();
        Ok(f64::from(sum) / entries.len() as f64)
    }
}
