//! Assistance channel ("call waiter")
//!
//! At most one active request exists per table. Re-requesting while active
//! is a no-op that returns the original entry, so a customer tapping the
//! button cannot move themselves around in the triage order. Only staff
//! acknowledgment clears a request.

use crate::store::FloorStore;
use crate::utils::time;
use shared::models::AssistanceRequest;
use shared::{AppError, AppResult};

/// Per-table assistance requests over the floor store
#[derive(Clone)]
pub struct AssistanceChannel {
    store: FloorStore,
}

impl AssistanceChannel {
    pub fn new(store: FloorStore) -> Self {
        Self { store }
    }

    /// Signal that a table wants a waiter
    ///
    /// Idempotent: a table with an active request gets the existing entry
    /// back, original timestamp intact.
    pub fn request(&self, table_id: &str) -> AppResult<AssistanceRequest> {
        if table_id.trim().is_empty() {
            return Err(AppError::invalid_argument("table_id must not be blank"));
        }

        let txn = self.store.begin_write()?;
        if let Some(existing) = self.store.get_assistance_txn(&txn, table_id)? {
            return Ok(existing);
        }

        let request = AssistanceRequest {
            table_id: table_id.to_string(),
            requested_at: time::now_millis(),
        };
        self.store.save_assistance(&txn, &request)?;
        self.store.commit(txn)?;

        tracing::info!(table_id = %request.table_id, "Assistance requested");
        Ok(request)
    }

    /// Staff acknowledgment; `true` when an active request was cleared
    ///
    /// Acknowledging a table with nothing active is a no-op, not an error.
    pub fn acknowledge(&self, table_id: &str) -> AppResult<bool> {
        let txn = self.store.begin_write()?;
        let removed = self.store.remove_assistance(&txn, table_id)?;
        self.store.commit(txn)?;

        if removed {
            tracing::info!(table_id, "Assistance acknowledged");
        }
        Ok(removed)
    }

    /// Active requests, oldest first; ties break on table id
    pub fn list_active(&self) -> AppResult<Vec<AssistanceRequest>> {
        let mut requests = self.store.get_all_assistance()?;
        requests.sort_by(|a, b| {
            a.requested_at
                .cmp(&b.requested_at)
                .then_with(|| a.table_id.cmp(&b.table_id))
        });
        Ok(requests)
    }
}
