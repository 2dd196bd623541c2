//! Service issue log
//!
//! Staff-reported problems on the floor: stockouts, complaints, broken
//! equipment. Issues are never deleted; resolving one just flips a flag and
//! drops it from the default listing.

use crate::store::FloorStore;
use crate::utils::time;
use shared::models::{ServiceIssue, ServiceIssueDraft};
use shared::{AppError, AppResult};

/// Service issue log over the floor store
#[derive(Clone)]
pub struct ServiceIssueLog {
    store: FloorStore,
}

impl ServiceIssueLog {
    pub fn new(store: FloorStore) -> Self {
        Self { store }
    }

    /// Report a new issue, open by default
    pub fn report(&self, draft: ServiceIssueDraft) -> AppResult<ServiceIssue> {
        if draft.description.trim().is_empty() {
            return Err(AppError::invalid_argument("description must not be blank"));
        }

        let txn = self.store.begin_write()?;
        let id = self.store.next_issue_id(&txn)?;
        let issue = ServiceIssue {
            id,
            kind: draft.kind,
            description: draft.description,
            resolved: false,
            reported_at: time::now_millis(),
        };
        self.store.save_issue(&txn, &issue)?;
        self.store.commit(txn)?;

        tracing::info!(issue_id = %issue.id, kind = %issue.kind, "Service issue reported");
        Ok(issue)
    }

    /// Mark an issue resolved
    ///
    /// Resolving twice is a no-op returning the issue as-is; an unknown id
    /// is an error.
    pub fn resolve(&self, issue_id: &str) -> AppResult<ServiceIssue> {
        let txn = self.store.begin_write()?;
        let mut issue = self
            .store
            .get_issue_txn(&txn, issue_id)?
            .ok_or_else(|| AppError::issue_not_found(issue_id))?;

        if !issue.resolved {
            issue.resolved = true;
            self.store.save_issue(&txn, &issue)?;
            self.store.commit(txn)?;
            tracing::info!(issue_id = %issue.id, "Service issue resolved");
        }
        Ok(issue)
    }

    /// Issues newest first; open ones only unless `include_resolved`
    pub fn list(&self, include_resolved: bool) -> AppResult<Vec<ServiceIssue>> {
        let mut issues = self.store.get_all_issues()?;
        if !include_resolved {
            issues.retain(|i| !i.resolved);
        }
        issues.sort_by(|a, b| {
            b.reported_at
                .cmp(&a.reported_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(issues)
    }
}
