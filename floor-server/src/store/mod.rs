//! redb-backed persistence for the floor server
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | `Order` | Order ledger |
//! | `dining_tables` | `table_id` | `DiningTable` | Floor table registry |
//! | `assistance` | `table_id` | `AssistanceRequest` | Active waiter calls |
//! | `feedback` | `feedback_id` | `FeedbackEntry` | Feedback ledger (append-only) |
//! | `service_issues` | `issue_id` | `ServiceIssue` | Service issue log |
//! | `counters` | counter name | `u64` | Id counters (`order`, `feedback`, `issue`) |
//!
//! Values are JSON-serialized model structs from the `shared` crate.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns the data
//! is on disk and the file is in a consistent state even across power loss.
//! Id counters increment inside the same transaction that inserts the new row,
//! so a crash can neither skip nor reuse an id.

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
    WriteTransaction,
};
use shared::models::{AssistanceRequest, DiningTable, FeedbackEntry, Order, ServiceIssue};
use shared::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Order ledger: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Table registry: key = table_id, value = JSON-serialized DiningTable
const TABLES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("dining_tables");

/// Active assistance requests: key = table_id, value = JSON-serialized AssistanceRequest
const ASSISTANCE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("assistance");

/// Feedback ledger: key = feedback_id, value = JSON-serialized FeedbackEntry
const FEEDBACK_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("feedback");

/// Service issue log: key = issue_id, value = JSON-serialized ServiceIssue
const ISSUES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("service_issues");

/// Id counters: key = counter name, value = last issued number
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const ORDER_COUNTER_KEY: &str = "order";
const FEEDBACK_COUNTER_KEY: &str = "feedback";
const ISSUE_COUNTER_KEY: &str = "issue";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Serialization(e) => AppError::serialization(e.to_string()),
            other => AppError::storage(other.to_string()),
        }
    }
}

/// Row counts per table, used by the health check
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    pub order_count: u64,
    pub table_count: u64,
    pub assistance_count: u64,
    pub feedback_count: u64,
    pub issue_count: u64,
}

/// Floor persistence backed by redb
///
/// Cheap to clone; every component holds its own handle to the same
/// database. redb allows a single write transaction at a time, which is
/// what serializes concurrent read-modify-write cycles.
#[derive(Clone)]
pub struct FloorStore {
    db: Arc<Database>,
}

impl FloorStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Create all tables so later read transactions never hit a missing table
    fn init_tables(db: &Database) -> StoreResult<()> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(TABLES_TABLE)?;
            let _ = write_txn.open_table(ASSISTANCE_TABLE)?;
            let _ = write_txn.open_table(FEEDBACK_TABLE)?;
            let _ = write_txn.open_table(ISSUES_TABLE)?;
            let _ = write_txn.open_table(COUNTERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction
    ///
    /// Callers do read-modify-write inside one transaction and commit at the
    /// end; redb's single-writer rule makes the whole cycle atomic.
    pub fn begin_write(&self) -> StoreResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Commit a write transaction
    ///
    /// Dropping an uncommitted transaction aborts it, so error paths that
    /// bail out with `?` leave the database untouched.
    pub fn commit(&self, txn: WriteTransaction) -> StoreResult<()> {
        Ok(txn.commit()?)
    }

    // ========== Id Counters ==========

    /// Increment a named counter and return the new value
    fn next_counter(&self, txn: &WriteTransaction, key: &str) -> StoreResult<u64> {
        let mut table = txn.open_table(COUNTERS_TABLE)?;
        let current = table.get(key)?.map(|g| g.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(key, next)?;
        Ok(next)
    }

    /// Mint the next order id (`order-<n>`)
    pub fn next_order_id(&self, txn: &WriteTransaction) -> StoreResult<String> {
        Ok(format!("order-{}", self.next_counter(txn, ORDER_COUNTER_KEY)?))
    }

    /// Mint the next feedback id (`feedback-<n>`)
    pub fn next_feedback_id(&self, txn: &WriteTransaction) -> StoreResult<String> {
        Ok(format!(
            "feedback-{}",
            self.next_counter(txn, FEEDBACK_COUNTER_KEY)?
        ))
    }

    /// Mint the next service issue id (`issue-<n>`)
    pub fn next_issue_id(&self, txn: &WriteTransaction) -> StoreResult<String> {
        Ok(format!("issue-{}", self.next_counter(txn, ISSUE_COUNTER_KEY)?))
    }

    // ========== Orders ==========

    /// Insert or overwrite an order
    pub fn save_order(&self, txn: &WriteTransaction, order: &Order) -> StoreResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get an order by id
    pub fn get_order(&self, order_id: &str) -> StoreResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get an order by id (within a write transaction)
    pub fn get_order_txn(
        &self,
        txn: &WriteTransaction,
        order_id: &str,
    ) -> StoreResult<Option<Order>> {
        let table = txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get all orders (unsorted)
    pub fn get_all_orders(&self) -> StoreResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            let order: Order = serde_json::from_slice(value.value())?;
            orders.push(order);
        }

        Ok(orders)
    }

    // ========== Dining Tables ==========

    /// Insert or overwrite a table record
    pub fn save_table(&self, txn: &WriteTransaction, table: &DiningTable) -> StoreResult<()> {
        let mut t = txn.open_table(TABLES_TABLE)?;
        let value = serde_json::to_vec(table)?;
        t.insert(table.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get a table by id
    pub fn get_table(&self, table_id: &str) -> StoreResult<Option<DiningTable>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;

        match table.get(table_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get a table by id (within a write transaction)
    pub fn get_table_txn(
        &self,
        txn: &WriteTransaction,
        table_id: &str,
    ) -> StoreResult<Option<DiningTable>> {
        let table = txn.open_table(TABLES_TABLE)?;

        match table.get(table_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get all table records (unsorted)
    pub fn get_all_tables(&self) -> StoreResult<Vec<DiningTable>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;

        let mut tables = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            let record: DiningTable = serde_json::from_slice(value.value())?;
            tables.push(record);
        }

        Ok(tables)
    }

    // ========== Assistance Requests ==========

    /// Insert or overwrite the active request for a table
    pub fn save_assistance(
        &self,
        txn: &WriteTransaction,
        request: &AssistanceRequest,
    ) -> StoreResult<()> {
        let mut table = txn.open_table(ASSISTANCE_TABLE)?;
        let value = serde_json::to_vec(request)?;
        table.insert(request.table_id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get the active request for a table (within a write transaction)
    pub fn get_assistance_txn(
        &self,
        txn: &WriteTransaction,
        table_id: &str,
    ) -> StoreResult<Option<AssistanceRequest>> {
        let table = txn.open_table(ASSISTANCE_TABLE)?;

        match table.get(table_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Remove the active request for a table, returning whether one existed
    pub fn remove_assistance(&self, txn: &WriteTransaction, table_id: &str) -> StoreResult<bool> {
        let mut table = txn.open_table(ASSISTANCE_TABLE)?;
        Ok(table.remove(table_id)?.is_some())
    }

    /// Get all active requests (unsorted)
    pub fn get_all_assistance(&self) -> StoreResult<Vec<AssistanceRequest>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ASSISTANCE_TABLE)?;

        let mut requests = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            let request: AssistanceRequest = serde_json::from_slice(value.value())?;
            requests.push(request);
        }

        Ok(requests)
    }

    // ========== Feedback ==========

    /// Append a feedback entry
    pub fn save_feedback(&self, txn: &WriteTransaction, entry: &FeedbackEntry) -> StoreResult<()> {
        let mut table = txn.open_table(FEEDBACK_TABLE)?;
        let value = serde_json::to_vec(entry)?;
        table.insert(entry.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get all feedback entries (unsorted)
    pub fn get_all_feedback(&self) -> StoreResult<Vec<FeedbackEntry>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FEEDBACK_TABLE)?;

        let mut entries = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            let record: FeedbackEntry = serde_json::from_slice(value.value())?;
            entries.push(record);
        }

        Ok(entries)
    }

    // ========== Service Issues ==========

    /// Insert or overwrite a service issue
    pub fn save_issue(&self, txn: &WriteTransaction, issue: &ServiceIssue) -> StoreResult<()> {
        let mut table = txn.open_table(ISSUES_TABLE)?;
        let value = serde_json::to_vec(issue)?;
        table.insert(issue.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get a service issue by id (within a write transaction)
    pub fn get_issue_txn(
        &self,
        txn: &WriteTransaction,
        issue_id: &str,
    ) -> StoreResult<Option<ServiceIssue>> {
        let table = txn.open_table(ISSUES_TABLE)?;

        match table.get(issue_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get all service issues (unsorted)
    pub fn get_all_issues(&self) -> StoreResult<Vec<ServiceIssue>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ISSUES_TABLE)?;

        let mut issues = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            let issue: ServiceIssue = serde_json::from_slice(value.value())?;
            issues.push(issue);
        }

        Ok(issues)
    }

    // ========== Stats ==========

    /// Row counts per table
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let read_txn = self.db.begin_read()?;
        Ok(StoreStats {
            order_count: read_txn.open_table(ORDERS_TABLE)?.len()?,
            table_count: read_txn.open_table(TABLES_TABLE)?.len()?,
            assistance_count: read_txn.open_table(ASSISTANCE_TABLE)?.len()?,
            feedback_count: read_txn.open_table(FEEDBACK_TABLE)?.len()?,
            issue_count: read_txn.open_table(ISSUES_TABLE)?.len()?,
        })
    }
}
