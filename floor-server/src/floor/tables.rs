//! Floor table registry
//!
//! Tables are created lazily: the first status or note update naming an
//! unseen id creates the record. Nothing ever deletes a table; a stale one
//! just sits at AVAILABLE. Status and note are independent fields, so a
//! status change never clobbers the note and vice versa.

use crate::store::FloorStore;
use redb::WriteTransaction;
use shared::models::{DiningTable, TableNote, TableStatus};
use shared::{AppError, AppResult};

fn check_table_id(table_id: &str) -> AppResult<()> {
    if table_id.trim().is_empty() {
        return Err(AppError::invalid_argument("table_id must not be blank"));
    }
    Ok(())
}

/// Table status registry over the floor store
#[derive(Clone)]
pub struct TableRegistry {
    store: FloorStore,
}

impl TableRegistry {
    pub fn new(store: FloorStore) -> Self {
        Self { store }
    }

    /// Load the record inside the transaction, defaulting an unseen table
    fn load_or_new(&self, txn: &WriteTransaction, table_id: &str) -> AppResult<DiningTable> {
        Ok(self
            .store
            .get_table_txn(txn, table_id)?
            .unwrap_or_else(|| DiningTable {
                id: table_id.to_string(),
                status: TableStatus::default(),
                note: None,
            }))
    }

    /// Set a table's occupancy status, creating the record when unseen
    pub fn set_status(&self, table_id: &str, status: TableStatus) -> AppResult<DiningTable> {
        check_table_id(table_id)?;

        let txn = self.store.begin_write()?;
        let mut record = self.load_or_new(&txn, table_id)?;
        record.status = status;
        self.store.save_table(&txn, &record)?;
        self.store.commit(txn)?;

        tracing::info!(table_id = %record.id, status = ?status, "Table status set");
        Ok(record)
    }

    /// Set or clear a table's advisory note, creating the record when unseen
    ///
    /// `None` always clears; writing the same note twice is a plain
    /// overwrite, not a toggle.
    pub fn set_note(&self, table_id: &str, note: Option<TableNote>) -> AppResult<DiningTable> {
        check_table_id(table_id)?;

        let txn = self.store.begin_write()?;
        let mut record = self.load_or_new(&txn, table_id)?;
        record.note = note;
        self.store.save_table(&txn, &record)?;
        self.store.commit(txn)?;

        tracing::info!(table_id = %record.id, note = ?note, "Table note set");
        Ok(record)
    }

    /// Get one table; `None` for an id the floor has never seen
    pub fn get(&self, table_id: &str) -> AppResult<Option<DiningTable>> {
        Ok(self.store.get_table(table_id)?)
    }

    /// All known tables, sorted by id for stable display
    pub fn list_all(&self) -> AppResult<Vec<DiningTable>> {
        let mut tables = self.store.get_all_tables()?;
        tables.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tables)
    }
}
