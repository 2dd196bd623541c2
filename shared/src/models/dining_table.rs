//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    NeedsCleaning,
}

/// Single advisory note attached to a table by staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableNote {
    WaitingForBill,
    Vip,
    SpecialRequest,
    Reservation,
}

/// Floor table entity
///
/// Tables are created lazily the first time a status or note update names
/// an unseen table id, and are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub status: TableStatus,
    #[serde(default)]
    pub note: Option<TableNote>,
}

/// Set table status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusChange {
    pub status: TableStatus,
}

/// Set table note payload (`note: null` clears)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableNoteChange {
    #[serde(default)]
    pub note: Option<TableNote>,
}
