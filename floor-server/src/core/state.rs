//! Server State
//!
//! One shared handle bundling every domain component over a single store.

use crate::core::Config;
use crate::feedback::FeedbackLedger;
use crate::floor::{AssistanceChannel, ServiceIssueLog, TableRegistry};
use crate::orders::LifecycleManager;
use crate::store::FloorStore;

/// Shared server state
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | store | redb handle (one database file for everything) |
/// | orders | Order lifecycle state machine |
/// | tables | Floor table registry |
/// | assistance | "Call waiter" channel |
/// | feedback | Rating ledger |
/// | issues | Service issue log |
///
/// Every field is cheap to clone (the store is an `Arc` handle), so axum
/// clones the whole state into each request.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: FloorStore,
    pub orders: LifecycleManager,
    pub tables: TableRegistry,
    pub assistance: AssistanceChannel,
    pub feedback: FeedbackLedger,
    pub issues: ServiceIssueLog,
}

impl ServerState {
    /// Open the store and wire up every component
    ///
    /// Creates the work directory layout on first run.
    pub fn initialize(config: &Config) -> crate::core::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let store = FloorStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Floor store opened");

        Ok(Self::with_store(config.clone(), store))
    }

    /// Build state over an already-open store
    ///
    /// Used by tests that want a temporary or in-memory database.
    pub fn with_store(config: Config, store: FloorStore) -> Self {
        Self {
            config,
            orders: LifecycleManager::new(store.clone()),
            tables: TableRegistry::new(store.clone()),
            assistance: AssistanceChannel::new(store.clone()),
            feedback: FeedbackLedger::new(store.clone()),
            issues: ServiceIssueLog::new(store.clone()),
            store,
        }
    }
}
