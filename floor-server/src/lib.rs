//! Mesa Floor Server - table-ordering backend for a single restaurant
//!
//! # Architecture Overview
//!
//! The floor server is the source of truth for everything that happens
//! between a table placing an order and the kitchen serving it:
//!
//! - **Orders** (`orders`): lifecycle state machine, money math, kitchen queue
//! - **Floor** (`floor`): table registry, assistance calls, service issues
//! - **Feedback** (`feedback`): post-meal ratings and comments
//! - **Store** (`store`): embedded redb persistence
//! - **HTTP API** (`api`): RESTful routes polled by the table and staff clients
//!
//! # Module Structure
//!
//! ```text
//! floor-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── orders/        # order lifecycle, money, queue views
//! ├── floor/         # tables, assistance, service issues
//! ├── feedback.rs    # feedback ledger
//! ├── store/         # redb storage layer
//! └── utils/         # logging, time helpers
//! ```

pub mod api;
pub mod core;
pub mod feedback;
pub mod floor;
pub mod orders;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use feedback::FeedbackLedger;
pub use floor::{AssistanceChannel, ServiceIssueLog, TableRegistry};
pub use orders::LifecycleManager;
pub use store::FloorStore;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment before the server starts.
///
/// Loads `.env`, creates the work directory layout, and initializes
/// logging. File logging only kicks in for production environments;
/// development logs go to stdout.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    if config.is_production() {
        let logs_dir = config.logs_dir();
        init_logger_with_file(Some(&config.log_level), logs_dir.to_str());
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  _________ _
  / /|_/ / _ \/ ___/ __ `/
 / /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/
    "#
    );
}
