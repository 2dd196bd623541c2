//! Floor domain
//!
//! - [`tables`] - table status registry with lazy record creation
//! - [`assistance`] - per-table "call waiter" channel
//! - [`issues`] - staff-reported service issue log

pub mod assistance;
pub mod issues;
pub mod tables;

pub use assistance::AssistanceChannel;
pub use issues::ServiceIssueLog;
pub use tables::TableRegistry;
