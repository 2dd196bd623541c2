//! Data models
//!
//! Shared between floor-server and frontend (via API).
//! Entity IDs are strings minted by the server (`order-<n>`, `feedback-<n>`,
//! `issue-<n>`); table IDs come from the floor plan.

pub mod assistance;
pub mod dining_table;
pub mod feedback;
pub mod order;
pub mod service_issue;

// Re-exports
pub use assistance::*;
pub use dining_table::*;
pub use feedback::*;
pub use order::*;
pub use service_issue::*;
