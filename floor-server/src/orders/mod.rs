//! Order domain
//!
//! - [`lifecycle`] - the five-stage order state machine over the store
//! - [`money`] - item validation and decimal total arithmetic
//! - [`queue`] - pure queue views (grouped and combined) for the kitchen

pub mod lifecycle;
pub mod money;
pub mod queue;

pub use lifecycle::LifecycleManager;
pub use queue::{QueueEntry, QueueGroup};
