//! Core module - server configuration, state and errors
//!
//! # Module Structure
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared component handles
//! - [`Server`] - HTTP server and graceful shutdown
//! - [`ServerError`] - bootstrap failures

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
