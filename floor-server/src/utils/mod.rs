//! Shared helpers for the server binary

pub mod logger;
pub mod time;
