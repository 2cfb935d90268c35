//! Store module
//!
//! Shared in-memory state for the server.

pub mod state;

pub use state::{Store, StoreError, StoreResult, StoreState};
