//! Port contracts for the server database.
//!
//! Ports define storage-agnostic interfaces used by the server database
//! service.

pub mod repository;

pub use repository::{ServerDatabase, ServerDbError, ServerDbResult};
