//! In-memory adapters.

mod database;

pub use database::InMemoryServerDatabase;
