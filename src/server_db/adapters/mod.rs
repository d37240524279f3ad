//! Adapter implementations for server database ports.

pub mod memory;
