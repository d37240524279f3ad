//! IRC network and server database.
//!
//! Stores named networks, each with an ordered list of servers, and answers
//! lookups by network name, by hostname within a network, or by hostname
//! across every network. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Start-up settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
