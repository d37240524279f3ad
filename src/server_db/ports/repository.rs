//! Registry port: network name to server record storage and lookup.

use crate::server_db::domain::{HostName, Network, NetworkName, Server, ServerRecord};
use thiserror::Error;

/// Result type for server database operations.
pub type ServerDbResult<T> = Result<T, ServerDbError>;

/// Storage contract for networks and their server records.
///
/// Implementations are owned by a single caller and are not internally
/// synchronised. Iteration order must be deterministic; the global server
/// search depends on it.
pub trait ServerDatabase {
    /// Finds the record of the network named exactly `name`.
    fn find_record(&self, name: &NetworkName) -> Option<&ServerRecord>;

    /// Finds the record of the network named exactly `name` for mutation.
    fn find_record_mut(&mut self, name: &NetworkName) -> Option<&mut ServerRecord>;

    /// Registers `network` and returns its new, empty record.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbError::DuplicateNetwork`] and leaves the database
    /// unchanged when a network with the same name exists.
    fn insert_network(&mut self, network: Network) -> ServerDbResult<&mut ServerRecord>;

    /// Removes the network named `name` together with its servers.
    fn remove_network(&mut self, name: &NetworkName) -> Option<ServerRecord>;

    /// Iterates over every record in insertion order.
    fn records(&self) -> Box<dyn Iterator<Item = &ServerRecord> + '_>;

    /// Returns the number of networks.
    fn len(&self) -> usize;

    /// Returns whether no network is registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the network named exactly `name`.
    fn find_network(&self, name: &NetworkName) -> Option<&Network> {
        self.find_record(name).map(ServerRecord::network)
    }

    /// Searches every network for a server matching `hostname`.
    ///
    /// Networks are visited in iteration order and servers in insertion
    /// order; the first match wins. This is a linear scan.
    fn find_server_anywhere(&self, hostname: &HostName) -> Option<(&Network, &Server)> {
        self.records().find_map(|record| {
            record
                .find_server(hostname)
                .map(|server| (record.network(), server))
        })
    }
}

/// Errors returned by server database implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerDbError {
    /// A network with the same name is already registered.
    #[error("duplicate network name: {0}")]
    DuplicateNetwork(NetworkName),
}
