//! In-memory server database backed by an insertion-ordered map.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::server_db::{
    domain::{Network, NetworkName, ServerRecord},
    ports::{ServerDatabase, ServerDbError, ServerDbResult},
};

/// In-memory server database.
///
/// Records iterate in the order their networks were inserted. Removing a
/// network keeps the relative order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryServerDatabase {
    records: IndexMap<NetworkName, ServerRecord>,
}

impl InMemoryServerDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServerDatabase for InMemoryServerDatabase {
    fn find_record(&self, name: &NetworkName) -> Option<&ServerRecord> {
        self.records.get(name)
    }

    fn find_record_mut(&mut self, name: &NetworkName) -> Option<&mut ServerRecord> {
        self.records.get_mut(name)
    }

    fn insert_network(&mut self, network: Network) -> ServerDbResult<&mut ServerRecord> {
        match self.records.entry(network.name().clone()) {
            Entry::Occupied(entry) => Err(ServerDbError::DuplicateNetwork(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(ServerRecord::new(network))),
        }
    }

    fn remove_network(&mut self, name: &NetworkName) -> Option<ServerRecord> {
        self.records.shift_remove(name)
    }

    fn records(&self) -> Box<dyn Iterator<Item = &ServerRecord> + '_> {
        Box::new(self.records.values())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
