//! Per-network server list.

use super::{HostName, Network, Server, ServerDbDomainError};
use serde::{Deserialize, Serialize};

/// A network together with its ordered, owned servers.
///
/// Servers keep their insertion order. Lookup compares hostnames ignoring
/// letter case and returns the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    network: Network,
    #[serde(default)]
    servers: Vec<Server>,
}

impl ServerRecord {
    /// Creates an empty record for `network`.
    #[must_use]
    pub const fn new(network: Network) -> Self {
        Self {
            network,
            servers: Vec::new(),
        }
    }

    /// Returns the owned network.
    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Returns the owned network for mutation.
    pub const fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Returns the servers in insertion order.
    #[must_use]
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Returns the number of servers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Returns whether the record has no servers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Finds the server whose hostname matches `hostname`, ignoring case.
    #[must_use]
    pub fn find_server(&self, hostname: &HostName) -> Option<&Server> {
        self.servers.iter().find(|server| server.hostname() == hostname)
    }

    /// Finds the server whose hostname matches `hostname` for mutation.
    pub fn find_server_mut(&mut self, hostname: &HostName) -> Option<&mut Server> {
        self.servers
            .iter_mut()
            .find(|server| server.hostname() == hostname)
    }

    /// Appends `server` without checking for duplicates.
    ///
    /// Callers that need unique hostnames look the server up first, or use
    /// [`Self::try_insert_server`].
    pub fn insert_server(&mut self, server: Server) {
        self.servers.push(server);
    }

    /// Appends `server` unless a server with the same hostname exists.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbDomainError::DuplicateServer`] and leaves the record
    /// unchanged when the hostname is already present.
    pub fn try_insert_server(&mut self, server: Server) -> Result<(), ServerDbDomainError> {
        if self.find_server(server.hostname()).is_some() {
            return Err(ServerDbDomainError::DuplicateServer {
                network: self.network.name().as_str().to_owned(),
                hostname: server.hostname().as_str().to_owned(),
            });
        }
        self.servers.push(server);
        Ok(())
    }

    /// Removes and returns the server matching `hostname`.
    pub fn remove_server(&mut self, hostname: &HostName) -> Option<Server> {
        let position = self
            .servers
            .iter()
            .position(|server| server.hostname() == hostname)?;
        Some(self.servers.remove(position))
    }
}
