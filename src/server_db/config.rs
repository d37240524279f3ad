//! Server database configuration.
//!
//! Configuration is plain data. Hosts load it from their own settings source
//! and hand it to [`ServerDbService::from_config`](super::services::ServerDbService::from_config).
//!
//! # Examples
//!
//! ```
//! use ircnetdb::server_db::{config::ServerDbConfig, domain::DEFAULT_PORT};
//!
//! let config = ServerDbConfig::default();
//! assert_eq!(config.default_port, DEFAULT_PORT);
//! assert!(config.networks.is_empty());
//! ```

use crate::server_db::domain::{ConnectionProfile, DEFAULT_PORT, ServerFlag};
use serde::{Deserialize, Serialize};

/// Settings for a server database service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerDbConfig {
    /// Port given to servers added without a usable port.
    pub default_port: u16,
    /// Networks to register when the service is built from this
    /// configuration.
    pub networks: Vec<NetworkSeed>,
}

impl Default for ServerDbConfig {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT,
            networks: Vec::new(),
        }
    }
}

impl ServerDbConfig {
    /// Adds a network seed and returns the updated configuration.
    #[must_use]
    pub fn with_network(mut self, seed: NetworkSeed) -> Self {
        self.networks.push(seed);
        self
    }
}

/// A network registered at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSeed {
    /// Network name.
    pub name: String,
    /// Whether the network connects at application start.
    #[serde(default)]
    pub auto_connect: bool,
    /// Connection defaults for member servers.
    #[serde(default)]
    pub profile: ConnectionProfile,
    /// Member servers, in order.
    #[serde(default)]
    pub servers: Vec<ServerSeed>,
}

impl NetworkSeed {
    /// Creates a seed with no defaults and no servers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_connect: false,
            profile: ConnectionProfile::new(),
            servers: Vec::new(),
        }
    }

    /// Adds a server seed and returns the updated network seed.
    #[must_use]
    pub fn with_server(mut self, server: ServerSeed) -> Self {
        self.servers.push(server);
        self
    }
}

/// A server registered at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSeed {
    /// Server hostname.
    pub hostname: String,
    /// Port; the configured default when absent.
    #[serde(default)]
    pub port: Option<u16>,
    /// Connection password.
    #[serde(default)]
    pub password: Option<String>,
    /// Flags enabled on the server.
    #[serde(default)]
    pub flags: Vec<ServerFlag>,
    /// Server-specific connection settings.
    #[serde(default)]
    pub profile: ConnectionProfile,
}

impl ServerSeed {
    /// Creates a seed on the default port with every flag disabled.
    #[must_use]
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: None,
            password: None,
            flags: Vec::new(),
            profile: ConnectionProfile::new(),
        }
    }
}
