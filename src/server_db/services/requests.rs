//! Request payloads for commands that create networks and servers.

use crate::server_db::domain::ServerFlag;

/// Request payload for adding a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddNetworkRequest {
    pub(super) name: String,
    pub(super) auto_connect: bool,
}

impl AddNetworkRequest {
    /// Creates a request for a network that does not auto-connect.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_connect: false,
        }
    }

    /// Sets whether the network connects at application start.
    #[must_use]
    pub const fn with_auto_connect(mut self, auto_connect: bool) -> Self {
        self.auto_connect = auto_connect;
        self
    }
}

/// Request payload for adding a server to an existing network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddServerRequest {
    pub(super) network: String,
    pub(super) hostname: String,
    pub(super) port: Option<String>,
    pub(super) password: Option<String>,
    pub(super) flags: Vec<ServerFlag>,
}

impl AddServerRequest {
    /// Creates a request for a server on the default port with no password
    /// and every flag disabled.
    #[must_use]
    pub fn new(network: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            hostname: hostname.into(),
            port: None,
            password: None,
            flags: Vec::new(),
        }
    }

    /// Sets the port in textual form; unparsable text selects the configured
    /// default port.
    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Sets the connection password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Enables `flag` on the new server.
    #[must_use]
    pub fn with_flag(mut self, flag: ServerFlag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }
}
