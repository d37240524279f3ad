//! Error types for server database domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating server database domain
/// values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerDbDomainError {
    /// The network name is empty after trimming.
    #[error("network name must not be empty")]
    EmptyNetworkName,

    /// The server hostname is empty after trimming.
    #[error("server hostname must not be empty")]
    EmptyHostName,

    /// A server with a case-insensitively equal hostname is already part of
    /// the network.
    #[error("server '{hostname}' already exists in network '{network}'")]
    DuplicateServer {
        /// Network owning the existing server.
        network: String,
        /// Hostname that collided.
        hostname: String,
    },

    /// The property name does not match any known network or server property.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The property can be read but never assigned.
    #[error("property '{0}' is read-only")]
    ReadOnlyProperty(String),

    /// A boolean property was assigned something that is not a flag value.
    #[error("invalid flag value '{0}' (expected 1/0, true/false, yes/no or on/off)")]
    InvalidFlagValue(String),
}
