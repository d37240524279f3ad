//! Service-level errors for server database commands.

use crate::server_db::{
    domain::{HostName, NetworkName, ServerDbDomainError},
    ports::ServerDbError,
};
use std::fmt;
use thiserror::Error;

/// Required argument of a server database command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// The network name.
    NetworkName,
    /// The server hostname.
    ServerName,
    /// The value being assigned.
    Value,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NetworkName => "network name",
            Self::ServerName => "server name",
            Self::Value => "value",
        })
    }
}

/// Entity a command tried to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A network.
    Network(NetworkName),
    /// A server inside a network.
    Server {
        /// Owning network.
        network: NetworkName,
        /// Server hostname.
        hostname: HostName,
    },
}

impl Target {
    pub(crate) fn network(name: &NetworkName) -> Self {
        Self::Network(name.clone())
    }

    pub(crate) fn server(network: &NetworkName, hostname: &HostName) -> Self {
        Self::Server {
            network: network.clone(),
            hostname: hostname.clone(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(name) => write!(f, "network '{name}'"),
            Self::Server { network, hostname } => {
                write!(f, "server '{hostname}' in network '{network}'")
            }
        }
    }
}

/// Coarse classification of a [`ServerDbServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was empty.
    MissingParameter,
    /// The referenced network or server does not exist.
    NotFound,
    /// The network or server being added already exists.
    AlreadyExists,
    /// The property name or value was rejected.
    Invalid,
}

/// Errors returned by [`ServerDbService`](super::ServerDbService) commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerDbServiceError {
    /// A required argument was empty.
    #[error("you must provide the {0} as parameter")]
    MissingParameter(Parameter),

    /// The referenced network or server does not exist.
    #[error("the specified {0} does not exist")]
    NotFound(Target),

    /// The network or server being added already exists.
    #[error("the specified {0} already exists")]
    AlreadyExists(Target),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ServerDbDomainError),

    /// The database rejected the operation.
    #[error(transparent)]
    Repository(#[from] ServerDbError),
}

impl ServerDbServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_)
            | Self::Repository(ServerDbError::DuplicateNetwork(_))
            | Self::Domain(ServerDbDomainError::DuplicateServer { .. }) => {
                ErrorKind::AlreadyExists
            }
            Self::Domain(
                ServerDbDomainError::EmptyNetworkName | ServerDbDomainError::EmptyHostName,
            ) => ErrorKind::MissingParameter,
            Self::Domain(_) => ErrorKind::Invalid,
        }
    }
}

/// Result type for server database service operations.
pub type ServerDbServiceResult<T> = Result<T, ServerDbServiceError>;
