//! Domain model for the IRC server database.
//!
//! Networks carry connection defaults, servers carry endpoints, and a
//! [`ServerRecord`] ties one network to its ordered servers. The domain has no
//! notion of storage or of the command layer that drives it.

mod error;
mod ids;
mod name;
mod network;
mod profile;
mod property;
mod record;
mod server;

pub use error::ServerDbDomainError;
pub use ids::ServerId;
pub use name::{HostName, NetworkName, hostnames_match};
pub use network::Network;
pub use profile::{ConnectionProfile, ProfileField};
pub use property::{
    NetworkProperty, PropertyValue, ServerProperty, effective_value, parse_flag, parse_port,
};
pub use record::ServerRecord;
pub use server::{DEFAULT_PORT, Server, ServerFlag};
