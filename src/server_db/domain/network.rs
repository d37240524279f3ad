//! IRC network: named connection defaults for its member servers.

use super::{ConnectionProfile, NetworkName, ProfileField};
use serde::{Deserialize, Serialize};

/// Named group of connection defaults shared by the servers of one network.
///
/// A network owns no servers itself; the owning
/// [`ServerRecord`](super::ServerRecord) does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    name: NetworkName,
    #[serde(default)]
    profile: ConnectionProfile,
    #[serde(default)]
    auto_connect: bool,
}

impl Network {
    /// Creates a network with no defaults and auto-connect disabled.
    #[must_use]
    pub fn new(name: NetworkName) -> Self {
        Self {
            name,
            profile: ConnectionProfile::new(),
            auto_connect: false,
        }
    }

    /// Sets the auto-connect flag and returns the updated network.
    #[must_use]
    pub const fn with_auto_connect(mut self, auto_connect: bool) -> Self {
        self.auto_connect = auto_connect;
        self
    }

    /// Sets a profile field and returns the updated network.
    #[must_use]
    pub fn with_profile_field(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.profile.set(field, value);
        self
    }

    /// Returns the network name.
    #[must_use]
    pub const fn name(&self) -> &NetworkName {
        &self.name
    }

    /// Returns the connection defaults.
    #[must_use]
    pub const fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// Returns the connection defaults for mutation.
    pub const fn profile_mut(&mut self) -> &mut ConnectionProfile {
        &mut self.profile
    }

    /// Returns whether the network connects at application start.
    #[must_use]
    pub const fn auto_connect(&self) -> bool {
        self.auto_connect
    }

    /// Enables or disables auto-connect.
    pub const fn set_auto_connect(&mut self, auto_connect: bool) {
        self.auto_connect = auto_connect;
    }
}
