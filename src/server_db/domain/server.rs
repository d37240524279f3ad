//! IRC server entry: one connection endpoint of a network.

use super::profile::{deserialize_non_empty, property_key};
use super::{ConnectionProfile, HostName, ProfileField, ServerDbDomainError, ServerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port used when none is given or the given one cannot be parsed.
pub const DEFAULT_PORT: u16 = 6667;

/// Boolean connection option of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerFlag {
    /// Connect at application start.
    AutoConnect,
    /// Connect over TLS.
    Ssl,
    /// Connect over an IPv6 socket.
    Ipv6,
    /// Remember the resolved address after the first connect.
    CacheIp,
}

impl ServerFlag {
    /// Every server flag.
    pub const ALL: [Self; 4] = [Self::AutoConnect, Self::Ssl, Self::Ipv6, Self::CacheIp];

    /// Returns the canonical property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoConnect => "autoconnect",
            Self::Ssl => "ssl",
            Self::Ipv6 => "ipv6",
            Self::CacheIp => "cacheip",
        }
    }
}

impl fmt::Display for ServerFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ServerFlag {
    type Error = ServerDbDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let key = property_key(value);
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str() == key)
            .or_else(|| match key.as_str() {
                "usessl" | "tls" => Some(Self::Ssl),
                "isipv6" => Some(Self::Ipv6),
                _ => None,
            })
            .ok_or_else(|| ServerDbDomainError::UnknownProperty(value.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ServerFlags {
    #[serde(default)]
    auto_connect: bool,
    #[serde(default)]
    ssl: bool,
    #[serde(default)]
    ipv6: bool,
    #[serde(default)]
    cache_ip: bool,
}

impl ServerFlags {
    const fn get(self, flag: ServerFlag) -> bool {
        match flag {
            ServerFlag::AutoConnect => self.auto_connect,
            ServerFlag::Ssl => self.ssl,
            ServerFlag::Ipv6 => self.ipv6,
            ServerFlag::CacheIp => self.cache_ip,
        }
    }

    const fn set(&mut self, flag: ServerFlag, enabled: bool) {
        match flag {
            ServerFlag::AutoConnect => self.auto_connect = enabled,
            ServerFlag::Ssl => self.ssl = enabled,
            ServerFlag::Ipv6 => self.ipv6 = enabled,
            ServerFlag::CacheIp => self.cache_ip = enabled,
        }
    }
}

/// One IRC endpoint: hostname, port, credentials and connection options.
///
/// The identifier and hostname are fixed at construction; every other
/// attribute can change before or after the server joins a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    id: ServerId,
    hostname: HostName,
    port: u16,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    password: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    ip: Option<String>,
    #[serde(default)]
    profile: ConnectionProfile,
    #[serde(default)]
    flags: ServerFlags,
}

impl Server {
    /// Creates a server on [`DEFAULT_PORT`] with a fresh identifier.
    #[must_use]
    pub fn new(hostname: HostName) -> Self {
        Self::with_id(ServerId::new(), hostname)
    }

    /// Creates a server with a known identifier.
    #[must_use]
    pub fn with_id(id: ServerId, hostname: HostName) -> Self {
        Self {
            id,
            hostname,
            port: DEFAULT_PORT,
            password: None,
            ip: None,
            profile: ConnectionProfile::new(),
            flags: ServerFlags::default(),
        }
    }

    /// Sets the port and returns the updated server.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the password and returns the updated server.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.set_password(password);
        self
    }

    /// Enables `flag` and returns the updated server.
    #[must_use]
    pub const fn with_flag(mut self, flag: ServerFlag) -> Self {
        self.flags.set(flag, true);
        self
    }

    /// Sets a profile field and returns the updated server.
    #[must_use]
    pub fn with_profile_field(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.profile.set(field, value);
        self
    }

    /// Returns the stable identifier.
    #[must_use]
    pub const fn id(&self) -> ServerId {
        self.id
    }

    /// Returns the hostname.
    #[must_use]
    pub const fn hostname(&self) -> &HostName {
        &self.hostname
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Sets the port.
    pub const fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Returns the password, if set.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Sets the password; an empty value clears it.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = non_empty(password.into());
    }

    /// Returns the cached IP address, if any.
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Sets the cached IP address; an empty value clears it.
    pub fn set_ip(&mut self, ip: impl Into<String>) {
        self.ip = non_empty(ip.into());
    }

    /// Returns the server's own profile, without network fallback.
    #[must_use]
    pub const fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// Returns the server's own profile for mutation.
    pub const fn profile_mut(&mut self) -> &mut ConnectionProfile {
        &mut self.profile
    }

    /// Returns whether `flag` is enabled.
    #[must_use]
    pub const fn flag(&self, flag: ServerFlag) -> bool {
        self.flags.get(flag)
    }

    /// Enables or disables `flag`.
    pub const fn set_flag(&mut self, flag: ServerFlag, enabled: bool) {
        self.flags.set(flag, enabled);
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
