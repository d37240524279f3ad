//! Name-keyed property access for networks and servers.
//!
//! The command layer addresses attributes by name. Rather than one getter and
//! one setter per attribute, names are parsed once into [`NetworkProperty`]
//! or [`ServerProperty`] and dispatched through [`Network::property`],
//! [`Network::assign`], [`Server::property`] and [`Server::assign`].

use super::profile::property_key;
use super::{Network, ProfileField, Server, ServerDbDomainError, ServerFlag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a network or server property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Free text; unset fields read as the empty string.
    Text(String),
    /// A TCP port.
    Port(u16),
    /// A boolean option.
    Flag(bool),
}

impl PropertyValue {
    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Port(_) | Self::Flag(_) => None,
        }
    }

    /// Returns the port, if this is a port value.
    #[must_use]
    pub const fn as_port(&self) -> Option<u16> {
        match self {
            Self::Port(port) => Some(*port),
            Self::Text(_) | Self::Flag(_) => None,
        }
    }

    /// Returns the flag, if this is a flag value.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) | Self::Port(_) => None,
        }
    }

    fn text(value: Option<&str>) -> Self {
        Self::Text(value.unwrap_or_default().to_owned())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Port(port) => write!(f, "{port}"),
            Self::Flag(flag) => f.write_str(if *flag { "1" } else { "0" }),
        }
    }
}

/// Addressable attribute of a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkProperty {
    /// The network name; read-only.
    Name,
    /// A connection default.
    Profile(ProfileField),
    /// The auto-connect flag.
    AutoConnect,
}

impl NetworkProperty {
    /// Returns the canonical property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Profile(field) => field.as_str(),
            Self::AutoConnect => "autoconnect",
        }
    }
}

impl fmt::Display for NetworkProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NetworkProperty {
    type Error = ServerDbDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match property_key(value).as_str() {
            "name" => Ok(Self::Name),
            "autoconnect" => Ok(Self::AutoConnect),
            _ => ProfileField::try_from(value).map(Self::Profile),
        }
    }
}

/// Addressable attribute of a [`Server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerProperty {
    /// A connection setting, inherited from the network where applicable.
    Profile(ProfileField),
    /// The cached IP address.
    Ip,
    /// The stable identifier; read-only.
    Id,
    /// The connection password.
    Password,
    /// The TCP port.
    Port,
    /// A boolean connection option.
    Flag(ServerFlag),
}

impl ServerProperty {
    /// Returns the canonical property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile(field) => field.as_str(),
            Self::Ip => "ip",
            Self::Id => "id",
            Self::Password => "password",
            Self::Port => "port",
            Self::Flag(flag) => flag.as_str(),
        }
    }
}

impl fmt::Display for ServerProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ServerProperty {
    type Error = ServerDbDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match property_key(value).as_str() {
            "ip" => Ok(Self::Ip),
            "id" => Ok(Self::Id),
            "password" => Ok(Self::Password),
            "port" => Ok(Self::Port),
            _ => ServerFlag::try_from(value)
                .map(Self::Flag)
                .or_else(|_| ProfileField::try_from(value).map(Self::Profile)),
        }
    }
}

/// Returns the value a server effectively uses for `field`.
///
/// The server's own value wins; inherited fields fall back to the network's
/// value; otherwise there is none.
#[must_use]
pub fn effective_value<'a>(
    server: &'a Server,
    network: &'a Network,
    field: ProfileField,
) -> Option<&'a str> {
    match server.profile().get(field) {
        Some(value) => Some(value),
        None if field.is_inherited() => network.profile().get(field),
        None => None,
    }
}

/// Parses a port, falling back to `default_port` when the text is not a
/// non-zero 16-bit number.
#[must_use]
pub fn parse_port(value: &str, default_port: u16) -> u16 {
    value
        .trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .unwrap_or(default_port)
}

/// Parses a flag value.
///
/// # Errors
///
/// Returns [`ServerDbDomainError::InvalidFlagValue`] for anything other than
/// `1/0`, `true/false`, `yes/no` or `on/off` (ASCII case-insensitive).
pub fn parse_flag(value: &str) -> Result<bool, ServerDbDomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ServerDbDomainError::InvalidFlagValue(value.to_owned())),
    }
}

impl Network {
    /// Reads `property`.
    #[must_use]
    pub fn property(&self, property: NetworkProperty) -> PropertyValue {
        match property {
            NetworkProperty::Name => PropertyValue::Text(self.name().as_str().to_owned()),
            NetworkProperty::Profile(field) => PropertyValue::text(self.profile().get(field)),
            NetworkProperty::AutoConnect => PropertyValue::Flag(self.auto_connect()),
        }
    }

    /// Assigns `property` from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbDomainError::ReadOnlyProperty`] for the name and
    /// [`ServerDbDomainError::InvalidFlagValue`] when auto-connect is given a
    /// non-flag value. The network is unchanged on error.
    pub fn assign(
        &mut self,
        property: NetworkProperty,
        value: &str,
    ) -> Result<(), ServerDbDomainError> {
        match property {
            NetworkProperty::Name => Err(ServerDbDomainError::ReadOnlyProperty(
                property.as_str().to_owned(),
            )),
            NetworkProperty::Profile(field) => {
                self.profile_mut().set(field, value);
                Ok(())
            }
            NetworkProperty::AutoConnect => {
                self.set_auto_connect(parse_flag(value)?);
                Ok(())
            }
        }
    }
}

impl Server {
    /// Reads `property`, falling back to `network` for inherited profile
    /// fields.
    #[must_use]
    pub fn property(&self, network: &Network, property: ServerProperty) -> PropertyValue {
        match property {
            ServerProperty::Profile(field) => {
                PropertyValue::text(effective_value(self, network, field))
            }
            ServerProperty::Ip => PropertyValue::text(self.ip()),
            ServerProperty::Id => PropertyValue::Text(self.id().to_string()),
            ServerProperty::Password => PropertyValue::text(self.password()),
            ServerProperty::Port => PropertyValue::Port(self.port()),
            ServerProperty::Flag(flag) => PropertyValue::Flag(self.flag(flag)),
        }
    }

    /// Assigns `property` from its textual form.
    ///
    /// Ports that do not parse fall back to `default_port`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbDomainError::ReadOnlyProperty`] for the identifier
    /// and [`ServerDbDomainError::InvalidFlagValue`] when a flag is given a
    /// non-flag value. The server is unchanged on error.
    pub fn assign(
        &mut self,
        property: ServerProperty,
        value: &str,
        default_port: u16,
    ) -> Result<(), ServerDbDomainError> {
        match property {
            ServerProperty::Id => {
                return Err(ServerDbDomainError::ReadOnlyProperty(
                    property.as_str().to_owned(),
                ));
            }
            ServerProperty::Profile(field) => self.profile_mut().set(field, value),
            ServerProperty::Ip => self.set_ip(value),
            ServerProperty::Password => self.set_password(value),
            ServerProperty::Port => self.set_port(parse_port(value, default_port)),
            ServerProperty::Flag(flag) => self.set_flag(flag, parse_flag(value)?),
        }
        Ok(())
    }
}
