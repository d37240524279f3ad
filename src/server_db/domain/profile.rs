//! Connection profile fields shared by networks and servers.

use super::ServerDbDomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Free-text connection setting carried by both networks and servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Nickname used when registering with the server.
    NickName,
    /// Username sent in the `USER` command.
    UserName,
    /// Realname sent in the `USER` command.
    RealName,
    /// Encoding for server-specific text such as channel names and nicknames.
    Encoding,
    /// Encoding for message text.
    TextEncoding,
    /// Human-readable description.
    Description,
    /// Command run right after the connection is established.
    ConnectCommand,
    /// Command run after the login sequence completes.
    LoginCommand,
}

impl ProfileField {
    /// Every profile field, in display order.
    pub const ALL: [Self; 8] = [
        Self::NickName,
        Self::UserName,
        Self::RealName,
        Self::Encoding,
        Self::TextEncoding,
        Self::Description,
        Self::ConnectCommand,
        Self::LoginCommand,
    ];

    /// Returns the canonical property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NickName => "nickname",
            Self::UserName => "username",
            Self::RealName => "realname",
            Self::Encoding => "encoding",
            Self::TextEncoding => "textencoding",
            Self::Description => "description",
            Self::ConnectCommand => "connectcommand",
            Self::LoginCommand => "logincommand",
        }
    }

    /// Returns whether a server without its own value falls back to the
    /// network's value for this field.
    ///
    /// Descriptions describe one entity and are never inherited.
    #[must_use]
    pub const fn is_inherited(self) -> bool {
        !matches!(self, Self::Description)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProfileField {
    type Error = ServerDbDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let key = property_key(value);
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .or_else(|| match key.as_str() {
                "nick" => Some(Self::NickName),
                "user" => Some(Self::UserName),
                "onconnectcommand" => Some(Self::ConnectCommand),
                "onlogincommand" => Some(Self::LoginCommand),
                _ => None,
            })
            .ok_or_else(|| ServerDbDomainError::UnknownProperty(value.to_owned()))
    }
}

/// Normalises an external property name for table lookup.
///
/// Matching ignores ASCII case, underscores and hyphens, so `NickName`,
/// `nick_name` and `nick-name` are the same key.
pub(crate) fn property_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Deserializes an optional text field, reading `""` as unset.
pub(crate) fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(text.filter(|value| !value.is_empty()))
}

/// Optional free-text settings of a network or server.
///
/// Assigning an empty string clears a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    nick_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    user_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    real_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    encoding: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    text_encoding: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    connect_command: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    login_command: Option<String>,
}

impl ConnectionProfile {
    /// Creates a profile with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`, if set.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Assigns `field`; an empty value clears it.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let text = value.into();
        *self.slot_mut(field) = if text.is_empty() { None } else { Some(text) };
    }

    /// Sets `field` and returns the updated profile.
    #[must_use]
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterates over the fields that are set, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        ProfileField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Returns whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    const fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::NickName => &self.nick_name,
            ProfileField::UserName => &self.user_name,
            ProfileField::RealName => &self.real_name,
            ProfileField::Encoding => &self.encoding,
            ProfileField::TextEncoding => &self.text_encoding,
            ProfileField::Description => &self.description,
            ProfileField::ConnectCommand => &self.connect_command,
            ProfileField::LoginCommand => &self.login_command,
        }
    }

    const fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::NickName => &mut self.nick_name,
            ProfileField::UserName => &mut self.user_name,
            ProfileField::RealName => &mut self.real_name,
            ProfileField::Encoding => &mut self.encoding,
            ProfileField::TextEncoding => &mut self.text_encoding,
            ProfileField::Description => &mut self.description,
            ProfileField::ConnectCommand => &mut self.connect_command,
            ProfileField::LoginCommand => &mut self.login_command,
        }
    }
}
