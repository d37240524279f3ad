//! Validated network and server names.

use super::ServerDbDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Validated network name.
///
/// Network names are trimmed on construction and otherwise compared exactly:
/// `Freenode` and `freenode` are two different networks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkName(String);

impl NetworkName {
    /// Creates a validated network name.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbDomainError::EmptyNetworkName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ServerDbDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ServerDbDomainError::EmptyNetworkName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the network name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NetworkName {
    type Error = ServerDbDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NetworkName> for String {
    fn from(value: NetworkName) -> Self {
        value.0
    }
}

// Equality and hashing are both derived from the inner `String`, so borrowed
// `str` lookups agree with owned keys.
impl Borrow<str> for NetworkName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NetworkName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated server hostname with case-insensitive identity.
///
/// The original spelling is kept for display, while equality and hashing fold
/// letter case so that `irc.Example.net` and `IRC.EXAMPLE.NET` name the same
/// server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostName(String);

impl HostName {
    /// Creates a validated hostname.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbDomainError::EmptyHostName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ServerDbDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ServerDbDomainError::EmptyHostName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the hostname as originally spelled.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compares two hostnames, ignoring letter case.
///
/// Folding uses Unicode lowercase mapping, so internationalised hostnames
/// compare the same way as ASCII ones.
#[must_use]
pub fn hostnames_match(left: &str, right: &str) -> bool {
    folded(left).eq(folded(right))
}

fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

impl PartialEq for HostName {
    fn eq(&self, other: &Self) -> bool {
        hostnames_match(&self.0, &other.0)
    }
}

impl Eq for HostName {}

impl Hash for HostName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for ch in folded(&self.0) {
            ch.hash(state);
        }
    }
}

impl TryFrom<String> for HostName {
    type Error = ServerDbDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HostName> for String {
    fn from(value: HostName) -> Self {
        value.0
    }
}

impl AsRef<str> for HostName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
