//! Service layer for the IRC server database.
//!
//! Provides [`ServerDbService`], the typed surface a command or scripting
//! layer calls: one method per external operation, each returning a value
//! or a [`CommandOutcome`].

use super::command::{
    CommandOutcome, QuietMode, execute, require_absent, require_param, require_present,
};
use super::error::{Parameter, ServerDbServiceError, ServerDbServiceResult, Target};
use super::requests::{AddNetworkRequest, AddServerRequest};
use crate::server_db::{
    config::{NetworkSeed, ServerDbConfig, ServerSeed},
    domain::{
        HostName, Network, NetworkName, NetworkProperty, PropertyValue, Server, ServerProperty,
        ServerRecord, parse_port,
    },
    ports::ServerDatabase,
};
use tracing::{debug, info, warn};

/// Lookup and mutation service over a [`ServerDatabase`].
///
/// The service owns its database. Queries take `&self` and mutations take
/// `&mut self`; hosts that share one service across threads wrap it in their
/// own lock.
#[derive(Debug, Clone)]
pub struct ServerDbService<D>
where
    D: ServerDatabase,
{
    database: D,
    config: ServerDbConfig,
}

impl<D> ServerDbService<D>
where
    D: ServerDatabase,
{
    /// Creates a service over `database`.
    ///
    /// Network seeds in `config` are ignored; use [`Self::from_config`] to
    /// apply them.
    #[must_use]
    pub const fn new(database: D, config: ServerDbConfig) -> Self {
        Self { database, config }
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &D {
        &self.database
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerDbConfig {
        &self.config
    }

    /// Returns whether a network named exactly `name` exists.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when `name` is empty.
    pub fn network_exists(&self, name: &str) -> ServerDbServiceResult<bool> {
        let network_name = parse_network_name(name)?;
        Ok(self.database.find_network(&network_name).is_some())
    }

    /// Returns whether a server matching `hostname` exists.
    ///
    /// With a network, only that network is searched and a missing network
    /// yields `false`. Without one (or with an empty one), every network is
    /// searched.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when `hostname` is
    /// empty.
    pub fn server_exists(
        &self,
        hostname: &str,
        network: Option<&str>,
    ) -> ServerDbServiceResult<bool> {
        let host = parse_host_name(hostname)?;
        match network.filter(|name| !name.trim().is_empty()) {
            Some(name) => {
                let scope = NetworkName::new(name)?;
                Ok(self
                    .database
                    .find_record(&scope)
                    .is_some_and(|record| record.find_server(&host).is_some()))
            }
            None => Ok(self.database.find_server_anywhere(&host).is_some()),
        }
    }

    /// Reads a network property.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when `name` is empty
    /// or [`ServerDbServiceError::NotFound`] when the network does not exist.
    pub fn network_property(
        &self,
        name: &str,
        property: NetworkProperty,
    ) -> ServerDbServiceResult<PropertyValue> {
        let network_name = parse_network_name(name)?;
        let network = require_present(self.database.find_network(&network_name), || {
            Target::network(&network_name)
        })?;
        Ok(network.property(property))
    }

    /// Reads a server property, falling back to the network's defaults for
    /// inherited fields the server does not set itself.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when either name is
    /// empty or [`ServerDbServiceError::NotFound`] when the network or the
    /// server does not exist.
    pub fn server_property(
        &self,
        network: &str,
        hostname: &str,
        property: ServerProperty,
    ) -> ServerDbServiceResult<PropertyValue> {
        let (record, server) = self.resolve_server(network, hostname)?;
        Ok(server.property(record.network(), property))
    }

    /// Returns the server entry matching `hostname` in `network`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::server_property`].
    pub fn find_server(&self, network: &str, hostname: &str) -> ServerDbServiceResult<&Server> {
        self.resolve_server(network, hostname)
            .map(|(_, server)| server)
    }

    /// Adds a network.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when the name is
    /// empty, or [`ServerDbServiceError::AlreadyExists`] when the network
    /// exists and `quiet` is disabled.
    pub fn add_network(
        &mut self,
        request: AddNetworkRequest,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let AddNetworkRequest { name, auto_connect } = request;
        let network_name = parse_network_name(&name)?;
        let resolved = require_absent(self.database.find_network(&network_name), || {
            Target::network(&network_name)
        });

        let database = &mut self.database;
        execute(quiet, resolved, |()| {
            let network = Network::new(network_name.clone()).with_auto_connect(auto_connect);
            database.insert_network(network)?;
            info!(network = %network_name, auto_connect, "added network");
            Ok(())
        })
    }

    /// Adds a server to an existing network.
    ///
    /// A missing or unparsable port selects the configured default port.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when a name is
    /// empty, [`ServerDbServiceError::NotFound`] when the network does not
    /// exist (even in quiet mode), or [`ServerDbServiceError::AlreadyExists`]
    /// when the server exists and `quiet` is disabled.
    pub fn add_server(
        &mut self,
        request: AddServerRequest,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let AddServerRequest {
            network,
            hostname,
            port,
            password,
            flags,
        } = request;
        let network_name = parse_network_name(&network)?;
        let host = parse_host_name(&hostname)?;
        let default_port = self.config.default_port;

        let record = self
            .database
            .find_record_mut(&network_name)
            .ok_or_else(|| ServerDbServiceError::NotFound(Target::network(&network_name)))?;
        let resolved = require_absent(record.find_server(&host), || {
            Target::server(&network_name, &host)
        });

        execute(quiet, resolved, |()| {
            let port_number = port
                .as_deref()
                .map_or(default_port, |raw| parse_port(raw, default_port));
            let mut server = Server::new(host.clone()).with_port(port_number);
            if let Some(secret) = password {
                server.set_password(secret);
            }
            for flag in flags {
                server.set_flag(flag, true);
            }
            record.insert_server(server);
            info!(network = %network_name, hostname = %host, port = port_number, "added server");
            Ok(())
        })
    }

    /// Assigns a network property from its textual value.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when the name or the
    /// value is empty, [`ServerDbServiceError::NotFound`] when the network
    /// does not exist and `quiet` is disabled, or
    /// [`ServerDbServiceError::Domain`] when the property rejects the value.
    pub fn set_network_property(
        &mut self,
        name: &str,
        property: NetworkProperty,
        value: &str,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let network_name = parse_network_name(name)?;
        require_param(value, Parameter::Value)?;
        let resolved = require_present(
            self.database
                .find_record_mut(&network_name)
                .map(ServerRecord::network_mut),
            || Target::network(&network_name),
        );

        execute(quiet, resolved, |network| {
            network.assign(property, value)?;
            debug!(network = %network_name, %property, "updated network property");
            Ok(())
        })
    }

    /// Assigns a server property from its textual value.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when a name or the
    /// value is empty, [`ServerDbServiceError::NotFound`] when the network or
    /// server does not exist and `quiet` is disabled, or
    /// [`ServerDbServiceError::Domain`] when the property rejects the value.
    pub fn set_server_property(
        &mut self,
        network: &str,
        hostname: &str,
        property: ServerProperty,
        value: &str,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let network_name = parse_network_name(network)?;
        let host = parse_host_name(hostname)?;
        require_param(value, Parameter::Value)?;
        let default_port = self.config.default_port;
        let resolved = require_present(self.database.find_record_mut(&network_name), || {
            Target::network(&network_name)
        })
        .and_then(|record| {
            require_present(record.find_server_mut(&host), || {
                Target::server(&network_name, &host)
            })
        });

        execute(quiet, resolved, |server| {
            server.assign(property, value, default_port)?;
            debug!(network = %network_name, hostname = %host, %property, "updated server property");
            Ok(())
        })
    }

    /// Removes a network and all of its servers.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when the name is
    /// empty or [`ServerDbServiceError::NotFound`] when the network does not
    /// exist and `quiet` is disabled.
    pub fn remove_network(
        &mut self,
        name: &str,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let network_name = parse_network_name(name)?;
        let resolved = require_present(self.database.find_network(&network_name), || {
            Target::network(&network_name)
        })
        .map(|_| ());

        let database = &mut self.database;
        execute(quiet, resolved, |()| {
            if let Some(record) = database.remove_network(&network_name) {
                info!(network = %network_name, servers = record.len(), "removed network");
            }
            Ok(())
        })
    }

    /// Removes a server from its network.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError::MissingParameter`] when a name is
    /// empty or [`ServerDbServiceError::NotFound`] when the network or server
    /// does not exist and `quiet` is disabled.
    pub fn remove_server(
        &mut self,
        network: &str,
        hostname: &str,
        quiet: QuietMode,
    ) -> ServerDbServiceResult<CommandOutcome> {
        let network_name = parse_network_name(network)?;
        let host = parse_host_name(hostname)?;
        let resolved = require_present(self.database.find_record_mut(&network_name), || {
            Target::network(&network_name)
        })
        .and_then(|record| {
            require_present(record.find_server(&host), || {
                Target::server(&network_name, &host)
            })?;
            Ok(record)
        });

        execute(quiet, resolved, |record| {
            if let Some(removed) = record.remove_server(&host) {
                info!(network = %network_name, hostname = %removed.hostname(), "removed server");
            }
            Ok(())
        })
    }

    fn resolve_server(
        &self,
        network: &str,
        hostname: &str,
    ) -> ServerDbServiceResult<(&ServerRecord, &Server)> {
        let network_name = parse_network_name(network)?;
        let host = parse_host_name(hostname)?;
        let record = require_present(self.database.find_record(&network_name), || {
            Target::network(&network_name)
        })?;
        let server = require_present(record.find_server(&host), || {
            Target::server(&network_name, &host)
        })?;
        Ok((record, server))
    }

    fn seed_network(&mut self, seed: &NetworkSeed) -> ServerDbServiceResult<()> {
        let request =
            AddNetworkRequest::new(seed.name.as_str()).with_auto_connect(seed.auto_connect);
        if !self.add_network(request, QuietMode::Enabled)?.is_applied() {
            warn!(network = %seed.name, "skipped duplicate network seed");
            return Ok(());
        }
        for (field, value) in seed.profile.iter() {
            self.set_network_property(
                &seed.name,
                NetworkProperty::Profile(field),
                value,
                QuietMode::Disabled,
            )?;
        }
        for server in &seed.servers {
            self.seed_server(&seed.name, server)?;
        }
        Ok(())
    }

    fn seed_server(&mut self, network: &str, seed: &ServerSeed) -> ServerDbServiceResult<()> {
        let mut request = AddServerRequest::new(network, seed.hostname.as_str());
        if let Some(port) = seed.port {
            request = request.with_port(port.to_string());
        }
        if let Some(password) = &seed.password {
            request = request.with_password(password.as_str());
        }
        for flag in &seed.flags {
            request = request.with_flag(*flag);
        }
        if !self.add_server(request, QuietMode::Enabled)?.is_applied() {
            warn!(network, hostname = %seed.hostname, "skipped duplicate server seed");
            return Ok(());
        }
        for (field, value) in seed.profile.iter() {
            self.set_server_property(
                network,
                &seed.hostname,
                ServerProperty::Profile(field),
                value,
                QuietMode::Disabled,
            )?;
        }
        Ok(())
    }
}

impl<D> ServerDbService<D>
where
    D: ServerDatabase + Default,
{
    /// Creates a service over an empty database and registers the networks
    /// and servers seeded in `config`.
    ///
    /// Seeds are applied in order through the regular add commands in quiet
    /// mode: a repeated network or server seed is skipped with a warning.
    /// The seeds are consumed; [`Self::config`] reports none afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDbServiceError`] when a seed has an empty name or
    /// hostname.
    pub fn from_config(mut config: ServerDbConfig) -> ServerDbServiceResult<Self> {
        let seeds = std::mem::take(&mut config.networks);
        let mut service = Self::new(D::default(), config);
        for seed in &seeds {
            service.seed_network(seed)?;
        }
        Ok(service)
    }
}

fn parse_network_name(value: &str) -> ServerDbServiceResult<NetworkName> {
    Ok(NetworkName::new(require_param(value, Parameter::NetworkName)?)?)
}

fn parse_host_name(value: &str) -> ServerDbServiceResult<HostName> {
    Ok(HostName::new(require_param(value, Parameter::ServerName)?)?)
}
