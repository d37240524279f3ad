//! Shared world state for server database BDD scenarios.

use ircnetdb::server_db::{
    adapters::memory::InMemoryServerDatabase,
    config::ServerDbConfig,
    domain::{ProfileField, PropertyValue, ServerProperty},
    services::{CommandOutcome, ServerDbService, ServerDbServiceResult},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestService = ServerDbService<InMemoryServerDatabase>;

/// Scenario world for server database behaviour tests.
pub struct ServerDbWorld {
    /// The service under test.
    pub service: TestService,
    /// Result of the last mutating command.
    pub last_result: Option<ServerDbServiceResult<CommandOutcome>>,
}

impl ServerDbWorld {
    /// Creates a world over an empty database.
    #[must_use]
    pub fn new() -> Self {
        let service =
            ServerDbService::new(InMemoryServerDatabase::new(), ServerDbConfig::default());
        Self {
            service,
            last_result: None,
        }
    }

    /// Returns the effective nickname of a server.
    pub fn server_nickname(&self, network: &str, hostname: &str) -> eyre::Result<String> {
        let value = self
            .service
            .server_property(
                network,
                hostname,
                ServerProperty::Profile(ProfileField::NickName),
            )
            .map_err(|err| eyre::eyre!("nickname lookup failed: {err}"))?;
        match value {
            PropertyValue::Text(text) => Ok(text),
            other => Err(eyre::eyre!("expected a text value, got {other:?}")),
        }
    }
}

impl Default for ServerDbWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ServerDbWorld {
    ServerDbWorld::default()
}
