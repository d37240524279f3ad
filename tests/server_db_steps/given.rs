//! Given steps for server database BDD scenarios.

use super::world::ServerDbWorld;
use eyre::WrapErr;
use ircnetdb::server_db::{
    domain::{NetworkProperty, ProfileField},
    services::{AddNetworkRequest, AddServerRequest, QuietMode},
};
use rstest_bdd_macros::given;

#[given("an empty server database")]
fn empty_database(world: &mut ServerDbWorld) {
    *world = ServerDbWorld::new();
}

#[given(r#"a network named "{name}""#)]
fn network_named(world: &mut ServerDbWorld, name: String) -> Result<(), eyre::Report> {
    world
        .service
        .add_network(AddNetworkRequest::new(name), QuietMode::Disabled)
        .wrap_err("add network for scenario")?;
    Ok(())
}

#[given(r#"a server "{hostname}" in network "{network}""#)]
fn server_in_network(
    world: &mut ServerDbWorld,
    hostname: String,
    network: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .add_server(AddServerRequest::new(network, hostname), QuietMode::Disabled)
        .wrap_err("add server for scenario")?;
    Ok(())
}

#[given(r#"the network "{network}" has nickname "{nick}""#)]
fn network_has_nickname(
    world: &mut ServerDbWorld,
    network: String,
    nick: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .set_network_property(
            &network,
            NetworkProperty::Profile(ProfileField::NickName),
            &nick,
            QuietMode::Disabled,
        )
        .wrap_err("set network nickname for scenario")?;
    Ok(())
}
