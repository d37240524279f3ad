//! When steps for server database BDD scenarios.

use super::world::ServerDbWorld;
use ircnetdb::server_db::{
    domain::{NetworkProperty, ProfileField, ServerFlag, ServerProperty},
    services::{AddNetworkRequest, AddServerRequest, QuietMode},
};
use rstest_bdd_macros::when;

#[when(r#"I add the network "{name}""#)]
fn add_network(world: &mut ServerDbWorld, name: String) -> Result<(), eyre::Report> {
    world
        .service
        .add_network(AddNetworkRequest::new(name), QuietMode::Disabled)
        .map_err(|err| eyre::eyre!("add_network failed: {err}"))?;
    Ok(())
}

#[when(r#"I add the auto-connecting network "{name}""#)]
fn add_auto_connecting_network(
    world: &mut ServerDbWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let request = AddNetworkRequest::new(name).with_auto_connect(true);
    world
        .service
        .add_network(request, QuietMode::Disabled)
        .map_err(|err| eyre::eyre!("add_network failed: {err}"))?;
    Ok(())
}

#[when(r#"I register the SSL server "{hostname}" with port "{port}" in network "{network}""#)]
fn add_ssl_server_on_port(
    world: &mut ServerDbWorld,
    hostname: String,
    port: String,
    network: String,
) -> Result<(), eyre::Report> {
    let request = AddServerRequest::new(network, hostname)
        .with_port(port)
        .with_flag(ServerFlag::Ssl);
    world
        .service
        .add_server(request, QuietMode::Disabled)
        .map_err(|err| eyre::eyre!("add_server failed: {err}"))?;
    Ok(())
}

#[when(r#"I add the server "{hostname}" to network "{network}""#)]
fn add_server(world: &mut ServerDbWorld, hostname: String, network: String) {
    let request = AddServerRequest::new(network, hostname);
    world.last_result = Some(world.service.add_server(request, QuietMode::Disabled));
}

#[when(r#"I quietly add the server "{hostname}" to network "{network}""#)]
fn quietly_add_server(world: &mut ServerDbWorld, hostname: String, network: String) {
    let request = AddServerRequest::new(network, hostname);
    world.last_result = Some(world.service.add_server(request, QuietMode::Enabled));
}

#[when(r#"I set the nickname of server "{hostname}" in network "{network}" to "{nick}""#)]
fn set_server_nickname(
    world: &mut ServerDbWorld,
    hostname: String,
    network: String,
    nick: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .set_server_property(
            &network,
            &hostname,
            ServerProperty::Profile(ProfileField::NickName),
            &nick,
            QuietMode::Disabled,
        )
        .map_err(|err| eyre::eyre!("set_server_property failed: {err}"))?;
    Ok(())
}

#[when(r#"I quietly set the nickname of network "{network}" to "{nick}""#)]
fn quietly_set_network_nickname(world: &mut ServerDbWorld, network: String, nick: String) {
    world.last_result = Some(world.service.set_network_property(
        &network,
        NetworkProperty::Profile(ProfileField::NickName),
        &nick,
        QuietMode::Enabled,
    ));
}
