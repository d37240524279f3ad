//! Then steps for server database BDD scenarios.

use super::world::ServerDbWorld;
use ircnetdb::server_db::{
    domain::{NetworkProperty, PropertyValue, ServerFlag, ServerProperty, ServerRecord},
    ports::ServerDatabase,
    services::{CommandOutcome, ErrorKind},
};
use rstest_bdd_macros::then;

#[then(r#"the server "{hostname}" exists in network "{network}""#)]
fn server_exists_in_network(
    world: &ServerDbWorld,
    hostname: String,
    network: String,
) -> Result<(), eyre::Report> {
    let exists = world
        .service
        .server_exists(&hostname, Some(&network))
        .map_err(|err| eyre::eyre!("server_exists failed: {err}"))?;
    if !exists {
        return Err(eyre::eyre!("expected '{hostname}' in network '{network}'"));
    }
    Ok(())
}

#[then(r#"the server "{hostname}" does not exist in network "{network}""#)]
fn server_absent_from_network(
    world: &ServerDbWorld,
    hostname: String,
    network: String,
) -> Result<(), eyre::Report> {
    let exists = world
        .service
        .server_exists(&hostname, Some(&network))
        .map_err(|err| eyre::eyre!("server_exists failed: {err}"))?;
    if exists {
        return Err(eyre::eyre!("expected '{hostname}' to be absent from '{network}'"));
    }
    Ok(())
}

#[then(r#"the server "{hostname}" exists in some network"#)]
fn server_exists_anywhere(world: &ServerDbWorld, hostname: String) -> Result<(), eyre::Report> {
    let exists = world
        .service
        .server_exists(&hostname, None)
        .map_err(|err| eyre::eyre!("server_exists failed: {err}"))?;
    if !exists {
        return Err(eyre::eyre!("expected '{hostname}' in some network"));
    }
    Ok(())
}

#[then(r#"the nickname of server "{hostname}" in network "{network}" is "{nick}""#)]
fn server_nickname_is(
    world: &ServerDbWorld,
    hostname: String,
    network: String,
    nick: String,
) -> Result<(), eyre::Report> {
    let actual = world.server_nickname(&network, &hostname)?;
    if actual != nick {
        return Err(eyre::eyre!("expected nickname '{nick}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the port of server "{hostname}" in network "{network}" is {port}"#)]
fn server_port_is(
    world: &ServerDbWorld,
    hostname: String,
    network: String,
    port: u16,
) -> Result<(), eyre::Report> {
    let actual = world
        .service
        .server_property(&network, &hostname, ServerProperty::Port)
        .map_err(|err| eyre::eyre!("port lookup failed: {err}"))?;
    if actual != PropertyValue::Port(port) {
        return Err(eyre::eyre!("expected port {port}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the server "{hostname}" in network "{network}" uses SSL"#)]
fn server_uses_ssl(
    world: &ServerDbWorld,
    hostname: String,
    network: String,
) -> Result<(), eyre::Report> {
    let ssl = world
        .service
        .server_property(&network, &hostname, ServerProperty::Flag(ServerFlag::Ssl))
        .map_err(|err| eyre::eyre!("ssl lookup failed: {err}"))?;
    if ssl != PropertyValue::Flag(true) {
        return Err(eyre::eyre!("expected '{hostname}' to use SSL, found {ssl}"));
    }
    Ok(())
}

#[then(r#"the network "{network}" connects automatically"#)]
fn network_connects_automatically(
    world: &ServerDbWorld,
    network: String,
) -> Result<(), eyre::Report> {
    let auto_connect = world
        .service
        .network_property(&network, NetworkProperty::AutoConnect)
        .map_err(|err| eyre::eyre!("auto-connect lookup failed: {err}"))?;
    if auto_connect != PropertyValue::Flag(true) {
        return Err(eyre::eyre!("expected '{network}' to auto-connect"));
    }
    Ok(())
}

#[then(r#"the command fails with a "{kind}" error"#)]
fn command_fails_with(world: &ServerDbWorld, kind: String) -> Result<(), eyre::Report> {
    expect_failure(world, &kind)
}

#[then(r#"the command fails with an "{kind}" error"#)]
fn command_fails_with_an(world: &ServerDbWorld, kind: String) -> Result<(), eyre::Report> {
    expect_failure(world, &kind)
}

#[then("the command is skipped")]
fn command_is_skipped(world: &ServerDbWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Ok(CommandOutcome::Skipped)) => Ok(()),
        other => Err(eyre::eyre!("expected a skipped command, got {other:?}")),
    }
}

#[then(r#"network "{network}" has {count:usize} servers"#)]
fn network_server_count(
    world: &ServerDbWorld,
    network: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let actual = world
        .service
        .database()
        .records()
        .find(|record| record.network().name().as_str() == network)
        .map(ServerRecord::len)
        .ok_or_else(|| eyre::eyre!("network '{network}' not found"))?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} servers, found {actual}"));
    }
    Ok(())
}

#[then(r#"no network named "{name}" exists"#)]
fn no_network_named(world: &ServerDbWorld, name: String) -> Result<(), eyre::Report> {
    let exists = world
        .service
        .network_exists(&name)
        .map_err(|err| eyre::eyre!("network_exists failed: {err}"))?;
    if exists {
        return Err(eyre::eyre!("expected network '{name}' to be absent"));
    }
    Ok(())
}

fn expect_failure(world: &ServerDbWorld, kind: &str) -> Result<(), eyre::Report> {
    let expected = match kind {
        "not found" => ErrorKind::NotFound,
        "already exists" => ErrorKind::AlreadyExists,
        "missing parameter" => ErrorKind::MissingParameter,
        "invalid" => ErrorKind::Invalid,
        other => return Err(eyre::eyre!("unknown error kind '{other}'")),
    };
    match &world.last_result {
        Some(Err(err)) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected a {kind} error, got {other:?}")),
    }
}
