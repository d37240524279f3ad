//! Behaviour tests for the IRC server database command surface.

mod server_db_steps;

use rstest_bdd_macros::scenario;
use server_db_steps::world::{ServerDbWorld, world};

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Register a server and read back its settings"
)]
fn register_and_read_back(world: ServerDbWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Server settings override network defaults"
)]
fn server_overrides_network(world: ServerDbWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Global search looks through every network"
)]
fn global_search(world: ServerDbWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Hostnames differing only by case are duplicates"
)]
fn case_insensitive_duplicates(world: ServerDbWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Quiet property update on a missing network changes nothing"
)]
fn quiet_update_on_missing_network(world: ServerDbWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_db.feature",
    name = "Adding a server to a missing network fails even when quiet"
)]
fn add_server_to_missing_network(world: ServerDbWorld) {
    let _ = world;
}
