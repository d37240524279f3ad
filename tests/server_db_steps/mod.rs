//! Step definitions for the server database behaviour tests.

pub mod world;

mod given;
mod then;
mod when;
