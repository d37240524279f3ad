//! ircnetdb: an in-process registry of IRC networks and servers.
//!
//! This crate stores IRC connection profiles: named networks carrying
//! connection defaults, each owning an ordered list of servers. It answers
//! existence checks and property reads, and applies adds and property
//! updates with an optional quiet mode that turns "not found" and "already
//! exists" into silent no-ops. It never connects to anything.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Networks, servers and records with no storage concerns
//! - **Ports**: The registry trait that storage implementations fulfil
//! - **Adapters**: The in-memory registry
//! - **Services**: The command surface used by scripting front ends
//!
//! # Modules
//!
//! - [`server_db`]: Network and server registry
//!
//! # Examples
//!
//! ```
//! use ircnetdb::server_db::{
//!     adapters::memory::InMemoryServerDatabase,
//!     config::ServerDbConfig,
//!     domain::{ServerFlag, ServerProperty},
//!     services::{AddNetworkRequest, AddServerRequest, QuietMode, ServerDbService},
//! };
//!
//! let mut service =
//!     ServerDbService::new(InMemoryServerDatabase::new(), ServerDbConfig::default());
//! service.add_network(AddNetworkRequest::new("Libera"), QuietMode::Disabled)?;
//! service.add_server(
//!     AddServerRequest::new("Libera", "irc.libera.chat")
//!         .with_port("6697")
//!         .with_flag(ServerFlag::Ssl),
//!     QuietMode::Disabled,
//! )?;
//!
//! assert!(service.server_exists("IRC.LIBERA.CHAT", None)?);
//! let port = service.server_property("Libera", "irc.libera.chat", ServerProperty::Port)?;
//! assert_eq!(port.as_port(), Some(6697));
//! # Ok::<(), ircnetdb::server_db::services::ServerDbServiceError>(())
//! ```

pub mod server_db;
