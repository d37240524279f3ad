//! Application services for the server database.

mod command;
mod error;
mod registry;
mod requests;

pub use command::{CommandOutcome, QuietMode};
pub use error::{ErrorKind, Parameter, ServerDbServiceError, ServerDbServiceResult, Target};
pub use registry::ServerDbService;
pub use requests::{AddNetworkRequest, AddServerRequest};
