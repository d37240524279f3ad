//! Unit tests for the server database.
