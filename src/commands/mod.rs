// ABOUTME: Command implementations for the bootstrap tool
// ABOUTME: Exports init and status commands

pub mod init;
pub mod status;

pub use init::{bootstrap, init};
pub use status::status;
