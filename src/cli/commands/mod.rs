//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which also owns the shared
//! configuration loading.

pub mod dispatcher;
pub mod init;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ConfigSource};
