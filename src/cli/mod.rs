//! Command-line interface for clusteradm.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{parse_repositories, Cli, Commands, InitArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ConfigSource};
