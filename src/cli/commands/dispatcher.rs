//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ClusteradmConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Where a command reads its configuration from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl ConfigSource {
    pub fn new(project_root: impl Into<PathBuf>, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_override,
        }
    }

    /// Load the configuration and apply its default output mode, unless an
    /// output flag was given.
    pub fn load(&self, ui: &mut dyn UserInterface) -> Result<ClusteradmConfig> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }
        Ok(config)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: ConfigSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_override: Option<PathBuf>) -> Self {
        Self {
            source: ConfigSource::new(project_root, config_override),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => {
                let cmd = super::init::InitCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
        }
    }
}
