//! Init command implementation.
//!
//! The `clusteradm init` command resolves the resources of cluster API,
//! the bootstrap provider and the infrastructure providers.

use crate::cli::args::{parse_repositories, InitArgs};
use crate::client::{ClusteradmClient, InitConfig};
use crate::config::ClusteradmConfig;
use crate::error::{ClusteradmError, Result};
use crate::resources::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The init command implementation.
pub struct InitCommand {
    source: ConfigSource,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(source: ConfigSource, args: InitArgs) -> Self {
        Self { source, args }
    }

    /// Combine flags with file configuration; flags win.
    fn init_config(&self, config: ClusteradmConfig) -> Result<InitConfig> {
        let providers = if self.args.providers.is_empty() {
            config.providers
        } else {
            self.args.providers.clone()
        };
        if providers.is_empty() {
            return Err(ClusteradmError::InvalidArgument {
                message: "required flag \"providers\" not set".to_string(),
            });
        }

        let mut repositories = config.repositories;
        repositories.extend(parse_repositories(&self.args.repositories)?);

        Ok(InitConfig {
            bootstrap: self
                .args
                .bootstrap
                .clone()
                .or(config.bootstrap)
                .unwrap_or_default(),
            providers,
            repositories,
            github_token: self
                .args
                .github_token
                .clone()
                .or(config.github_token)
                .filter(|t| !t.is_empty()),
        })
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load(ui)?;
        let init = self.init_config(config)?;
        tracing::debug!("Init components: {:?}", init.components());

        let resolver = Resolver::new().with_api_url(&self.args.github_api_url);
        let bundles = ClusteradmClient::with_resolver(resolver).init(&init, ui)?;

        let total: usize = bundles.iter().map(|b| b.len()).sum();
        ui.success(&format!(
            "Resolved {} resources for {} components",
            total,
            bundles.len()
        ));
        Ok(CommandResult::success())
    }
}
