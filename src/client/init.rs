//! Management cluster initialization.

use std::collections::HashMap;

use crate::error::Result;
use crate::resources::{ComponentResources, CAPI};
use crate::ui::UserInterface;

use super::ClusteradmClient;

/// What to install on the management cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitConfig {
    /// Bootstrap provider; empty means none.
    pub bootstrap: String,
    /// Infrastructure providers, in install order.
    pub providers: Vec<String>,
    /// Repository location per component, overriding the defaults.
    pub repositories: HashMap<String, String>,
    /// Token used to raise the GitHub API rate limit.
    pub github_token: Option<String>,
}

impl InitConfig {
    /// Components to resolve, in order: cluster API itself, the bootstrap
    /// provider (if any), then every infrastructure provider.
    pub fn components(&self) -> Vec<&str> {
        self.plan().into_iter().map(|(name, _)| name).collect()
    }

    fn plan(&self) -> Vec<(&str, &'static str)> {
        let mut plan = vec![(CAPI, "cluster API")];
        if !self.bootstrap.is_empty() {
            plan.push((self.bootstrap.as_str(), "bootstrap provider"));
        }
        plan.extend(
            self.providers
                .iter()
                .map(|p| (p.as_str(), "infrastructure provider")),
        );
        plan
    }
}

impl ClusteradmClient {
    /// Resolve the resources of every component in `cfg`.
    ///
    /// Components are resolved one at a time, stopping at the first
    /// failure. Applying the resources to the management cluster is not
    /// performed yet; the resolved bundles are returned in component order.
    ///
    /// # Errors
    ///
    /// Returns the first lookup error, attributed to its component.
    pub fn init(
        &self,
        cfg: &InitConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<ComponentResources>> {
        ui.message("performing init...");
        let token = cfg.github_token.as_deref();

        let mut bundles = Vec::new();
        for (component, kind) in cfg.plan() {
            tracing::info!("Getting resources for {:?} {}", component, kind);
            let mut spinner = ui.start_spinner(&format!("Getting resources for {:?}", component));

            let bundle = match self
                .resolver()
                .lookup(component, &cfg.repositories, token)
            {
                Ok(bundle) => bundle,
                Err(e) => {
                    spinner.finish_error(&format!("{}: failed", component));
                    return Err(e.for_component(component));
                }
            };

            let noun = if bundle.len() == 1 { "resource" } else { "resources" };
            spinner.finish_success(&format!("{}: {} {}", component, bundle.len(), noun));

            if ui.output_mode().shows_details() {
                for resource in bundle.resources() {
                    ui.message(&format!("    {}", resource.path()));
                }
            }
            if let Some(apply) = bundle.apply() {
                if bundle.apply_resource().is_none() {
                    ui.warning(&format!(
                        "{}: apply path {:?} does not match any resource",
                        component, apply
                    ));
                }
            }

            bundles.push(bundle);
        }

        ui.message(&format!(
            "applying {} component resources to the management cluster...",
            bundles.len()
        ));
        Ok(bundles)
    }
}
