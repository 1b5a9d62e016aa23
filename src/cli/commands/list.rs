//! List command implementation.
//!
//! The `clusteradm list` command shows where the resources of every known
//! component are read from.

use std::collections::HashMap;

use crate::cli::args::{parse_repositories, ListArgs};
use crate::error::Result;
use crate::resources::default_components;
use crate::ui::theme::ClusteradmTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// A component and its effective repository location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub component: String,
    pub location: String,
    pub overridden: bool,
}

/// Overlay `overrides` on the default registry.
///
/// Components with a default come first, in registry order, followed by
/// override-only components sorted by name.
pub fn component_entries(overrides: &HashMap<String, String>) -> Vec<ComponentEntry> {
    let mut entries: Vec<ComponentEntry> = default_components()
        .map(|(component, default)| {
            let location = overrides.get(component);
            ComponentEntry {
                component: component.to_string(),
                location: location.map_or(default, String::as_str).to_string(),
                overridden: location.is_some(),
            }
        })
        .collect();

    let mut extra: Vec<_> = overrides
        .iter()
        .filter(|(component, _)| !entries.iter().any(|e| &e.component == *component))
        .map(|(component, location)| ComponentEntry {
            component: component.clone(),
            location: location.clone(),
            overridden: true,
        })
        .collect();
    extra.sort_by(|a, b| a.component.cmp(&b.component));

    entries.extend(extra);
    entries
}

/// The list command implementation.
pub struct ListCommand {
    source: ConfigSource,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(source: ConfigSource, args: ListArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load(ui)?;

        let mut overrides = config.repositories;
        overrides.extend(parse_repositories(&self.args.repositories)?);

        let theme = ClusteradmTheme::detect();
        let entries = component_entries(&overrides);
        let width = entries
            .iter()
            .map(|e| e.component.len())
            .max()
            .unwrap_or_default();

        ui.message(&format!("  {}", theme.key.apply_to("Components:")));
        for entry in &entries {
            let source = if entry.overridden { "(override)" } else { "(default)" };
            ui.message(&format!(
                "    {:width$}  {} {}",
                entry.component,
                entry.location,
                theme.dim.apply_to(source),
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}
