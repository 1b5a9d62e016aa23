//! Resource value types.

/// A yaml resource to be used for deploying cluster API,
/// infrastructure providers or bootstrap providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    path: String,
    content: Vec<u8>,
}

impl Resource {
    /// Create a resource from its path and raw content.
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Repository or filesystem relative path of the resource.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw manifest bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// A group of yaml resources for a single component.
///
/// In case of multiple resources, `apply` names the resource that should be
/// used as entry point when applying them. The hint is advisory: it is taken
/// from the location fragment and never checked against `resources`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentResources {
    resources: Vec<Resource>,
    apply: String,
}

impl ComponentResources {
    /// Bundle resolved resources with an (optionally empty) apply hint.
    pub fn new(resources: Vec<Resource>, apply: impl Into<String>) -> Self {
        Self {
            resources,
            apply: apply.into(),
        }
    }

    /// The resolved resources, in resolution order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The apply hint, if one was given.
    pub fn apply(&self) -> Option<&str> {
        if self.apply.is_empty() {
            None
        } else {
            Some(&self.apply)
        }
    }

    /// The resource named by the apply hint.
    ///
    /// Returns `None` when there is no hint or no resource path matches it.
    pub fn apply_resource(&self) -> Option<&Resource> {
        let apply = self.apply()?;
        self.resources.iter().find(|r| r.path == apply)
    }

    /// Number of resolved resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no resources were resolved.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
