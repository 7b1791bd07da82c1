//! Project-tree snapshot model.
//!
//! A [`Project`] is one module of a multi-module build: identity, version,
//! properties, and the resolved dependency and plugin sets per scope (direct
//! vs. managed, base vs. per-profile). Snapshots are produced by an external
//! resolution stage and consumed read-only by the comparison engine, which
//! is a pure read/report pass over two immutable snapshots.

use super::{ArtifactRef, PluginRef, ProjectRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One module of a project tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    /// Module-level properties. Sorted map so property diffs iterate in a
    /// stable key order.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// True for the topmost module the build was invoked from.
    #[serde(default)]
    pub execution_root: bool,

    /// Resolved direct dependencies.
    #[serde(default)]
    pub dependencies: Vec<ArtifactRef>,

    /// Resolved managed dependencies (dependency-management section).
    #[serde(default)]
    pub managed_dependencies: Vec<ArtifactRef>,

    /// Resolved build plugins.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    /// Resolved managed plugins (plugin-management section).
    #[serde(default)]
    pub managed_plugins: Vec<PluginRef>,

    /// Build profiles, each with its own properties and sets.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Project {
    /// Create an empty module with the given identity.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            properties: BTreeMap::new(),
            execution_root: false,
            dependencies: Vec::new(),
            managed_dependencies: Vec::new(),
            plugins: Vec::new(),
            managed_plugins: Vec::new(),
            profiles: Vec::new(),
        }
    }

    /// The module's unversioned identity, used to pair original and
    /// realigned snapshots.
    #[must_use]
    pub fn key(&self) -> ProjectRef {
        ProjectRef::new(&self.group_id, &self.artifact_id)
    }

    /// Look up a profile by identifier.
    #[must_use]
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

/// A named build profile with its own properties and dependency/plugin sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    #[serde(default)]
    pub dependencies: Vec<ArtifactRef>,

    #[serde(default)]
    pub managed_dependencies: Vec<ArtifactRef>,

    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    #[serde(default)]
    pub managed_plugins: Vec<PluginRef>,
}

impl Profile {
    /// Create an empty profile with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
