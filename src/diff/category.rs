//! Comparison categories.
//!
//! Ten mutually-exclusive categories drive both set extraction and report
//! labels. They are split into two closed enums so that every dispatch is
//! exhaustively checked at compile time; there is no "unknown category"
//! failure mode at runtime.

use crate::model::{ArtifactRef, PluginRef, Profile, Project};
use std::fmt;

/// Dependency comparison categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyCategory {
    Dependencies,
    ManagedDependencies,
    DependenciesUnversioned,
    ProfileDependencies,
    ProfileManagedDependencies,
    ProfileDependenciesUnversioned,
}

impl DependencyCategory {
    /// Categories compared on every project, in report order.
    pub const BASE: [Self; 3] = [
        Self::Dependencies,
        Self::ManagedDependencies,
        Self::DependenciesUnversioned,
    ];

    /// Categories compared per matched profile, in report order.
    pub const PROFILE: [Self; 3] = [
        Self::ProfileDependencies,
        Self::ProfileManagedDependencies,
        Self::ProfileDependenciesUnversioned,
    ];

    /// Report label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dependencies => "Dependencies",
            Self::ManagedDependencies => "Managed dependencies",
            Self::DependenciesUnversioned => "Non-versioned dependencies",
            Self::ProfileDependencies => "Profile dependencies",
            Self::ProfileManagedDependencies => "Profile managed dependencies",
            Self::ProfileDependenciesUnversioned => "Profile non-versioned dependencies",
        }
    }

    /// Unversioned categories only report relocations; the realigned set is
    /// ignored entirely.
    #[must_use]
    pub fn is_unversioned(self) -> bool {
        matches!(
            self,
            Self::DependenciesUnversioned | Self::ProfileDependenciesUnversioned
        )
    }
}

impl fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plugin comparison categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCategory {
    Plugins,
    ManagedPlugins,
    ProfilePlugins,
    ProfileManagedPlugins,
}

impl PluginCategory {
    /// Categories compared on every project, in report order.
    pub const BASE: [Self; 2] = [Self::Plugins, Self::ManagedPlugins];

    /// Categories compared per matched profile, in report order.
    pub const PROFILE: [Self; 2] = [Self::ProfilePlugins, Self::ProfileManagedPlugins];

    /// Report label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Plugins => "Plugins",
            Self::ManagedPlugins => "Managed plugins",
            Self::ProfilePlugins => "Profile plugins",
            Self::ProfileManagedPlugins => "Profile managed plugins",
        }
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract the dependency set for a category, sorted into the canonical
/// total order and de-duplicated.
///
/// Profile-scoped categories take the set from `profile`; a `None` profile
/// (the profile is absent from this project) yields an empty set.
#[must_use]
pub fn dependency_refs(
    project: &Project,
    profile: Option<&Profile>,
    category: DependencyCategory,
) -> Vec<ArtifactRef> {
    let mut refs: Vec<ArtifactRef> = match category {
        DependencyCategory::Dependencies => project.dependencies.clone(),
        DependencyCategory::ManagedDependencies => project.managed_dependencies.clone(),
        DependencyCategory::DependenciesUnversioned => project
            .dependencies
            .iter()
            .filter(|d| d.is_unversioned())
            .cloned()
            .collect(),
        DependencyCategory::ProfileDependencies => {
            profile.map(|p| p.dependencies.clone()).unwrap_or_default()
        }
        DependencyCategory::ProfileManagedDependencies => profile
            .map(|p| p.managed_dependencies.clone())
            .unwrap_or_default(),
        DependencyCategory::ProfileDependenciesUnversioned => profile
            .map(|p| {
                p.dependencies
                    .iter()
                    .filter(|d| d.is_unversioned())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default(),
    };
    refs.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    refs.dedup_by(|a, b| a.sort_key() == b.sort_key());
    refs
}

/// Extract the plugin set for a category, sorted into the canonical total
/// order and de-duplicated. Same profile semantics as [`dependency_refs`].
#[must_use]
pub fn plugin_refs(
    project: &Project,
    profile: Option<&Profile>,
    category: PluginCategory,
) -> Vec<PluginRef> {
    let mut refs: Vec<PluginRef> = match category {
        PluginCategory::Plugins => project.plugins.clone(),
        PluginCategory::ManagedPlugins => project.managed_plugins.clone(),
        PluginCategory::ProfilePlugins => profile.map(|p| p.plugins.clone()).unwrap_or_default(),
        PluginCategory::ProfileManagedPlugins => profile
            .map(|p| p.managed_plugins.clone())
            .unwrap_or_default(),
    };
    refs.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    refs.dedup_by(|a, b| a.sort_key() == b.sort_key());
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_deps() -> Project {
        let mut project = Project::new("g", "a", "1.0");
        project.dependencies = vec![
            ArtifactRef::new("z", "late", None, None, "1.0"),
            ArtifactRef::new("a", "early", None, None, "*"),
            ArtifactRef::new("a", "early", None, None, "*"),
        ];
        project
    }

    #[test]
    fn test_extraction_sorts_and_dedups() {
        let project = project_with_deps();
        let refs = dependency_refs(&project, None, DependencyCategory::Dependencies);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].group_id, "a");
        assert_eq!(refs[1].group_id, "z");
    }

    #[test]
    fn test_unversioned_filter() {
        let project = project_with_deps();
        let refs = dependency_refs(&project, None, DependencyCategory::DependenciesUnversioned);
        assert_eq!(refs.len(), 1);
        assert!(refs[0].is_unversioned());
    }

    #[test]
    fn test_absent_profile_yields_empty_set() {
        let project = project_with_deps();
        let refs = dependency_refs(&project, None, DependencyCategory::ProfileDependencies);
        assert!(refs.is_empty());

        let plugins = plugin_refs(&project, None, PluginCategory::ProfilePlugins);
        assert!(plugins.is_empty());
    }

    #[test]
    fn test_profile_scoped_extraction() {
        let mut profile = Profile::new("release");
        profile.dependencies = vec![
            ArtifactRef::new("g", "dep", None, None, "2.0"),
            ArtifactRef::new("g", "loose", None, None, "*"),
        ];
        let project = Project::new("g", "a", "1.0");

        let refs = dependency_refs(
            &project,
            Some(&profile),
            DependencyCategory::ProfileDependencies,
        );
        assert_eq!(refs.len(), 2);

        let unversioned = dependency_refs(
            &project,
            Some(&profile),
            DependencyCategory::ProfileDependenciesUnversioned,
        );
        assert_eq!(unversioned.len(), 1);
        assert_eq!(unversioned[0].artifact_id, "loose");
    }

    #[test]
    fn test_labels() {
        assert_eq!(DependencyCategory::Dependencies.to_string(), "Dependencies");
        assert_eq!(
            DependencyCategory::DependenciesUnversioned.to_string(),
            "Non-versioned dependencies"
        );
        assert_eq!(PluginCategory::ManagedPlugins.to_string(), "Managed plugins");
    }
}
