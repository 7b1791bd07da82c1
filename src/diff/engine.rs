//! Project-tree comparison engine.
//!
//! [`ProjectComparator`] pairs realigned projects with their originals and
//! walks the comparison categories in a fixed order, emitting one report
//! line per version change, relocation, and (optionally) already-aligned
//! entry. Every set is sorted into the canonical total order before any line
//! is emitted, so the report text is byte-identical across runs.

use super::category::{dependency_refs, plugin_refs, DependencyCategory, PluginCategory};
use super::report::ReportBuilder;
use crate::error::{AlignDiffError, Result};
use crate::model::{ArtifactRef, PluginRef, Project, WildcardMap, WILDCARD};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The finished comparison report.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Full report text.
    pub text: String,
    /// Number of change lines (version changes, property changes,
    /// relocations). Non-aligned lines are not changes.
    pub changes: usize,
}

impl ComparisonReport {
    /// True if at least one change line was emitted.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.changes > 0
    }
}

/// Compares an original project tree against its realigned counterpart.
pub struct ProjectComparator<'a> {
    relocations: &'a WildcardMap,
    report_non_aligned: bool,
}

impl<'a> ProjectComparator<'a> {
    /// Create a comparator over the given relocation rules.
    #[must_use]
    pub fn new(relocations: &'a WildcardMap, report_non_aligned: bool) -> Self {
        Self {
            relocations,
            report_non_aligned,
        }
    }

    /// Compare two project trees and produce the report.
    ///
    /// Each realigned project is paired with the original project sharing
    /// its (group, artifact) identity; projects without a match are silently
    /// skipped, so whole-module additions and removals are invisible to the
    /// report.
    #[must_use]
    pub fn compare(&self, original: &[Project], realigned: &[Project]) -> ComparisonReport {
        let mut builder = ReportBuilder::new();

        for new_project in realigned {
            let Some(original_project) = original.iter().find(|candidate| {
                candidate.group_id == new_project.group_id
                    && candidate.artifact_id == new_project.artifact_id
            }) else {
                continue;
            };
            self.compare_pair(&mut builder, original_project, new_project);
        }

        let changes = builder.changes();
        ComparisonReport {
            text: builder.finish(),
            changes,
        }
    }

    fn compare_pair(&self, builder: &mut ReportBuilder, original: &Project, realigned: &Project) {
        builder.project_header(realigned.key());
        if original.version != realigned.version {
            builder.project_version(&original.version, &realigned.version);
        }
        builder.spacer();

        compare_properties(builder, &original.properties, &realigned.properties, false);
        builder.spacer();

        for category in DependencyCategory::BASE {
            self.compare_dependencies(
                builder,
                category,
                &dependency_refs(original, None, category),
                &dependency_refs(realigned, None, category),
            );
            builder.spacer();
        }

        for category in PluginCategory::BASE {
            self.compare_plugins(
                builder,
                category,
                &plugin_refs(original, None, category),
                &plugin_refs(realigned, None, category),
            );
            builder.spacer();
        }

        // Profiles pair by identifier; an unmatched profile is skipped just
        // like an unmatched project.
        for new_profile in &realigned.profiles {
            let Some(old_profile) = original.profile(&new_profile.id) else {
                continue;
            };

            compare_properties(
                builder,
                &old_profile.properties,
                &new_profile.properties,
                true,
            );
            builder.spacer();

            for category in DependencyCategory::PROFILE {
                self.compare_dependencies(
                    builder,
                    category,
                    &dependency_refs(original, Some(old_profile), category),
                    &dependency_refs(realigned, Some(new_profile), category),
                );
                builder.spacer();
            }

            for category in PluginCategory::PROFILE {
                self.compare_plugins(
                    builder,
                    category,
                    &plugin_refs(original, Some(old_profile), category),
                    &plugin_refs(realigned, Some(new_profile), category),
                );
                builder.spacer();
            }
        }
    }

    fn compare_dependencies(
        &self,
        builder: &mut ReportBuilder,
        category: DependencyCategory,
        original: &[ArtifactRef],
        realigned: &[ArtifactRef],
    ) {
        if category.is_unversioned() {
            // These entries rely on an inherited/BOM-supplied version; the
            // realigned set is ignored and only a relocation is reportable.
            for dep in original {
                self.report_relocation(builder, dep, true);
            }
            return;
        }

        let mut non_aligned: Vec<&ArtifactRef> = Vec::new();
        for old_dep in original {
            for new_dep in realigned.iter().filter(|candidate| *candidate == old_dep) {
                if new_dep.version == old_dep.version {
                    if self.report_non_aligned && !non_aligned.contains(&old_dep) {
                        non_aligned.push(old_dep);
                    }
                } else {
                    builder.change(category.label(), old_dep, new_dep);
                }
            }
        }

        if !self.relocations.is_empty() {
            builder.spacer();
            for dep in original {
                self.report_relocation(builder, dep, false);
            }
        }

        for dep in non_aligned {
            builder.non_aligned(category.label(), dep);
        }
    }

    fn compare_plugins(
        &self,
        builder: &mut ReportBuilder,
        category: PluginCategory,
        original: &[PluginRef],
        realigned: &[PluginRef],
    ) {
        let mut non_aligned: Vec<&PluginRef> = Vec::new();
        for old_plugin in original {
            for new_plugin in realigned.iter().filter(|candidate| *candidate == old_plugin) {
                if new_plugin.version == old_plugin.version {
                    if self.report_non_aligned && !non_aligned.contains(&old_plugin) {
                        non_aligned.push(old_plugin);
                    }
                } else {
                    builder.change(category.label(), old_plugin, new_plugin);
                }
            }
        }

        for plugin in non_aligned {
            builder.non_aligned(category.label(), plugin);
        }
    }

    fn report_relocation(&self, builder: &mut ReportBuilder, dep: &ArtifactRef, unversioned: bool) {
        let key = dep.as_project_ref();
        if let Some(target) = self.relocations.get(&key) {
            // A wildcard target artifact id preserves the original one; the
            // map never invents a concrete artifact id.
            let artifact = if target.artifact_id == WILDCARD {
                &key.artifact_id
            } else {
                &target.artifact_id
            };
            if unversioned {
                builder.unversioned_relocation(dep, &target.group_id, artifact, &target.version);
            } else {
                builder.relocation(dep, &target.group_id, artifact, &target.version);
            }
        }
    }
}

/// Emit property-change lines for keys present in both snapshots with
/// different values. Keys added or removed between snapshots are not
/// reported.
fn compare_properties(
    builder: &mut ReportBuilder,
    original: &BTreeMap<String, String>,
    realigned: &BTreeMap<String, String>,
    profile: bool,
) {
    for (key, old_value) in original {
        if let Some(new_value) = realigned.get(key) {
            if new_value != old_value {
                if profile {
                    builder.profile_property(key, old_value, new_value);
                } else {
                    builder.property(key, old_value, new_value);
                }
            }
        }
    }
}

/// Write the report to `output_file` when one is configured, then emit it to
/// the log at informational level.
///
/// The file is written first; a write failure aborts before the log
/// emission. Callers relying on the log copy must not reorder this.
pub fn emit_report(report: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        if !path.as_os_str().is_empty() {
            fs::write(path, report).map_err(|source| AlignDiffError::report_write(path, source))?;
        }
    }
    tracing::info!("{report}");
    Ok(())
}
