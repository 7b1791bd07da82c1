//! **Dependency alignment diffing and reporting.**
//!
//! `align-tools` models the configuration and reporting core of a build-time
//! dependency alignment pass: a multi-module project's declared dependency
//! and plugin versions are rewritten to match versions supplied by external
//! authorities (remote BOM coordinates, a REST alignment service, or both),
//! and this crate reports exactly what changed.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: artifact identity ([`ArtifactRef`], [`PluginRef`],
//!   [`ProjectRef`], [`VersionedRef`]), project-tree snapshots
//!   ([`Project`]), and wildcard relocation rules ([`WildcardMap`]).
//! - **[`config`]**: [`AlignmentConfig`] parses the user property bag into
//!   BOM coordinates, per-artifact exclusions/overrides, relocation rules
//!   and the [`Precedence`] between remote version sources.
//! - **[`diff`]**: the [`ProjectComparator`] walks two project-tree
//!   snapshots category by category and produces a deterministic,
//!   human-readable change report.
//!
//! ## Comparing Two Project Trees
//!
//! ```
//! use align_tools::{ArtifactRef, Project, ProjectComparator, WildcardMap};
//!
//! let mut original = Project::new("org.acme", "app", "1.0");
//! original
//!     .dependencies
//!     .push(ArtifactRef::new("org.dep", "lib", None, None, "1.0"));
//!
//! let mut realigned = original.clone();
//! realigned.version = "1.0.redhat-00001".to_string();
//! realigned.dependencies[0].version = "1.0.redhat-00002".to_string();
//!
//! let relocations = WildcardMap::new();
//! let report = ProjectComparator::new(&relocations, false)
//!     .compare(&[original], &[realigned]);
//!
//! assert!(report.has_changes());
//! assert!(report.text.contains("Project version : 1.0 ---> 1.0.redhat-00001"));
//! ```
//!
//! The report text is byte-identical across repeated runs on identical
//! inputs: every dependency and plugin set is sorted into a canonical total
//! order before a single line is emitted.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use config::{AlignmentConfig, Precedence, PropertyBag};
pub use diff::{
    emit_report, ComparisonReport, DependencyCategory, PluginCategory, ProjectComparator,
};
pub use error::{AlignDiffError, Result};
pub use model::{
    parse_gav_list, ArtifactRef, PluginRef, Profile, Project, ProjectRef, VersionedRef,
    WildcardMap, WILDCARD,
};
