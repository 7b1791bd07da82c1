//! Artifact identity model.
//!
//! Four reference shapes cover everything the alignment report needs:
//!
//! - [`ProjectRef`]: an unversioned `group:artifact` pair. The artifact id
//!   may be the literal wildcard token `"*"`, meaning "any artifact under
//!   this group" (relocation rules) or "preserve the original artifact id"
//!   (relocation targets).
//! - [`VersionedRef`]: a plain `group:artifact:version` value, used for BOM
//!   coordinates and relocation targets. Full structural equality.
//! - [`ArtifactRef`]: a dependency coordinate with packaging type and
//!   optional classifier. Equality and hashing cover group, artifact, type
//!   and classifier; the version is *excluded* because it is the thing being
//!   compared.
//! - [`PluginRef`]: a plugin coordinate. Equality and hashing cover group
//!   and artifact only.

use crate::error::{AlignDiffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The literal token marking a wildcard artifact id, or a version that is
/// intentionally unspecified (to be supplied by a parent or BOM).
pub const WILDCARD: &str = "*";

/// Packaging type assumed when a dependency does not declare one.
pub const DEFAULT_TYPE: &str = "jar";

fn default_artifact_type() -> String {
    DEFAULT_TYPE.to_string()
}

// ============================================================================
// ProjectRef
// ============================================================================

/// An unversioned `group:artifact` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectRef {
    pub group_id: String,
    pub artifact_id: String,
}

impl ProjectRef {
    /// Construct from explicit fields. Empty group or artifact ids are a
    /// caller bug, not a recoverable runtime condition.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        assert!(!group_id.is_empty(), "group id must not be empty");
        assert!(!artifact_id.is_empty(), "artifact id must not be empty");
        Self {
            group_id,
            artifact_id,
        }
    }

    /// Returns true if the artifact id is the wildcard token.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.artifact_id == WILDCARD
    }

    /// The wildcard-artifact key for this ref's group.
    #[must_use]
    pub fn group_wildcard(&self) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: WILDCARD.to_string(),
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for ProjectRef {
    type Err = AlignDiffError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(g), Some(a), None) if !g.is_empty() && !a.is_empty() => Ok(Self {
                group_id: g.to_string(),
                artifact_id: a.to_string(),
            }),
            _ => Err(AlignDiffError::coordinate(
                s,
                "expected group:artifact with non-empty fields",
            )),
        }
    }
}

// ============================================================================
// VersionedRef
// ============================================================================

/// A plain `group:artifact:version` coordinate (GAV).
///
/// Used for BOM coordinates and relocation targets; unlike [`ArtifactRef`]
/// and [`PluginRef`] it is a plain value with full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionedRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl VersionedRef {
    /// Construct from explicit fields. Empty group or artifact ids are a
    /// caller bug.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        assert!(!group_id.is_empty(), "group id must not be empty");
        assert!(!artifact_id.is_empty(), "artifact id must not be empty");
        Self {
            group_id,
            artifact_id,
            version: version.into(),
        }
    }

    /// Strip the version.
    #[must_use]
    pub fn as_project_ref(&self) -> ProjectRef {
        ProjectRef {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

impl fmt::Display for VersionedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl FromStr for VersionedRef {
    type Err = AlignDiffError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(g), Some(a), Some(v), None)
                if !g.is_empty() && !a.is_empty() && !v.is_empty() =>
            {
                Ok(Self {
                    group_id: g.to_string(),
                    artifact_id: a.to_string(),
                    version: v.to_string(),
                })
            }
            _ => Err(AlignDiffError::coordinate(
                s,
                "expected group:artifact:version with non-empty fields",
            )),
        }
    }
}

/// Parse a whitespace- or comma-delimited list of GAVs.
///
/// An absent or blank input yields an empty list; any malformed entry fails
/// the whole parse.
pub fn parse_gav_list(raw: &str) -> Result<Vec<VersionedRef>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(VersionedRef::from_str)
        .collect()
}

// ============================================================================
// ArtifactRef
// ============================================================================

/// A dependency coordinate: `group:artifact:type:classifier:version`.
///
/// Identity equality and hashing ignore the version: two refs are the same
/// dependency when group, artifact, type and classifier all match. An absent
/// classifier is distinct from an empty one only in serialized form; both
/// render as the empty field in [`fmt::Display`].
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(rename = "type", default = "default_artifact_type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub version: String,
}

impl ArtifactRef {
    /// Construct from explicit fields. Empty group or artifact ids are a
    /// caller bug. A `None` type falls back to [`DEFAULT_TYPE`].
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        artifact_type: Option<&str>,
        classifier: Option<&str>,
        version: impl Into<String>,
    ) -> Self {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        assert!(!group_id.is_empty(), "group id must not be empty");
        assert!(!artifact_id.is_empty(), "artifact id must not be empty");
        Self {
            group_id,
            artifact_id,
            artifact_type: artifact_type.unwrap_or(DEFAULT_TYPE).to_string(),
            classifier: classifier.map(ToString::to_string),
            version: version.into(),
        }
    }

    /// Strip version, type and classifier.
    #[must_use]
    pub fn as_project_ref(&self) -> ProjectRef {
        ProjectRef {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }

    /// Returns true if the version is the wildcard sentinel, i.e. the
    /// declaration relies on a parent or BOM to supply the version.
    #[must_use]
    pub fn is_unversioned(&self) -> bool {
        self.version == WILDCARD
    }

    /// Total order key: (group, artifact, type, classifier, version).
    ///
    /// Applied before any report line is emitted so the output is
    /// byte-identical across runs.
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.group_id,
            &self.artifact_id,
            &self.artifact_type,
            self.classifier.as_deref().unwrap_or(""),
            &self.version,
        )
    }
}

impl PartialEq for ArtifactRef {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.artifact_type == other.artifact_type
            && self.classifier == other.classifier
    }
}

impl Hash for ArtifactRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.artifact_type.hash(state);
        self.classifier.hash(state);
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.artifact_type,
            self.classifier.as_deref().unwrap_or(""),
            self.version
        )
    }
}

// ============================================================================
// PluginRef
// ============================================================================

/// A plugin coordinate: `group:artifact:version`.
///
/// Identity equality and hashing cover group and artifact only: plugins
/// carry no type or classifier, and the version is the compared quantity.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl PluginRef {
    /// Construct from explicit fields. Empty group or artifact ids are a
    /// caller bug.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        assert!(!group_id.is_empty(), "group id must not be empty");
        assert!(!artifact_id.is_empty(), "artifact id must not be empty");
        Self {
            group_id,
            artifact_id,
            version: version.into(),
        }
    }

    /// Strip the version.
    #[must_use]
    pub fn as_project_ref(&self) -> ProjectRef {
        ProjectRef {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }

    /// Total order key: (group, artifact, version).
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.group_id, &self.artifact_id, &self.version)
    }
}

impl PartialEq for PluginRef {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl Hash for PluginRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
