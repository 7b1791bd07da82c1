//! Wildcard-aware relocation lookup table.

use super::{ProjectRef, VersionedRef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A mapping from an unversioned reference (optionally with a wildcard
/// artifact id) to a relocation target.
///
/// Lookups try the exact `(group, artifact)` key first, then fall back to the
/// wildcard-artifact key `(group, "*")` for the same group; at most one
/// target is returned per lookup, exact winning over wildcard. The map is
/// built once by the configuration layer and treated as read-only by the
/// comparison engine.
///
/// A target whose artifact id is the wildcard token means "preserve the
/// original artifact id": the map never invents a concrete one, callers
/// substitute when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardMap {
    entries: IndexMap<ProjectRef, VersionedRef>,
}

impl WildcardMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a relocation target. A duplicate key overwrites the previous
    /// target (last write wins).
    pub fn insert(&mut self, key: ProjectRef, target: VersionedRef) {
        self.entries.insert(key, target);
    }

    /// Resolve a reference: exact `(group, artifact)` entry first, then the
    /// `(group, "*")` entry for the same group.
    #[must_use]
    pub fn get(&self, key: &ProjectRef) -> Option<&VersionedRef> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&key.group_wildcard()))
    }

    /// Mirrors [`WildcardMap::get`]'s resolution rule.
    #[must_use]
    pub fn contains_key(&self, key: &ProjectRef) -> bool {
        self.get(key).is_some()
    }

    /// Number of literal entries stored (wildcard fallbacks do not count as
    /// separate matches).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the literal entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectRef, &VersionedRef)> {
        self.entries.iter()
    }
}
