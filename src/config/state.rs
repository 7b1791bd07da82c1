//! Alignment configuration state.
//!
//! [`AlignmentConfig`] captures everything the user property bag says about
//! dependency alignment: the ordered BOM coordinate list, named extra BOMs,
//! per-artifact exclusions/overrides, wildcard relocation rules, and the
//! precedence mode that decides which remote authority wins when both a BOM
//! and the REST service supply a version for the same artifact.

use super::properties::{properties_by_prefix, PropertyBag};
use crate::error::{AlignDiffError, Result};
use crate::model::{parse_gav_list, ArtifactRef, ProjectRef, VersionedRef, WildcardMap};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Property naming the GAV(s) of the remote BOM(s) supplying dependency
/// management information. Comma/whitespace delimited.
pub const DEPENDENCY_MANAGEMENT_PROPERTY: &str = "dependencyManagement";

/// Property selecting the precedence between remote version sources.
pub const DEPENDENCY_SOURCE_PROPERTY: &str = "dependencySource";

/// Property enabling reporting of entries that were already aligned.
pub const REPORT_NON_ALIGNED_PROPERTY: &str = "reportNonAligned";

/// Property naming a file the report is also written to (overwrite).
pub const REPORT_OUTPUT_FILE_PROPERTY: &str = "reportOutputFile";

/// Prefix for per-artifact exclusions, e.g.
/// `dependencyExclusion.junit:junit=4.13`.
const DEPENDENCY_EXCLUSION_PREFIX: &str = "dependencyExclusion.";

/// Alias prefix for the same mechanism. A key set under both prefixes is a
/// configuration error.
const DEPENDENCY_OVERRIDE_PREFIX: &str = "dependencyOverride.";

/// Prefix for extra named BOMs, e.g.
/// `dependencyManagement.xyzzy=org.foo:bar-dep-mgmt:2.0`.
const EXTRA_BOM_PREFIX: &str = "dependencyManagement.";

/// Prefix for wildcard relocation rules, e.g.
/// `dependencyRelocations.org.old:*@org.new:*=9.0`.
const DEPENDENCY_RELOCATIONS_PREFIX: &str = "dependencyRelocations.";

// ============================================================================
// Precedence
// ============================================================================

/// Merging precedence for remote version sources.
///
/// `Bom`: solely the remote BOM(s). `Rest`: solely the REST service.
/// `RestBom`/`BomRest`: merge both, the first-named source winning a
/// conflict. `None`: no remote alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    Rest,
    Bom,
    RestBom,
    BomRest,
    None,
}

impl Precedence {
    /// Parse the `dependencySource` property value. Absent defaults to
    /// `Bom`; present but empty after trimming means `None`; anything else
    /// must match one of the five names case-insensitively.
    pub fn from_property(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value else {
            return Ok(Self::Bom);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::None);
        }
        trimmed.parse::<Self>().map_err(|_| {
            AlignDiffError::config(format!(
                "Unknown value '{raw}' for {DEPENDENCY_SOURCE_PROPERTY}"
            ))
        })
    }
}

impl FromStr for Precedence {
    type Err = AlignDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "REST" => Ok(Self::Rest),
            "BOM" => Ok(Self::Bom),
            "RESTBOM" => Ok(Self::RestBom),
            "BOMREST" => Ok(Self::BomRest),
            "NONE" => Ok(Self::None),
            _ => Err(AlignDiffError::config(format!(
                "Unknown precedence '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rest => "REST",
            Self::Bom => "BOM",
            Self::RestBom => "RESTBOM",
            Self::BomRest => "BOMREST",
            Self::None => "NONE",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// AlignmentConfig
// ============================================================================

/// Parsed alignment configuration for one build session.
///
/// Constructed once from a property bag; [`AlignmentConfig::initialise`] may
/// be invoked again to reload from a new bag and fully replaces prior state
/// (it never merges with a previous call).
#[derive(Debug, Clone)]
pub struct AlignmentConfig {
    remote_bom_dep_mgmt: Vec<VersionedRef>,
    extra_boms: IndexMap<String, VersionedRef>,
    extra_bom_dep_mgmts: IndexMap<String, IndexMap<ProjectRef, String>>,
    dependency_exclusions: IndexMap<String, String>,
    remote_rest_overrides: IndexMap<ArtifactRef, String>,
    dependency_relocations: WildcardMap,
    precedence: Precedence,
}

impl AlignmentConfig {
    /// Parse a property bag into a fresh configuration.
    pub fn new(props: &PropertyBag) -> Result<Self> {
        let mut state = Self {
            remote_bom_dep_mgmt: Vec::new(),
            extra_boms: IndexMap::new(),
            extra_bom_dep_mgmts: IndexMap::new(),
            dependency_exclusions: IndexMap::new(),
            remote_rest_overrides: IndexMap::new(),
            dependency_relocations: WildcardMap::new(),
            precedence: Precedence::Bom,
        };
        state.initialise(props)?;
        Ok(state)
    }

    /// Reload from a new property bag, fully replacing prior state,
    /// including any REST overrides or lazily-populated extra-BOM
    /// management maps recorded since the previous call.
    pub fn initialise(&mut self, props: &PropertyBag) -> Result<()> {
        let remote_bom_dep_mgmt = props
            .get(DEPENDENCY_MANAGEMENT_PROPERTY)
            .map_or_else(|| Ok(Vec::new()), |raw| parse_gav_list(raw))?;

        let mut extra_boms = IndexMap::new();
        for (label, value) in properties_by_prefix(props, EXTRA_BOM_PREFIX) {
            extra_boms.insert(label, value.parse::<VersionedRef>()?);
        }

        let mut dependency_exclusions = properties_by_prefix(props, DEPENDENCY_EXCLUSION_PREFIX);
        for (key, value) in properties_by_prefix(props, DEPENDENCY_OVERRIDE_PREFIX) {
            if dependency_exclusions.insert(key.clone(), value).is_some() {
                return Err(AlignDiffError::config(format!(
                    "Property clash between dependencyOverride and dependencyExclusion for {key}"
                )));
            }
        }

        let dependency_relocations = parse_relocations(props)?;

        let precedence =
            Precedence::from_property(props.get(DEPENDENCY_SOURCE_PROPERTY).map(String::as_str))?;

        self.remote_bom_dep_mgmt = remote_bom_dep_mgmt;
        self.extra_boms = extra_boms;
        self.extra_bom_dep_mgmts = IndexMap::new();
        self.dependency_exclusions = dependency_exclusions;
        self.remote_rest_overrides = IndexMap::new();
        self.dependency_relocations = dependency_relocations;
        self.precedence = precedence;
        Ok(())
    }

    /// Whether any alignment work is configured.
    ///
    /// The grouping below is deliberate and preserved from the original
    /// behavior: the negated-NONE test binds only to the BOM-list test, so a
    /// non-empty exclusion map (or REST override map) enables the state even
    /// when the precedence is NONE.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        (self.precedence != Precedence::None && !self.remote_bom_dep_mgmt.is_empty())
            || !self.remote_rest_overrides.is_empty()
            || !self.dependency_exclusions.is_empty()
    }

    /// Ordered primary BOM coordinates.
    #[must_use]
    pub fn remote_bom_dep_mgmt(&self) -> &[VersionedRef] {
        &self.remote_bom_dep_mgmt
    }

    /// Extra named BOMs keyed by user-chosen label.
    #[must_use]
    pub fn extra_boms(&self) -> &IndexMap<String, VersionedRef> {
        &self.extra_boms
    }

    /// Per-label version-override maps for the extra BOMs, populated lazily
    /// by the collaborator that resolves each extra BOM.
    pub fn extra_bom_dep_mgmts_mut(
        &mut self,
    ) -> &mut IndexMap<String, IndexMap<ProjectRef, String>> {
        &mut self.extra_bom_dep_mgmts
    }

    /// Per-label version-override maps for the extra BOMs.
    #[must_use]
    pub fn extra_bom_dep_mgmts(&self) -> &IndexMap<String, IndexMap<ProjectRef, String>> {
        &self.extra_bom_dep_mgmts
    }

    /// Merged exclusion/override map.
    #[must_use]
    pub fn dependency_exclusions(&self) -> &IndexMap<String, String> {
        &self.dependency_exclusions
    }

    /// Record a per-artifact decision after construction.
    pub fn update_exclusions(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.dependency_exclusions.insert(key.into(), value.into());
    }

    /// Versions supplied by the REST alignment service. Absent until the
    /// REST collaborator has run; treated as empty before that.
    #[must_use]
    pub fn remote_rest_overrides(&self) -> &IndexMap<ArtifactRef, String> {
        &self.remote_rest_overrides
    }

    /// Install the versions fetched from the REST alignment service.
    pub fn set_remote_rest_overrides(&mut self, overrides: IndexMap<ArtifactRef, String>) {
        self.remote_rest_overrides = overrides;
    }

    /// Wildcard relocation rules, consumed read-only by the comparison
    /// engine.
    #[must_use]
    pub fn dependency_relocations(&self) -> &WildcardMap {
        &self.dependency_relocations
    }

    /// Configured precedence between remote version sources.
    #[must_use]
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }
}

/// Parse `dependencyRelocations.oldG:oldA@newG:newA=version` properties.
///
/// Artifact ids on either side may be the wildcard token; the version must
/// be non-empty.
fn parse_relocations(props: &PropertyBag) -> Result<WildcardMap> {
    let mut map = WildcardMap::new();
    for (key, version) in properties_by_prefix(props, DEPENDENCY_RELOCATIONS_PREFIX) {
        let Some((old, new)) = key.split_once('@') else {
            return Err(AlignDiffError::config(format!(
                "Relocation '{DEPENDENCY_RELOCATIONS_PREFIX}{key}' must contain oldGroup:oldArtifact@newGroup:newArtifact"
            )));
        };
        let source: ProjectRef = old.parse()?;
        let target: ProjectRef = new.parse()?;
        if version.is_empty() {
            return Err(AlignDiffError::config(format!(
                "Relocation '{DEPENDENCY_RELOCATIONS_PREFIX}{key}' has no target version"
            )));
        }
        map.insert(
            source,
            VersionedRef::new(target.group_id, target.artifact_id, version),
        );
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WILDCARD;

    fn bag(entries: &[(&str, &str)]) -> PropertyBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_bag_defaults() {
        let config = AlignmentConfig::new(&PropertyBag::new()).unwrap();
        assert_eq!(config.precedence(), Precedence::Bom);
        assert!(config.remote_bom_dep_mgmt().is_empty());
        assert!(config.extra_boms().is_empty());
        assert!(config.dependency_exclusions().is_empty());
        assert!(config.dependency_relocations().is_empty());
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_bom_list_and_extra_boms() {
        let props = bag(&[
            ("dependencyManagement", "org.foo:bom:1.0,org.bar:bom:2.0"),
            ("dependencyManagement.xyzzy", "org.baz:bom:3.0"),
        ]);
        let config = AlignmentConfig::new(&props).unwrap();

        assert_eq!(config.remote_bom_dep_mgmt().len(), 2);
        assert_eq!(config.remote_bom_dep_mgmt()[0].group_id, "org.foo");
        assert_eq!(
            config.extra_boms().get("xyzzy"),
            Some(&VersionedRef::new("org.baz", "bom", "3.0"))
        );
        assert!(config.is_enabled());
    }

    #[test]
    fn test_exclusion_override_merge() {
        let props = bag(&[
            ("dependencyExclusion.junit:junit", "4.13"),
            ("dependencyOverride.org.foo:bar", "1.0"),
        ]);
        let config = AlignmentConfig::new(&props).unwrap();

        assert_eq!(config.dependency_exclusions().len(), 2);
        assert_eq!(
            config.dependency_exclusions().get("junit:junit").map(String::as_str),
            Some("4.13")
        );
        assert_eq!(
            config.dependency_exclusions().get("org.foo:bar").map(String::as_str),
            Some("1.0")
        );
    }

    #[test]
    fn test_exclusion_override_clash_fails() {
        let props = bag(&[
            ("dependencyExclusion.foo", "1"),
            ("dependencyOverride.foo", "2"),
        ]);
        let err = AlignmentConfig::new(&props).unwrap_err();
        assert!(err.to_string().contains("foo"), "error names the key: {err}");
    }

    #[test]
    fn test_precedence_parsing() {
        for (value, expected) in [
            ("rest", Precedence::Rest),
            ("REST", Precedence::Rest),
            ("Bom", Precedence::Bom),
            ("restbom", Precedence::RestBom),
            ("BOMREST", Precedence::BomRest),
            ("none", Precedence::None),
        ] {
            let config =
                AlignmentConfig::new(&bag(&[("dependencySource", value)])).unwrap();
            assert_eq!(config.precedence(), expected, "for value '{value}'");
        }
    }

    #[test]
    fn test_precedence_empty_means_none() {
        let config = AlignmentConfig::new(&bag(&[("dependencySource", "")])).unwrap();
        assert_eq!(config.precedence(), Precedence::None);

        let config = AlignmentConfig::new(&bag(&[("dependencySource", "  ")])).unwrap();
        assert_eq!(config.precedence(), Precedence::None);
    }

    #[test]
    fn test_precedence_bogus_fails() {
        let err = AlignmentConfig::new(&bag(&[("dependencySource", "bogus")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("dependencySource"));
    }

    #[test]
    fn test_is_enabled_grouping_quirk() {
        // NONE precedence with a BOM list: disabled.
        let config = AlignmentConfig::new(&bag(&[
            ("dependencySource", "NONE"),
            ("dependencyManagement", "org.foo:bom:1.0"),
        ]))
        .unwrap();
        assert!(!config.is_enabled());

        // NONE precedence with only an exclusion: enabled. The negated-NONE
        // test binds only to the BOM-list operand.
        let config = AlignmentConfig::new(&bag(&[
            ("dependencySource", "NONE"),
            ("dependencyExclusion.foo", "1"),
        ]))
        .unwrap();
        assert!(config.is_enabled());

        // REST overrides alone enable the state too.
        let mut config = AlignmentConfig::new(&bag(&[("dependencySource", "NONE")])).unwrap();
        assert!(!config.is_enabled());
        let mut overrides = IndexMap::new();
        overrides.insert(
            ArtifactRef::new("g", "a", None, None, "1.0"),
            "2.0".to_string(),
        );
        config.set_remote_rest_overrides(overrides);
        assert!(config.is_enabled());
    }

    #[test]
    fn test_relocation_parsing() {
        let props = bag(&[
            ("dependencyRelocations.org.old:widget@org.new:gadget", "2.0"),
            ("dependencyRelocations.org.legacy:*@org.modern:*", "9.0"),
        ]);
        let config = AlignmentConfig::new(&props).unwrap();
        let map = config.dependency_relocations();

        assert_eq!(map.len(), 2);
        let exact = map.get(&ProjectRef::new("org.old", "widget")).unwrap();
        assert_eq!(exact, &VersionedRef::new("org.new", "gadget", "2.0"));

        let wild = map.get(&ProjectRef::new("org.legacy", "anything")).unwrap();
        assert_eq!(wild.group_id, "org.modern");
        assert_eq!(wild.artifact_id, WILDCARD);
    }

    #[test]
    fn test_relocation_malformed_fails() {
        let missing_at = bag(&[("dependencyRelocations.org.old:widget", "2.0")]);
        assert!(AlignmentConfig::new(&missing_at).is_err());

        let missing_version = bag(&[("dependencyRelocations.a:b@c:d", "")]);
        assert!(AlignmentConfig::new(&missing_version).is_err());

        let bad_ref = bag(&[("dependencyRelocations.justagroup@c:d", "1.0")]);
        assert!(AlignmentConfig::new(&bad_ref).is_err());
    }

    #[test]
    fn test_initialise_replaces_state() {
        let mut config = AlignmentConfig::new(&bag(&[
            ("dependencyManagement", "org.foo:bom:1.0"),
            ("dependencyExclusion.foo", "1"),
        ]))
        .unwrap();
        config.update_exclusions("extra", "2");
        let mut overrides = IndexMap::new();
        overrides.insert(
            ArtifactRef::new("g", "a", None, None, "1.0"),
            "2.0".to_string(),
        );
        config.set_remote_rest_overrides(overrides);

        config
            .initialise(&bag(&[("dependencySource", "REST")]))
            .unwrap();

        assert_eq!(config.precedence(), Precedence::Rest);
        assert!(config.remote_bom_dep_mgmt().is_empty());
        assert!(config.dependency_exclusions().is_empty());
        assert!(config.remote_rest_overrides().is_empty());
    }
}
