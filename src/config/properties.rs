//! User property bag helpers.
//!
//! Alignment configuration arrives as a flat string-to-string property bag
//! (the equivalent of `-Dkey=value` build invocations). A sorted map keeps
//! every prefix scan deterministic.

use indexmap::IndexMap;
use std::collections::BTreeMap;

/// The user property bag. Sorted so prefix scans and diffs iterate in a
/// stable key order.
pub type PropertyBag = BTreeMap<String, String>;

/// Collect all properties whose key starts with `prefix`, keyed by the
/// remainder after the prefix. The bare prefix key itself (empty remainder)
/// is excluded.
#[must_use]
pub fn properties_by_prefix(props: &PropertyBag, prefix: &str) -> IndexMap<String, String> {
    props
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .filter(|suffix| !suffix.is_empty())
                .map(|suffix| (suffix.to_string(), value.clone()))
        })
        .collect()
}

/// Read a boolean property. Any value other than `"true"`
/// (case-insensitive) is false, matching build-property conventions.
#[must_use]
pub fn bool_property(props: &PropertyBag, key: &str, default: bool) -> bool {
    props
        .get(key)
        .map_or(default, |value| value.eq_ignore_ascii_case("true"))
}

/// Parse `key=value` lines into a property bag.
///
/// Blank lines and lines starting with `#` or `!` are skipped; a line with
/// no `=` becomes a key with an empty value; a later occurrence of a key
/// overrides an earlier one.
#[must_use]
pub fn parse_property_file(content: &str) -> PropertyBag {
    let mut props = PropertyBag::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => props.insert(key.trim().to_string(), value.trim().to_string()),
            None => props.insert(line.to_string(), String::new()),
        };
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, &str)]) -> PropertyBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_properties_by_prefix() {
        let props = bag(&[
            ("dependencyExclusion.junit:junit", "4.13"),
            ("dependencyExclusion.org.foo:bar", "1.0"),
            ("dependencyExclusion.", "ignored"),
            ("dependencyExclusion", "bare key, not scanned"),
            ("unrelated", "x"),
        ]);

        let scanned = properties_by_prefix(&props, "dependencyExclusion.");
        assert_eq!(scanned.len(), 2);
        assert_eq!(scanned.get("junit:junit").map(String::as_str), Some("4.13"));
        assert_eq!(scanned.get("org.foo:bar").map(String::as_str), Some("1.0"));
    }

    #[test]
    fn test_bool_property() {
        let props = bag(&[("a", "true"), ("b", "TRUE"), ("c", "yes"), ("d", "false")]);
        assert!(bool_property(&props, "a", false));
        assert!(bool_property(&props, "b", false));
        assert!(!bool_property(&props, "c", false));
        assert!(!bool_property(&props, "d", true));
        assert!(bool_property(&props, "missing", true));
        assert!(!bool_property(&props, "missing", false));
    }

    #[test]
    fn test_parse_property_file() {
        let content = "\
# a comment
dependencySource=REST
reportNonAligned = true

! another comment
flagOnly
dependencySource=BOM
";
        let props = parse_property_file(content);
        assert_eq!(props.get("dependencySource").map(String::as_str), Some("BOM"));
        assert_eq!(props.get("reportNonAligned").map(String::as_str), Some("true"));
        assert_eq!(props.get("flagOnly").map(String::as_str), Some(""));
        assert_eq!(props.len(), 3);
    }
}
