//! The `compare` command handler.

use crate::config::{
    bool_property, parse_property_file, AlignmentConfig, PropertyBag,
    REPORT_NON_ALIGNED_PROPERTY, REPORT_OUTPUT_FILE_PROPERTY,
};
use crate::diff::{emit_report, ProjectComparator};
use crate::error::{AlignDiffError, Result};
use crate::model::Project;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Snapshot of the project tree before realignment.
    pub original: PathBuf,
    /// Snapshot of the project tree after realignment.
    pub realigned: PathBuf,
    /// Optional `key=value` properties file with alignment configuration.
    pub properties: Option<PathBuf>,
    /// Report already-aligned entries (OR-ed with the property).
    pub report_non_aligned: bool,
    /// Report file path (overrides the property when set).
    pub report_output_file: Option<PathBuf>,
}

/// Run a comparison. Returns the process exit code: 0 when nothing changed,
/// 1 when at least one change line was reported.
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let props = match &config.properties {
        Some(path) => load_properties(path)?,
        None => PropertyBag::new(),
    };

    let alignment = AlignmentConfig::new(&props)?;
    if !alignment.is_enabled() {
        tracing::debug!("no alignment configuration is active; reporting changes only");
    }

    let original = load_projects(&config.original)?;
    let realigned = load_projects(&config.realigned)?;

    if let Some(root) = original.iter().find(|p| p.execution_root) {
        tracing::debug!("comparing project tree rooted at {}", root.key());
    }

    let report_non_aligned = config.report_non_aligned
        || bool_property(&props, REPORT_NON_ALIGNED_PROPERTY, false);
    let output_file = config.report_output_file.or_else(|| {
        props
            .get(REPORT_OUTPUT_FILE_PROPERTY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    let comparator =
        ProjectComparator::new(alignment.dependency_relocations(), report_non_aligned);
    let report = comparator.compare(&original, &realigned);

    emit_report(&report.text, output_file.as_deref())?;

    Ok(i32::from(report.has_changes()))
}

fn load_properties(path: &Path) -> Result<PropertyBag> {
    let content =
        fs::read_to_string(path).map_err(|source| AlignDiffError::io(path, source))?;
    Ok(parse_property_file(&content))
}

fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let content =
        fs::read_to_string(path).map_err(|source| AlignDiffError::io(path, source))?;
    serde_json::from_str(&content)
        .map_err(|err| AlignDiffError::snapshot(path, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_snapshot(dir: &Path, name: &str, projects: &[Project]) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{}", serde_json::to_string(projects).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_exit_code_reflects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let old = write_snapshot(dir.path(), "old.json", &[Project::new("g", "a", "1.0")]);
        let new = write_snapshot(dir.path(), "new.json", &[Project::new("g", "a", "2.0")]);
        let same = write_snapshot(dir.path(), "same.json", &[Project::new("g", "a", "1.0")]);

        let changed = run_compare(CompareConfig {
            original: old.clone(),
            realigned: new,
            properties: None,
            report_non_aligned: false,
            report_output_file: None,
        })
        .unwrap();
        assert_eq!(changed, 1);

        let unchanged = run_compare(CompareConfig {
            original: old,
            realigned: same,
            properties: None,
            report_non_aligned: false,
            report_output_file: None,
        })
        .unwrap();
        assert_eq!(unchanged, 0);
    }

    #[test]
    fn test_report_written_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let old = write_snapshot(dir.path(), "old.json", &[Project::new("g", "a", "1.0")]);
        let new = write_snapshot(dir.path(), "new.json", &[Project::new("g", "a", "2.0")]);
        let out = dir.path().join("report.txt");

        run_compare(CompareConfig {
            original: old,
            realigned: new,
            properties: None,
            report_non_aligned: false,
            report_output_file: Some(out.clone()),
        })
        .unwrap();

        let written = fs::read_to_string(out).unwrap();
        assert!(written.contains("Project version : 1.0 ---> 2.0"));
    }

    #[test]
    fn test_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let old = write_snapshot(dir.path(), "old.json", &[Project::new("g", "a", "1.0")]);

        let err = run_compare(CompareConfig {
            original: old,
            realigned: dir.path().join("missing.json"),
            properties: None,
            report_non_aligned: false,
            report_output_file: None,
        })
        .unwrap_err();
        assert!(matches!(err, AlignDiffError::Io { .. }));
    }

    #[test]
    fn test_properties_file_drives_flags() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::new("g", "a", "1.0");
        project
            .dependencies
            .push(crate::model::ArtifactRef::new("x", "y", None, None, "1.0"));
        let old = write_snapshot(dir.path(), "old.json", &[project.clone()]);
        let new = write_snapshot(dir.path(), "new.json", &[project]);

        let out = dir.path().join("report.txt");
        let props_path = dir.path().join("align.properties");
        fs::write(
            &props_path,
            format!(
                "reportNonAligned=true\nreportOutputFile={}\n",
                out.display()
            ),
        )
        .unwrap();

        run_compare(CompareConfig {
            original: old,
            realigned: new,
            properties: Some(props_path),
            report_non_aligned: false,
            report_output_file: None,
        })
        .unwrap();

        let written = fs::read_to_string(out).unwrap();
        assert!(written.contains("Non-Aligned Dependencies : x:y:jar::1.0"));
    }
}
