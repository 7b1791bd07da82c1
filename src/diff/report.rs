//! Report text assembly.
//!
//! [`ReportBuilder`] owns the spacer-line bookkeeping that separates report
//! blocks: a blank line follows a block exactly when the block emitted at
//! least one content line, so the finished text never contains two
//! consecutive blank lines and empty blocks leave no trace. The builder is
//! exclusively owned by one comparison pass; once finished the text is
//! immutable.

use std::fmt;

/// Line terminator used in the report text.
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
/// Line terminator used in the report text.
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// Accumulates report lines with block-spacing state.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    buffer: String,
    pending_spacer: bool,
    changes: usize,
}

impl ReportBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push_raw(&mut self, line: fmt::Arguments<'_>) {
        use fmt::Write as _;
        // Writing to a String cannot fail.
        let _ = self.buffer.write_fmt(line);
        self.buffer.push_str(LINE_SEP);
    }

    fn push_content(&mut self, line: fmt::Arguments<'_>) {
        self.push_raw(line);
        self.pending_spacer = true;
    }

    fn push_change(&mut self, line: fmt::Arguments<'_>) {
        self.push_content(line);
        self.changes += 1;
    }

    /// Project header. Headers do not count as block content for spacing.
    pub fn project_header(&mut self, project: impl fmt::Display) {
        self.push_raw(format_args!("------------------- project {project}"));
    }

    /// Module version change.
    pub fn project_version(&mut self, old: &str, new: &str) {
        self.push_change(format_args!("\tProject version : {old} ---> {new}"));
    }

    /// Module property change.
    pub fn property(&mut self, key: &str, old: &str, new: &str) {
        self.push_change(format_args!("\tProperty : key {key} ; value {old} ---> {new}"));
    }

    /// Profile property change.
    pub fn profile_property(&mut self, key: &str, old: &str, new: &str) {
        self.push_change(format_args!(
            "\tProfile property : key {key} ; value {old} ---> {new}"
        ));
    }

    /// Version change within a category.
    pub fn change(&mut self, label: &str, old: impl fmt::Display, new: impl fmt::Display) {
        self.push_change(format_args!("\t{label} : {old} --> {new}"));
    }

    /// Relocation applied to a versioned dependency.
    pub fn relocation(
        &mut self,
        original: impl fmt::Display,
        group: &str,
        artifact: &str,
        version: &str,
    ) {
        self.push_change(format_args!(
            "\tRelocation : {original} ---> {group}:{artifact}:{version}"
        ));
    }

    /// Relocation applied to an unversioned dependency.
    pub fn unversioned_relocation(
        &mut self,
        original: impl fmt::Display,
        group: &str,
        artifact: &str,
        version: &str,
    ) {
        self.push_change(format_args!(
            "\tUnversioned relocation : {original} ---> {group}:{artifact}:{version}"
        ));
    }

    /// An entry that was already aligned. Content, but not a change.
    pub fn non_aligned(&mut self, label: &str, item: impl fmt::Display) {
        self.push_content(format_args!("\tNon-Aligned {label} : {item}"));
    }

    /// Block boundary: inject one blank line if content was emitted since
    /// the previous boundary, then reset.
    pub fn spacer(&mut self) {
        if self.pending_spacer {
            self.buffer.push_str(LINE_SEP);
            self.pending_spacer = false;
        }
    }

    /// Number of change lines emitted so far (non-aligned lines excluded).
    #[must_use]
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// True if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finish the report: trailing blank lines are trimmed so the text ends
    /// with a single line terminator (or is empty).
    #[must_use]
    pub fn finish(self) -> String {
        let trimmed = self.buffer.trim_end_matches(LINE_SEP);
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}{LINE_SEP}")
        }
    }
}
