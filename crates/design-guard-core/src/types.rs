//! Core types for design violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for design violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, never blocks a write.
    Info,
    /// Reported, but does not block a write.
    Warning,
    /// Blocks the write.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Category of a design violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Elevation cue that contradicts the declared depth strategy.
    Depth,
    /// Pixel value off the spacing grid.
    Spacing,
    /// Hex color outside the declared palette.
    Color,
    /// Visual choice flagged regardless of the design system.
    AntiPattern,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Depth => write!(f, "depth"),
            Self::Spacing => write!(f, "spacing"),
            Self::Color => write!(f, "color"),
            Self::AntiPattern => write!(f, "anti-pattern"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    /// File path as given to the guard.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
    /// Byte offset of the match in the file.
    pub offset: usize,
    /// Length of the match in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A suggested remediation for a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A design-system violation found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "DG001").
    pub code: String,
    /// Rule name (e.g., "depth-strategy").
    pub rule: String,
    /// Violation category.
    pub kind: ViolationKind,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location of the offending match.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Remediation text.
    pub suggestion: Suggestion,
}

impl Violation {
    /// Creates a new violation with [`Severity::Error`].
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        kind: ViolationKind,
        location: Location,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            kind,
            severity: Severity::Error,
            location,
            message: message.into(),
            suggestion: Suggestion::new(suggestion),
        }
    }

    /// Sets the severity of this violation.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Formats the violation as a hook report block.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "  [{}] {}\n    -> {}\n",
            self.kind, self.message, self.suggestion.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of running the guard over a file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in detection order.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Formats violations as the multi-line hook report.
    ///
    /// One block per violation showing kind, message and suggestion,
    /// framed by a header and footer.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::from("\n=== DESIGN SYSTEM VIOLATIONS ===\n\n");
        for v in &self.violations {
            let _ = writeln!(report, "{}", v.format());
        }
        report.push_str("Fix these issues to maintain design consistency.\n\n");
        report.push_str("================================\n");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(kind: ViolationKind, severity: Severity) -> Violation {
        Violation::new(
            "DG002",
            "spacing-grid",
            kind,
            Location::new(PathBuf::from("src/Button.tsx"), 3, 12),
            "7px is not on 4px grid",
            "Use 8px instead",
        )
        .with_severity(severity)
    }

    #[test]
    fn violation_defaults_to_error() {
        let v = Violation::new(
            "DG003",
            "color-palette",
            ViolationKind::Color,
            Location::default(),
            "m",
            "s",
        );
        assert_eq!(v.severity, Severity::Error);
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(ViolationKind::AntiPattern.to_string(), "anti-pattern");
        assert_eq!(ViolationKind::Depth.to_string(), "depth");
    }

    #[test]
    fn violation_format_shows_kind_message_and_suggestion() {
        let v = make_violation(ViolationKind::Spacing, Severity::Error);
        assert_eq!(
            v.format(),
            "  [spacing] 7px is not on 4px grid\n    -> Use 8px instead\n"
        );
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(ViolationKind::Spacing, Severity::Error);
        assert_eq!(
            v.to_string(),
            "src/Button.tsx:3:12: error [DG002] 7px is not on 4px grid"
        );
    }

    #[test]
    fn has_errors_ignores_warnings() {
        let mut result = LintResult::new();
        result
            .violations
            .push(make_violation(ViolationKind::Spacing, Severity::Warning));
        assert!(!result.has_errors());
        assert!(result.has_violations_at(Severity::Warning));
    }

    #[test]
    fn format_report_frames_blocks() {
        let mut result = LintResult::new();
        result.files_checked = 1;
        result
            .violations
            .push(make_violation(ViolationKind::Spacing, Severity::Error));

        let report = result.format_report();
        assert!(report.starts_with("\n=== DESIGN SYSTEM VIOLATIONS ===\n\n"));
        assert!(report.contains("  [spacing] 7px is not on 4px grid\n    -> Use 8px instead\n\n"));
        assert!(report.contains("Fix these issues to maintain design consistency."));
        assert!(report.ends_with("================================\n"));
    }
}
