//! The post-write guard pipeline.
//!
//! Resolves the design system, filters the target by extension, reads it and
//! runs the [`Checker`]. Anything that prevents validation resolves to
//! [`Outcome::Skipped`], never to an error: the guard must not break the
//! write it is attached to.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checker::Checker;
use crate::context::dotted_extension;
use crate::system::DesignSystem;
use crate::types::LintResult;

/// Why a file was not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The project declares no design system document.
    NoDesignSystem,
    /// No target file was given.
    NoTarget,
    /// The target's extension is not a checked UI extension.
    UnsupportedExtension,
    /// The target does not exist or cannot be read as text.
    TargetUnreadable,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDesignSystem => write!(f, "no design system document"),
            Self::NoTarget => write!(f, "no target file"),
            Self::UnsupportedExtension => write!(f, "unsupported extension"),
            Self::TargetUnreadable => write!(f, "target file unreadable"),
        }
    }
}

/// Result of one guard invocation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Validation did not run.
    Skipped(SkipReason),
    /// The target was checked.
    Checked(LintResult),
}

impl Outcome {
    /// Returns true if the write should be rejected.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Checked(result) if result.has_errors())
    }

    /// Returns the lint result, if the target was checked.
    #[must_use]
    pub fn result(&self) -> Option<&LintResult> {
        match self {
            Self::Checked(result) => Some(result),
            Self::Skipped(_) => None,
        }
    }
}

/// Validates single files against a project's design system.
pub struct Guard {
    root: PathBuf,
    checker: Checker,
}

impl Guard {
    /// Creates a guard for the project at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, checker: Checker) -> Self {
        Self {
            root: root.into(),
            checker,
        }
    }

    /// Returns the design system document path.
    #[must_use]
    pub fn design_system_path(&self) -> PathBuf {
        self.checker.config().design_system_path(&self.root)
    }

    /// Loads the project's design system with configured overrides applied.
    #[must_use]
    pub fn load_system(&self) -> Option<DesignSystem> {
        let system = DesignSystem::load(&self.design_system_path())?;
        Some(system.with_spacing_unit(self.checker.config().spacing_unit()))
    }

    /// Runs the guard for `target`.
    #[must_use]
    pub fn run(&self, target: Option<&Path>) -> Outcome {
        let Some(system) = self.load_system() else {
            return skip(SkipReason::NoDesignSystem);
        };
        debug!(
            "Design system: depth={}, {} color(s), {}px grid",
            system.depth,
            system.colors.len(),
            system.spacing_unit
        );

        let Some(target) = target else {
            return skip(SkipReason::NoTarget);
        };

        let ext = dotted_extension(target).unwrap_or_default();
        if !self.checker.config().is_checked_extension(&ext) {
            return skip(SkipReason::UnsupportedExtension);
        }

        let content = match std::fs::read_to_string(target) {
            Ok(content) => content,
            Err(e) => {
                debug!("Cannot read {}: {e}", target.display());
                return skip(SkipReason::TargetUnreadable);
            }
        };

        debug!(
            "Checking {} with {} rule(s)",
            target.display(),
            self.checker.rule_count()
        );
        Outcome::Checked(self.checker.check_content(target, &content, &system))
    }
}

fn skip(reason: SkipReason) -> Outcome {
    debug!("Skipping validation: {reason}");
    Outcome::Skipped(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardConfig;
    use std::fs;
    use tempfile::TempDir;

    fn project(system: Option<&str>) -> TempDir {
        let tmp = TempDir::new().unwrap();
        if let Some(doc) = system {
            fs::create_dir(tmp.path().join(".design")).unwrap();
            fs::write(tmp.path().join(".design/system.md"), doc).unwrap();
        }
        tmp
    }

    fn guard(root: &Path, config: GuardConfig) -> Guard {
        Guard::new(root, Checker::builder().config(config).build().unwrap())
    }

    #[test]
    fn no_design_system_skips_before_anything_else() {
        let tmp = project(None);
        let g = guard(tmp.path(), GuardConfig::default());
        assert!(matches!(
            g.run(None),
            Outcome::Skipped(SkipReason::NoDesignSystem)
        ));
    }

    #[test]
    fn missing_target_argument_skips() {
        let tmp = project(Some("Depth: Borders-only"));
        let g = guard(tmp.path(), GuardConfig::default());
        assert!(matches!(g.run(None), Outcome::Skipped(SkipReason::NoTarget)));
    }

    #[test]
    fn unsupported_extension_skips_even_if_missing() {
        let tmp = project(Some("Depth: Borders-only"));
        let g = guard(tmp.path(), GuardConfig::default());
        let outcome = g.run(Some(tmp.path().join("script.py").as_path()));
        assert!(matches!(
            outcome,
            Outcome::Skipped(SkipReason::UnsupportedExtension)
        ));
        assert!(!outcome.is_blocking());
    }

    #[test]
    fn missing_target_file_skips() {
        let tmp = project(Some("Depth: Borders-only"));
        let g = guard(tmp.path(), GuardConfig::default());
        assert!(matches!(
            g.run(Some(tmp.path().join("Gone.tsx").as_path())),
            Outcome::Skipped(SkipReason::TargetUnreadable)
        ));
    }

    #[test]
    fn checked_without_rules_is_clean() {
        let tmp = project(Some("Depth: Borders-only"));
        let file = tmp.path().join("Card.css");
        fs::write(&file, ".card { margin: 7px; }").unwrap();
        let g = guard(tmp.path(), GuardConfig::default());
        let outcome = g.run(Some(file.as_path()));
        let result = outcome.result().unwrap();
        assert!(result.is_clean());
        assert_eq!(result.files_checked, 1);
        assert!(!outcome.is_blocking());
    }

    #[test]
    fn configured_document_path_and_spacing_unit() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("DESIGN.md"), "#ffffff").unwrap();
        let config =
            GuardConfig::parse("[guard]\ndesign_system = \"DESIGN.md\"\nspacing_unit = 8\n")
                .unwrap();
        let g = guard(tmp.path(), config);
        let system = g.load_system().unwrap();
        assert_eq!(system.spacing_unit, 8);
        assert_eq!(system.colors, vec!["#ffffff"]);
    }
}
