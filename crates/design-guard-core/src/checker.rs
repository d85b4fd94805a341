//! Rule checker orchestrating the design-system scans over one file.

use crate::config::{ConfigError, GuardConfig};
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::system::DesignSystem;
use crate::types::{LintResult, Violation};

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a checker.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    config: Option<GuardConfig>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules, preserving their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn build(self) -> Result<Checker, CheckerError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name(), rule.code());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        Ok(Checker { rules, config })
    }
}

/// Runs the registered rules, in registration order, over file content.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    rules: Vec<RuleBox>,
    config: GuardConfig,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Runs every enabled rule over the file and collects violations in
    /// detection order.
    #[must_use]
    pub fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let found = rule.check(ctx, system);
            debug!("{} found {} violation(s)", rule.name(), found.len());
            violations.extend(self.apply_severity_override(rule.as_ref(), found));
        }
        violations
    }

    /// Checks `content` as the file at `path`.
    #[must_use]
    pub fn check_content(&self, path: &Path, content: &str, system: &DesignSystem) -> LintResult {
        let ctx = FileContext::new(path, content);
        LintResult {
            violations: self.check(&ctx, system),
            files_checked: 1,
        }
    }

    fn apply_severity_override(
        &self,
        rule: &dyn Rule,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule.name(), rule.code()) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Severity, ViolationKind};

    /// Flags every occurrence of `!important`.
    struct NoImportant;

    impl Rule for NoImportant {
        fn name(&self) -> &'static str {
            "no-important"
        }
        fn code(&self) -> &'static str {
            "DG900"
        }
        fn kind(&self) -> ViolationKind {
            ViolationKind::AntiPattern
        }
        fn check(&self, ctx: &FileContext, _system: &DesignSystem) -> Vec<Violation> {
            let re = regex::Regex::new("!important").unwrap();
            re.find_iter(ctx.content)
                .map(|m| self.violation(ctx, &m, "!important".into(), "remove it".into()))
                .collect()
        }
    }

    /// Always reports one violation.
    struct Always(&'static str);

    impl Rule for Always {
        fn name(&self) -> &'static str {
            self.0
        }
        fn code(&self) -> &'static str {
            "DG901"
        }
        fn kind(&self) -> ViolationKind {
            ViolationKind::Spacing
        }
        fn check(&self, ctx: &FileContext, _system: &DesignSystem) -> Vec<Violation> {
            let re = regex::Regex::new("^").unwrap();
            re.find(ctx.content)
                .map(|m| self.violation(ctx, &m, self.0.into(), String::new()))
                .into_iter()
                .collect()
        }
    }

    #[test]
    fn runs_rules_in_registration_order() {
        let checker = Checker::builder()
            .rule(Always("first"))
            .rule(NoImportant)
            .rule(Always("last"))
            .build()
            .unwrap();

        let result = checker.check_content(
            Path::new("a.css"),
            "a { color: red !important; }",
            &DesignSystem::default(),
        );
        let names: Vec<&str> = result.violations.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(names, vec!["first", "no-important", "last"]);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn disabled_rules_are_dropped() {
        let config = GuardConfig::parse("[rules.no-important]\nenabled = false\n").unwrap();
        let checker = Checker::builder()
            .config(config)
            .rule(NoImportant)
            .rule(Always("kept"))
            .build()
            .unwrap();
        assert_eq!(checker.rule_count(), 1);
    }

    #[test]
    fn severity_override_applies_to_rule_violations() {
        let config = GuardConfig::parse("[rules.DG900]\nseverity = \"warning\"\n").unwrap();
        let checker = Checker::builder().config(config).rule(NoImportant).build().unwrap();
        let result = checker.check_content(
            Path::new("a.css"),
            "a { color: red !important; }",
            &DesignSystem::default(),
        );
        assert_eq!(result.violations[0].severity, Severity::Warning);
        assert!(!result.has_errors());
    }

    #[test]
    fn invalid_config_fails_build() {
        let config = GuardConfig::parse("[guard]\nspacing_unit = 0\n").unwrap();
        assert!(Checker::builder().config(config).build().is_err());
    }
}
