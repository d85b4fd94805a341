//! Rule trait for defining design-system checks.

use crate::context::FileContext;
use crate::system::DesignSystem;
use crate::types::{Severity, Violation, ViolationKind};

/// A text-scanning design rule.
///
/// Rules are pure: they read the file content and the extracted
/// [`DesignSystem`] and return violations in detection order.
///
/// # Example
///
/// ```ignore
/// use design_guard_core::{DesignSystem, FileContext, Rule, Violation, ViolationKind};
///
/// pub struct NoImportant;
///
/// impl Rule for NoImportant {
///     fn name(&self) -> &'static str { "no-important" }
///     fn code(&self) -> &'static str { "DG100" }
///     fn kind(&self) -> ViolationKind { ViolationKind::AntiPattern }
///
///     fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation> {
///         // scan ctx.content ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "spacing-grid").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "DG002").
    fn code(&self) -> &'static str;

    /// Returns the category of violations this rule produces.
    fn kind(&self) -> ViolationKind;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation>;

    /// Builds a violation carrying this rule's code, name and kind.
    fn violation(
        &self,
        ctx: &FileContext,
        m: &regex::Match<'_>,
        message: String,
        suggestion: String,
    ) -> Violation {
        Violation::new(
            self.code(),
            self.name(),
            self.kind(),
            ctx.location_of(m),
            message,
            suggestion,
        )
        .with_severity(self.default_severity())
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
