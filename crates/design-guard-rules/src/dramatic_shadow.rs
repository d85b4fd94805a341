//! Rule to flag dramatic shadows.
//!
//! A `box-shadow` whose value includes a `25px` blur or spread reads as a
//! heavy drop shadow regardless of the declared depth strategy. One violation
//! per file.

use design_guard_core::{DesignSystem, FileContext, Rule, Violation, ViolationKind};
use regex::Regex;
use std::sync::LazyLock;

/// Rule code for dramatic-shadow.
pub const CODE: &str = "DG004";

/// Rule name for dramatic-shadow.
pub const NAME: &str = "dramatic-shadow";

#[allow(clippy::expect_used)]
static DRAMATIC_SHADOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"box-shadow:\s*[^;]*\b25px\b").expect("dramatic shadow pattern is valid")
});

/// Flags `box-shadow` declarations with a 25px component.
#[derive(Debug, Clone, Default)]
pub struct DramaticShadow;

impl DramaticShadow {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DramaticShadow {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::AntiPattern
    }

    fn description(&self) -> &'static str {
        "Flags dramatic box-shadows (25px blur or spread)"
    }

    fn check(&self, ctx: &FileContext, _system: &DesignSystem) -> Vec<Violation> {
        DRAMATIC_SHADOW
            .find(ctx.content)
            .map(|m| {
                self.violation(
                    ctx,
                    &m,
                    "Dramatic shadow detected (25px+)".to_string(),
                    "Use subtle shadows: 0 1px 3px rgba(0,0,0,0.08)".to_string(),
                )
            })
            .into_iter()
            .collect()
    }
}
