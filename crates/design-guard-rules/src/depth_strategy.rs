//! Rule to keep elevation cues consistent with a borders-only depth strategy.
//!
//! # Rationale
//!
//! A design system that separates surfaces with borders looks inconsistent as
//! soon as a component introduces a drop shadow. This rule only applies when
//! the design system document declares a borders-only strategy.
//!
//! # Detected Patterns
//!
//! - `box-shadow: 0 4px 12px ...` (first offending declaration only)
//! - Tailwind `shadow-sm`, `shadow-md`, `shadow-lg`, `shadow-xl`, `shadow-2xl`
//!
//! # Allowed Patterns
//!
//! - Ring shadows: `box-shadow: 0 0 0 1px ...`
//! - Inset shadows: `box-shadow: inset 0 1px 0 ...`
//! - `box-shadow: none`

use design_guard_core::{DepthStrategy, DesignSystem, FileContext, Rule, Violation, ViolationKind};
use regex::Regex;
use std::sync::LazyLock;

/// Rule code for depth-strategy.
pub const CODE: &str = "DG001";

/// Rule name for depth-strategy.
pub const NAME: &str = "depth-strategy";

#[allow(clippy::expect_used)]
static SHADOW_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"box-shadow:\s*([^;]+)").expect("shadow declaration pattern is valid")
});

#[allow(clippy::expect_used)]
static SHADOW_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bshadow-(sm|md|lg|xl|2xl)\b").expect("shadow class pattern is valid")
});

/// Forbids shadows when the design system is borders-only.
#[derive(Debug, Clone, Default)]
pub struct DepthStrategyRule;

impl DepthStrategyRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// A ring (`0 0 0 Npx`), inset or `none` shadow reads as a border.
    fn is_border_like(value: &str) -> bool {
        value.contains("0 0 0") || value.contains("inset") || value.trim() == "none"
    }
}

impl Rule for DepthStrategyRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::Depth
    }

    fn description(&self) -> &'static str {
        "Forbids drop shadows when the design system is borders-only"
    }

    fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation> {
        if system.depth != DepthStrategy::BordersOnly {
            return Vec::new();
        }

        let mut violations = Vec::new();

        let offending = SHADOW_DECLARATION
            .captures_iter(ctx.content)
            .find(|caps| caps.get(1).is_some_and(|v| !Self::is_border_like(v.as_str())))
            .and_then(|caps| caps.get(0));
        if let Some(m) = offending {
            violations.push(self.violation(
                ctx,
                &m,
                "Shadow detected but system uses borders-only depth strategy".to_string(),
                "Use border instead: border: 0.5px solid rgba(0,0,0,0.08)".to_string(),
            ));
        }

        if let Some(m) = SHADOW_CLASS.find(ctx.content) {
            violations.push(self.violation(
                ctx,
                &m,
                "Tailwind shadow class used but system is borders-only".to_string(),
                "Use border classes instead".to_string(),
            ));
        }

        violations
    }
}
