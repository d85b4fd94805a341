//! Rule to flag oversized corner radii.
//!
//! `border-radius` values of 16, 20, 24 or 32 pixels produce pill-like
//! surfaces that rarely belong in a dense interface. One violation per file.

use design_guard_core::{DesignSystem, FileContext, Rule, Violation, ViolationKind};
use regex::Regex;
use std::sync::LazyLock;

/// Rule code for oversized-radius.
pub const CODE: &str = "DG005";

/// Rule name for oversized-radius.
pub const NAME: &str = "oversized-radius";

#[allow(clippy::expect_used)]
static OVERSIZED_RADIUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"border-radius:\s*(16|20|24|32)px").expect("radius pattern is valid")
});

/// Flags `border-radius` of 16px, 20px, 24px or 32px.
#[derive(Debug, Clone, Default)]
pub struct OversizedRadius;

impl OversizedRadius {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for OversizedRadius {
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
        "Flags oversized border radii (16px, 20px, 24px, 32px)"
    }

    fn check(&self, ctx: &FileContext, _system: &DesignSystem) -> Vec<Violation> {
        OVERSIZED_RADIUS
            .find(ctx.content)
            .map(|m| {
                self.violation(
                    ctx,
                    &m,
                    "Large border radius detected (16px+)".to_string(),
                    "Use system scale: 4px, 6px, or 8px for sharp; 8px, 12px for soft"
                        .to_string(),
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(content: &str) -> Vec<Violation> {
        let ctx = FileContext::new(Path::new("Card.svelte"), content);
        OversizedRadius::new().check(&ctx, &DesignSystem::default())
    }

    #[test]
    fn flags_each_listed_radius() {
        for px in [16, 20, 24, 32] {
            let v = check(&format!(".card {{ border-radius: {px}px; }}"));
            assert_eq!(v.len(), 1, "{px}px");
            assert_eq!(v[0].message, "Large border radius detected (16px+)");
        }
    }

    #[test]
    fn other_radii_pass() {
        for px in [4, 6, 8, 12, 28, 40, 160] {
            assert!(check(&format!("border-radius: {px}px;")).is_empty(), "{px}px");
        }
    }

    #[test]
    fn reports_once_per_file() {
        assert_eq!(check("border-radius: 16px; border-radius:24px;").len(), 1);
    }

    #[test]
    fn only_first_value_is_inspected() {
        assert!(check("border-radius: 8px 16px;").is_empty());
    }
}
