//! Rule to keep pixel values on the spacing grid.
//!
//! # Detected Patterns
//!
//! Any `<integer>px` literal preceded by whitespace or a colon whose value is
//! not a multiple of the grid (default 4px), e.g. `margin: 7px`.
//!
//! # Allowed Patterns
//!
//! - `0px` and `1px` (hairline borders)
//! - Multiples of the grid
//!
//! Each distinct value is reported once, at its first occurrence.

use design_guard_core::{DesignSystem, FileContext, Rule, Violation, ViolationKind};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Rule code for spacing-grid.
pub const CODE: &str = "DG002";

/// Rule name for spacing-grid.
pub const NAME: &str = "spacing-grid";

#[allow(clippy::expect_used)]
static PIXEL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:\s]([0-9]+)px").expect("pixel literal pattern is valid"));

/// Requires pixel values to sit on the spacing grid.
#[derive(Debug, Clone, Default)]
pub struct SpacingGrid;

impl SpacingGrid {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Rounds `value` to the nearest multiple of `unit`, halves rounding up.
#[must_use]
pub fn nearest_multiple(value: u64, unit: u64) -> u64 {
    if unit == 0 {
        return value;
    }
    let (quotient, remainder) = (value / unit, value % unit);
    let steps = if remainder * 2 >= unit {
        quotient.saturating_add(1)
    } else {
        quotient
    };
    steps.saturating_mul(unit)
}

impl Rule for SpacingGrid {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::Spacing
    }

    fn description(&self) -> &'static str {
        "Requires pixel values to be multiples of the spacing grid"
    }

    fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation> {
        let unit = u64::from(system.spacing_unit.max(1));
        let mut seen = HashSet::new();
        let mut violations = Vec::new();

        for caps in PIXEL_LITERAL.captures_iter(ctx.content) {
            let Some(number) = caps.get(1) else {
                continue;
            };
            let Ok(value) = number.as_str().parse::<u64>() else {
                continue;
            };
            if value <= 1 || value % unit == 0 || !seen.insert(value) {
                continue;
            }

            // Span covers the number and its `px` suffix.
            let location = ctx.location(number.start(), number.len() + 2);
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    ViolationKind::Spacing,
                    location,
                    format!("{value}px is not on {unit}px grid"),
                    format!("Use {}px instead", nearest_multiple(value, unit)),
                )
                .with_severity(self.default_severity()),
            );
        }

        violations
    }
}
