//! Rule presets.

use crate::{ColorPalette, DepthStrategyRule, DramaticShadow, OversizedRadius, SpacingGrid};
use design_guard_core::RuleBox;
use std::path::Path;

/// Returns every built-in rule in detection order.
///
/// Order matters: violations are reported depth, spacing, color, then
/// anti-patterns.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DepthStrategyRule::new()),
        Box::new(SpacingGrid::new()),
        Box::new(ColorPalette::new()),
        Box::new(DramaticShadow::new()),
        Box::new(OversizedRadius::new()),
    ]
}

/// Returns every built-in rule, with palette suggestions naming `design_system`.
#[must_use]
pub fn rules_for(design_system: &Path) -> Vec<RuleBox> {
    vec![
        Box::new(DepthStrategyRule::new()),
        Box::new(SpacingGrid::new()),
        Box::new(ColorPalette::new().source(design_system)),
        Box::new(DramaticShadow::new()),
        Box::new(OversizedRadius::new()),
    ]
}
