//! # design-guard-rules
//!
//! Built-in design-system rules for design-guard.
//!
//! ## Available Rules
//!
//! | Code | Name | Kind | Description |
//! |------|------|------|-------------|
//! | DG001 | `depth-strategy` | depth | Forbids drop shadows when the design system is borders-only |
//! | DG002 | `spacing-grid` | spacing | Requires pixel values on the spacing grid |
//! | DG003 | `color-palette` | color | Forbids hex colors outside the declared palette |
//! | DG004 | `dramatic-shadow` | anti-pattern | Flags 25px box-shadows |
//! | DG005 | `oversized-radius` | anti-pattern | Flags 16/20/24/32px border radii |
//!
//! ## Usage
//!
//! ```ignore
//! use design_guard_core::DesignSystem;
//!
//! let system = DesignSystem::from_document(&std::fs::read_to_string(".design/system.md")?);
//! for violation in design_guard_rules::check(&content, &system) {
//!     eprint!("{}", violation.format());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color_palette;
mod depth_strategy;
mod dramatic_shadow;
mod oversized_radius;
mod presets;
mod spacing_grid;

pub use color_palette::ColorPalette;
pub use depth_strategy::DepthStrategyRule;
pub use dramatic_shadow::DramaticShadow;
pub use oversized_radius::OversizedRadius;
pub use presets::{all_rules, rules_for};
pub use spacing_grid::{nearest_multiple, SpacingGrid};

/// Re-export core types for convenience.
pub use design_guard_core::{DesignSystem, Rule, Severity, Violation, ViolationKind};

use design_guard_core::FileContext;
use std::path::Path;

/// Runs every built-in rule over `content` and returns violations in
/// detection order: depth, spacing, color, anti-patterns.
#[must_use]
pub fn check(content: &str, system: &DesignSystem) -> Vec<Violation> {
    let ctx = FileContext::new(Path::new(""), content);
    all_rules()
        .iter()
        .flat_map(|rule| rule.check(&ctx, system))
        .collect()
}
