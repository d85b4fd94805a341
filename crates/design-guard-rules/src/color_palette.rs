//! Rule to restrict hex colors to the declared palette.
//!
//! Only runs when the design system document declares at least one
//! `#rrggbb` color. Comparison is case-insensitive; the message quotes the
//! color as written in the file. Each distinct color is reported once.

use design_guard_core::{
    hex_color_pattern, DesignSystem, FileContext, Rule, Violation, ViolationKind,
    DEFAULT_DESIGN_SYSTEM,
};
use std::collections::HashSet;
use std::path::PathBuf;

/// Rule code for color-palette.
pub const CODE: &str = "DG003";

/// Rule name for color-palette.
pub const NAME: &str = "color-palette";

/// Forbids hex colors outside the design system palette.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Document named in the remediation text.
    pub source: PathBuf,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPalette {
    /// Creates a new rule pointing at the default design system document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_DESIGN_SYSTEM),
        }
    }

    /// Sets the document named in suggestions.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }
}

impl Rule for ColorPalette {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::Color
    }

    fn description(&self) -> &'static str {
        "Forbids hex colors that are not in the design system palette"
    }

    fn check(&self, ctx: &FileContext, system: &DesignSystem) -> Vec<Violation> {
        if !system.has_palette() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        hex_color_pattern()
            .find_iter(ctx.content)
            .filter(|m| !system.allows_color(m.as_str()))
            .filter(|m| seen.insert(m.as_str().to_ascii_lowercase()))
            .map(|m| {
                self.violation(
                    ctx,
                    &m,
                    format!("Color {} not in design system palette", m.as_str()),
                    format!("Use a color from {} tokens", self.source.display()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(content: &str, system: &DesignSystem) -> Vec<Violation> {
        let ctx = FileContext::new(Path::new("theme.scss"), content);
        ColorPalette::new().check(&ctx, system)
    }

    fn black_and_white() -> DesignSystem {
        DesignSystem::from_document("- bg: #ffffff\n- fg: #000000\n")
    }

    #[test]
    fn palette_colors_pass() {
        assert!(check("color: #ffffff; background: #FFFFFF;", &black_and_white()).is_empty());
    }

    #[test]
    fn foreign_color_is_reported_once() {
        let v = check("color: #123456; border-color: #123456;", &black_and_white());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, ViolationKind::Color);
        assert_eq!(v[0].message, "Color #123456 not in design system palette");
        assert_eq!(v[0].suggestion.message, "Use a color from .design/system.md tokens");
    }

    #[test]
    fn message_preserves_original_case_and_dedupes_case_insensitively() {
        let v = check("a { color: #ABCDEF } b { color: #abcdef }", &black_and_white());
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("#ABCDEF"));
    }

    #[test]
    fn distinct_colors_reported_in_order() {
        let v = check("#111111 #222222 #111111 #333333", &black_and_white());
        let colors: Vec<&str> = v
            .iter()
            .map(|v| &v.message["Color ".len().."Color ".len() + 7])
            .collect();
        assert_eq!(colors, vec!["#111111", "#222222", "#333333"]);
    }

    #[test]
    fn skipped_without_palette() {
        let system = DesignSystem::from_document("Depth: Borders-only");
        assert!(check("color: #123456;", &system).is_empty());
    }

    #[test]
    fn suggestion_names_configured_source() {
        let ctx = FileContext::new(Path::new("a.css"), "color: #123456;");
        let v = ColorPalette::new()
            .source("docs/design.md")
            .check(&ctx, &black_and_white());
        assert_eq!(v[0].suggestion.message, "Use a color from docs/design.md tokens");
    }
}
