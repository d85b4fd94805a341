//! Design system extraction from a project's description document.
//!
//! The document (usually `.design/system.md`) is free-form markdown. Only two
//! things are derived from it: the depth strategy, detected through literal
//! marker phrases, and the palette, collected from every `#rrggbb` token.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Default spacing grid in pixels.
pub const DEFAULT_SPACING_UNIT: u32 = 4;

#[allow(clippy::expect_used)]
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("hex color pattern is valid"));

/// Returns the compiled `#rrggbb` pattern shared by extraction and rules.
#[must_use]
pub fn hex_color_pattern() -> &'static Regex {
    &HEX_COLOR
}

/// The project's approach to visual elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthStrategy {
    /// No recognised marker in the document.
    #[default]
    Unknown,
    /// Flat surfaces separated by borders.
    BordersOnly,
    /// Light, low-offset shadows.
    SubtleShadows,
    /// Stacked shadows for pronounced elevation.
    LayeredShadows,
}

/// Marker phrases in priority order. The first category with any match wins.
const DEPTH_MARKERS: &[(DepthStrategy, &[&str])] = &[
    (
        DepthStrategy::BordersOnly,
        &["Depth: Borders-only", "borders-only"],
    ),
    (
        DepthStrategy::SubtleShadows,
        &["Depth: Subtle", "subtle shadows"],
    ),
    (
        DepthStrategy::LayeredShadows,
        &["Depth: Layered", "layered shadows"],
    ),
];

impl DepthStrategy {
    /// Detects the depth strategy from document text.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        DEPTH_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| text.contains(m)))
            .map_or(Self::Unknown, |(strategy, _)| *strategy)
    }
}

impl std::fmt::Display for DepthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::BordersOnly => write!(f, "borders-only"),
            Self::SubtleShadows => write!(f, "subtle-shadows"),
            Self::LayeredShadows => write!(f, "layered-shadows"),
        }
    }
}

/// Rules derived from a design system document.
///
/// Immutable once derived; one per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystem {
    /// Declared depth strategy.
    pub depth: DepthStrategy,
    /// Lowercase `#rrggbb` colors in first-seen order, without duplicates.
    pub colors: Vec<String>,
    /// Pixel grid that spacing values must be multiples of.
    pub spacing_unit: u32,
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self {
            depth: DepthStrategy::Unknown,
            colors: Vec::new(),
            spacing_unit: DEFAULT_SPACING_UNIT,
        }
    }
}

impl DesignSystem {
    /// Loads and extracts the design system at `path`.
    ///
    /// Returns `None` when the document is missing or unreadable: a project
    /// without a declared design system is not validated.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(Self::from_document(&text)),
            Err(e) => {
                tracing::debug!("No design system at {}: {e}", path.display());
                None
            }
        }
    }

    /// Derives a design system from document text.
    #[must_use]
    pub fn from_document(text: &str) -> Self {
        let mut seen = HashSet::new();
        let colors = HEX_COLOR
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|c| seen.insert(c.clone()))
            .collect();

        Self {
            depth: DepthStrategy::detect(text),
            colors,
            spacing_unit: DEFAULT_SPACING_UNIT,
        }
    }

    /// Overrides the spacing grid.
    #[must_use]
    pub fn with_spacing_unit(mut self, unit: u32) -> Self {
        self.spacing_unit = unit;
        self
    }

    /// Returns true if a palette was declared.
    #[must_use]
    pub fn has_palette(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Case-insensitive palette membership.
    #[must_use]
    pub fn allows_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.eq_ignore_ascii_case(color))
    }
}
