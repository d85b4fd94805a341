//! Context types for rule execution.

use std::path::Path;

use crate::types::Location;

/// Context provided to rules.
///
/// Holds the file being checked and maps byte offsets of regex matches back
/// to line/column locations.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file as given to the guard.
    pub path: &'a Path,
    /// File contents.
    pub content: &'a str,
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path,
            content,
            line_starts,
        }
    }

    /// Returns the file extension with a leading dot (e.g. `".tsx"`).
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        dotted_extension(self.path)
    }

    /// Builds a location for a match spanning `length` bytes at `offset`.
    #[must_use]
    pub fn location(&self, offset: usize, length: usize) -> Location {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        let column = self
            .content
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;

        Location::new(self.path.to_path_buf(), line_idx + 1, column).with_span(offset, length)
    }

    /// Builds a location from a regex match.
    #[must_use]
    pub fn location_of(&self, m: &regex::Match<'_>) -> Location {
        self.location(m.start(), m.len())
    }
}

/// Returns the extension of `path` with a leading dot.
pub(crate) fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}
