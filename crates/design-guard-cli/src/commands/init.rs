//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config_resolver::ConfigSource;

const DEFAULT_SYSTEM: &str = r"# Design System

## Depth

Depth: Borders-only

Surfaces are separated with hairline borders. Ring shadows
(`box-shadow: 0 0 0 1px ...`) count as borders.

## Spacing

All spacing sits on a 4px grid: 4px, 8px, 12px, 16px, 24px, 32px.

## Radius

4px, 6px, or 8px for sharp components; 8px, 12px for soft ones.

## Tokens

- background: #ffffff
- surface: #fafafa
- border: #e5e5e5
- text: #111111
- muted: #6b6b6b
- accent: #2563eb
";

/// Runs the init command.
pub fn run(root: &Path, source: &ConfigSource, force: bool) -> Result<()> {
    let config = source.load();
    let path = config.design_system_path(root);

    if path.exists() && !force {
        bail!(
            "Design system already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, DEFAULT_SYSTEM)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit the depth strategy and tokens to match your project");
    println!("  2. Run: design-guard <file>");

    Ok(())
}
