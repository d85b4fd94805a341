//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/design-guard.toml` or `.design-guard.toml`
//! 3. `~/.design-guard/config.toml` (global fallback)
//! 4. No config found → defaults

use design_guard_core::GuardConfig;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.design-guard/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration, falling back to defaults on any problem.
    ///
    /// A broken config must not block writes, so errors are logged and
    /// the defaults apply.
    #[must_use]
    pub fn load(&self) -> GuardConfig {
        let Some(p) = self.path() else {
            return GuardConfig::default();
        };
        if let Self::Global(_) = self {
            tracing::info!("Using global config: {}", p.display());
        }
        match GuardConfig::from_file(p).and_then(|config| config.validate().map(|()| config)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {e}", p.display());
                GuardConfig::default()
            }
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["design-guard.toml", ".design-guard.toml"];

/// Resolves where the configuration for `project_dir` comes from.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let global = global_config_file();
    let source = match explicit {
        Some(p) => ConfigSource::Explicit(p.to_path_buf()),
        None => discover(project_dir, global.as_deref()),
    };
    tracing::debug!("Config source: {source:?}");
    source
}

/// Looks for a project config, then the global one.
fn discover(project_dir: &Path, global: Option<&Path>) -> ConfigSource {
    PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|p| p.is_file())
        .map(ConfigSource::Project)
        .or_else(|| {
            global
                .filter(|p| p.is_file())
                .map(|p| ConfigSource::Global(p.to_path_buf()))
        })
        .unwrap_or(ConfigSource::Default)
}

/// `$DESIGN_GUARD_CONFIG_DIR/config.toml`, else `~/.design-guard/config.toml`.
fn global_config_file() -> Option<PathBuf> {
    std::env::var_os("DESIGN_GUARD_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".design-guard")))
        .map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_even_if_missing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("design-guard.toml"), "").unwrap();
        let explicit = tmp.path().join("elsewhere.toml");

        let source = resolve(tmp.path(), Some(explicit.as_path()));
        assert_eq!(source, ConfigSource::Explicit(explicit));
        assert_eq!(source.load().guard.extensions.len(), 6);
    }

    #[test]
    fn plain_project_name_preferred_over_dotted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".design-guard.toml"), "").unwrap();
        assert_eq!(
            discover(tmp.path(), None),
            ConfigSource::Project(tmp.path().join(".design-guard.toml"))
        );

        fs::write(tmp.path().join("design-guard.toml"), "").unwrap();
        assert_eq!(
            discover(tmp.path(), None),
            ConfigSource::Project(tmp.path().join("design-guard.toml"))
        );
    }

    #[test]
    fn global_file_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let global_file = global.path().join("config.toml");
        assert_eq!(
            discover(project.path(), Some(global_file.as_path())),
            ConfigSource::Default
        );

        fs::write(&global_file, "[guard]\nspacing_unit = 8\n").unwrap();
        let source = discover(project.path(), Some(global_file.as_path()));
        assert_eq!(source, ConfigSource::Global(global_file));
        assert_eq!(source.load().spacing_unit(), 8);
    }

    #[test]
    fn invalid_or_broken_config_loads_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("design-guard.toml");
        fs::write(&path, "[guard]\nspacing_unit = 0\n").unwrap();
        assert_eq!(ConfigSource::Project(path.clone()).load().spacing_unit(), 4);

        fs::write(&path, "not toml [").unwrap();
        assert_eq!(ConfigSource::Project(path).load().spacing_unit(), 4);
    }
}
