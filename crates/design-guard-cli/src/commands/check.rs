//! Check command implementation.

use anyhow::{Context, Result};
use design_guard_core::{Checker, Guard, Outcome};
use design_guard_rules::rules_for;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::CheckArgs;

/// Hook payload delivered on stdin by the calling editor or agent.
#[derive(Debug, Deserialize)]
struct HookPayload {
    #[serde(default)]
    tool_input: Option<ToolInput>,
}

#[derive(Debug, Deserialize)]
struct ToolInput {
    #[serde(default)]
    file_path: Option<PathBuf>,
}

/// Runs the check command.
///
/// Exits with status 1 when the written file violates the design system.
pub fn run(root: &Path, args: &CheckArgs, source: &ConfigSource) -> Result<()> {
    let config = source.load();
    let design_system = config.guard.design_system.clone();

    let checker = Checker::builder()
        .config(config)
        .rules(rules_for(&design_system))
        .build()
        .context("Failed to build checker")?;

    let target = if args.stdin {
        target_from_payload(std::io::stdin().lock())
    } else {
        args.file.clone()
    };

    let outcome = Guard::new(root, checker).run(target.as_deref());

    let Outcome::Checked(result) = outcome else {
        return Ok(());
    };

    super::output::print(&result, args.format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Extracts `tool_input.file_path` from a JSON hook payload.
///
/// A malformed payload means there is nothing to validate.
fn target_from_payload(mut reader: impl Read) -> Option<PathBuf> {
    let mut raw = String::new();
    if let Err(e) = reader.read_to_string(&mut raw) {
        tracing::warn!("Failed to read hook payload: {e}");
        return None;
    }
    match serde_json::from_str::<HookPayload>(&raw) {
        Ok(payload) => payload.tool_input.and_then(|input| input.file_path),
        Err(e) => {
            tracing::warn!("Ignoring malformed hook payload: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_file_path_is_extracted() {
        let json = r#"{"tool_name":"Write","tool_input":{"file_path":"src/Card.tsx","content":"x"}}"#;
        assert_eq!(
            target_from_payload(json.as_bytes()),
            Some(PathBuf::from("src/Card.tsx"))
        );
    }

    #[test]
    fn payload_without_file_path_is_none() {
        assert!(target_from_payload(r#"{"tool_input":{}}"#.as_bytes()).is_none());
        assert!(target_from_payload(r#"{"session_id":"abc"}"#.as_bytes()).is_none());
    }

    #[test]
    fn malformed_payload_is_none() {
        assert!(target_from_payload("not json".as_bytes()).is_none());
        assert!(target_from_payload("".as_bytes()).is_none());
    }
}
