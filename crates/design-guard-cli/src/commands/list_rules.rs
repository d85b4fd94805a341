//! List rules command implementation.

use design_guard_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<18} {:<14} Description", "Code", "Name", "Kind");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<8} {:<18} {:<14} {}",
            rule.code(),
            rule.name(),
            rule.kind().to_string(),
            rule.description()
        );
    }

    println!("\nDisable or downgrade rules in design-guard.toml, e.g.:");
    println!("  [rules.spacing-grid]");
    println!("  severity = \"warning\"");
}
