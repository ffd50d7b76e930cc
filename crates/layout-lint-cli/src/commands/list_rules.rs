//! List rules command implementation.

use layout_lint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in [Preset::Recommended, Preset::Minimal] {
        let summary: Vec<String> = preset
            .rules()
            .iter()
            .map(|rule| format!("{} ({})", rule.code(), rule.default_severity()))
            .collect();
        println!("  {:<12} - {}", preset.name(), summary.join(", "));
    }

    println!("\nSelect a preset in layout-lint.toml, e.g.:");
    println!("  preset = \"minimal\"");
}
