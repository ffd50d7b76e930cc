//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# layout-lint configuration

# Rule preset: "recommended" (default) or "minimal"
preset = "recommended"

# Lowest severity that makes `layout-lint check` exit non-zero
fail_on = "error"

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.react-component-layout]
enabled = true
# severity = "warning"  # Override default severity

# Exact names of router/translation accessors that come right after props
# priority_hooks = ["useLocation", "useTranslation", "useRouter", "useNavigate"]

# Function names starting with these prefixes are event handlers
# handler_prefixes = ["handle", "on"]

# Skip *.test.tsx, *.stories.tsx and __tests__ directories
# ignore_test_files = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("layout-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created layout-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit layout-lint.toml to configure the rule");
    println!("  2. Run: layout-lint check src");

    Ok(())
}
