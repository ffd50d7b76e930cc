//! Rule presets for common configurations.

use std::fmt;
use std::str::FromStr;

use layout_lint_core::{Config, RuleBox, Severity};

use crate::react_component_layout::{self, ReactComponentLayout};

/// Preset configurations for layout-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    #[default]
    Recommended,
    /// Warnings only, test and story files skipped, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Preset name as written in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!(
                "unknown preset `{other}`. Valid values: recommended, minimal"
            )),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `react-component-layout` (LL001) at error severity
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![Box::new(layout_rule(Preset::Recommended))]
}

/// Returns the minimal set of rules.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(layout_rule(Preset::Minimal))]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(ReactComponentLayout::new())]
}

/// Builds the rules of `preset` with the options from `config` applied.
///
/// Enablement and severity overrides are left to the analyzer.
#[must_use]
pub fn configured_rules(preset: Preset, config: &Config) -> Vec<RuleBox> {
    let mut layout = layout_rule(preset);
    if let Some(rule_config) = config.rule_config(react_component_layout::NAME) {
        layout = layout.with_config(rule_config);
    }
    vec![Box::new(layout)]
}

fn layout_rule(preset: Preset) -> ReactComponentLayout {
    match preset {
        Preset::Recommended => ReactComponentLayout::new(),
        Preset::Minimal => ReactComponentLayout::new()
            .severity(Severity::Warning)
            .ignore_test_files(true),
    }
}
