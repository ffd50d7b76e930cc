//! Check command implementation.

use anyhow::{Context, Result};
use layout_lint_core::{apply_fixes, Analyzer, AnalyzerError, Config};
use layout_lint_rules::{configured_rules, Preset};
use layout_lint_ts::TsxExtractor;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Upper bound on fix passes per file; each pass re-analyzes the rewritten text.
const MAX_FIX_PASSES: usize = 10;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    fix: bool,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;

    let preset = match config.preset.as_deref() {
        Some(name) => name.parse::<Preset>().map_err(anyhow::Error::msg)?,
        None => Preset::default(),
    };
    let fail_on = config
        .fail_on_severity()
        .context("Invalid fail_on in config")?;
    let rules = configured_rules(preset, &config);

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .extractor(TsxExtractor::new())
        .excludes(exclude);

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} rule(s), preset {}",
        path,
        analyzer.rule_count(),
        preset
    );

    if fix {
        let fixed = fix_files(&analyzer)?;
        tracing::info!("Rewrote {} file(s)", fixed);
    }

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Applies fixes to every discovered file, returning how many were rewritten.
fn fix_files(analyzer: &Analyzer) -> Result<usize> {
    let mut rewritten = 0;

    for file in analyzer.discover_files()? {
        let original = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let fixed = fix_source(analyzer, &file, &original)?;

        if fixed != original {
            std::fs::write(&file, &fixed)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::info!("Fixed {}", file.display());
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

/// Runs fix passes until nothing changes, the pass limit is hit, or a pass
/// produces text that no longer parses. Only text that parsed is returned.
fn fix_source(analyzer: &Analyzer, path: &Path, original: &str) -> Result<String> {
    let mut accepted = original.to_string();
    let mut violations = match analyzer.analyze_source(path, &accepted) {
        Ok(violations) => violations,
        Err(AnalyzerError::Parse { source, .. }) => {
            tracing::warn!("Not fixing {}: {}", path.display(), source);
            return Ok(accepted);
        }
        Err(e) => return Err(e.into()),
    };

    for pass in 1..=MAX_FIX_PASSES {
        let outcome = apply_fixes(&accepted, &violations);
        if !outcome.changed() {
            break;
        }

        match analyzer.analyze_source(path, &outcome.output) {
            Ok(next) => {
                tracing::debug!(
                    "{}: pass {} applied {} fix(es), deferred {}",
                    path.display(),
                    pass,
                    outcome.applied,
                    outcome.skipped
                );
                accepted = outcome.output;
                violations = next;
            }
            Err(AnalyzerError::Parse { source, .. }) => {
                tracing::warn!(
                    "Discarding fix pass {} for {}: {}",
                    pass,
                    path.display(),
                    source
                );
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_lint_rules::ReactComponentLayout;
    use std::fs;
    use tempfile::TempDir;

    fn analyzer(root: &Path) -> Analyzer {
        Analyzer::builder()
            .root(root)
            .extractor(TsxExtractor::new())
            .rule(ReactComponentLayout::new())
            .build()
            .unwrap()
    }

    #[test]
    fn fix_files_rewrites_misordered_components() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Comp.tsx");
        fs::write(
            &file,
            "const Comp = () => {\n  const onSave = () => {};\n  const format = () => {};\n  const [a, setA] = useState(0);\n  return <div />;\n};\n",
        )
        .unwrap();
        fs::write(tmp.path().join("Clean.tsx"), "const Clean = () => <div />;\n").unwrap();

        let analyzer = analyzer(tmp.path());
        assert_eq!(fix_files(&analyzer).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "const Comp = () => {\n  const [a, setA] = useState(0);\n  const format = () => {};\n  const onSave = () => {};\n  return <div />;\n};\n"
        );
        assert!(analyzer.analyze().unwrap().violations.is_empty());
    }

    #[test]
    fn fix_source_leaves_unparsable_text_alone() {
        let tmp = TempDir::new().unwrap();
        let analyzer = analyzer(tmp.path());
        let broken = "const Comp = () => {\n  const onSave = () => {};\n  const format = (;\n";
        let fixed = fix_source(&analyzer, &tmp.path().join("Comp.tsx"), broken).unwrap();
        assert_eq!(fixed, broken);
    }

    #[test]
    fn load_config_defaults_and_errors() {
        assert!(load_config(&ConfigSource::Default).unwrap().rules.is_empty());

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("layout-lint.toml");
        fs::write(&path, "preset = [").unwrap();
        assert!(load_config(&ConfigSource::Project(path)).is_err());
    }
}
