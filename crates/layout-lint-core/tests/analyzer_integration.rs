//! Integration tests for file discovery and rule dispatch in the analyzer.

use layout_lint_core::{
    Analyzer, AnalyzerError, Component, Config, ExtractError, FileAnalysis, FileContext,
    LanguageExtractor, Location, Rule, Severity, Span, ViewReach, Violation,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Treats every line starting with `component ` as a component, and any line
/// containing `!!` as a syntax error.
struct LineExtractor;

impl LanguageExtractor for LineExtractor {
    fn language_id(&self) -> &'static str {
        "lines"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".tsx", ".jsx"]
    }

    fn analyze(&self, source: &str, _extension: &str) -> Result<FileAnalysis, ExtractError> {
        let mut components = Vec::new();
        let mut offset = 0;
        for (i, line) in source.lines().enumerate() {
            if line.contains("!!") {
                return Err(ExtractError::Syntax {
                    line: i + 1,
                    column: 1,
                });
            }
            if let Some(name) = line.strip_prefix("component ") {
                components.push(Component {
                    name: name.trim().to_string(),
                    span: Span::new(offset, offset + line.len(), i + 1, 1),
                    statements: Vec::new(),
                    reach: ViewReach::default(),
                });
            }
            offset += line.len() + 1;
        }
        Ok(FileAnalysis {
            components,
            ..FileAnalysis::default()
        })
    }
}

/// Reports one violation per component.
struct EveryComponent;

impl Rule for EveryComponent {
    fn name(&self) -> &'static str {
        "every-component"
    }

    fn code(&self) -> &'static str {
        "T001"
    }

    fn check(&self, ctx: &FileContext, analysis: &FileAnalysis) -> Vec<Violation> {
        analysis
            .components
            .iter()
            .map(|c| {
                Violation::new(
                    self.code(),
                    self.name(),
                    self.default_severity(),
                    Location::from_span(ctx.relative_path.clone(), &c.span),
                    format!("found {}", c.name),
                )
            })
            .collect()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn analyzer(root: &Path, config: Config) -> Analyzer {
    Analyzer::builder()
        .root(root)
        .config(config)
        .extractor(LineExtractor)
        .rule(EveryComponent)
        .build()
        .unwrap()
}

#[test]
fn discovers_supported_files_and_skips_defaults() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/App.tsx", "component App\n");
    write(dir.path(), "src/legacy/Old.jsx", "component Old\n");
    write(dir.path(), "src/util.ts", "component NotHandled\n");
    write(dir.path(), "node_modules/lib/Lib.jsx", "component Lib\n");
    write(dir.path(), "dist/App.jsx", "component Built\n");

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();

    assert_eq!(result.files_checked, 2);
    let messages: Vec<_> = result.violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(messages, vec!["found App", "found Old"]);
    assert_eq!(
        result.violations[0].location.file,
        Path::new("src").join("App.tsx")
    );
}

#[test]
fn respects_gitignore() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".gitignore", "generated/\n");
    write(dir.path(), "generated/Gen.tsx", "component Gen\n");
    write(dir.path(), "App.tsx", "component App\n");

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();
    assert_eq!(result.files_checked, 1);
}

#[test]
fn syntax_errors_skip_the_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Broken.tsx", "component Broken\n!!\n");
    write(dir.path(), "Fine.tsx", "component Fine\n");

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);

    let strict = Analyzer::builder()
        .root(dir.path())
        .extractor(LineExtractor)
        .rule(EveryComponent)
        .fail_on_parse_error(true)
        .build()
        .unwrap();
    assert!(matches!(
        strict.analyze(),
        Err(AnalyzerError::Parse { .. })
    ));
}

#[test]
fn config_overrides_severity_and_disables_rules() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.tsx", "component App\n");

    let config = Config::parse("[rules.every-component]\nseverity = \"warning\"\n").unwrap();
    let result = analyzer(dir.path(), config).analyze().unwrap();
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(!result.has_errors());

    let config = Config::parse("[rules.every-component]\nenabled = false\n").unwrap();
    let result = analyzer(dir.path(), config).analyze().unwrap();
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn single_file_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.tsx", "component App\ncomponent Other\n");

    let result = analyzer(&dir.path().join("App.tsx"), Config::default())
        .analyze()
        .unwrap();
    assert_eq!(result.violations.len(), 2);
    assert_eq!(result.violations[0].location.file, Path::new("App.tsx"));
    assert_eq!(result.violations[1].location.line, 2);
}
