//! Rule enforcing the internal layout of React components.
//!
//! # Rationale
//!
//! Components read top to bottom in the order React evaluates them: inputs,
//! hooks, helpers, handlers, derived view values, early returns and finally
//! the JSX. Keeping that order makes components predictable to scan.
//!
//! Expected order:
//!
//! | Rank | Group | Examples |
//! |------|-------|----------|
//! | 0 | Props Destructuring | `const { a } = props` |
//! | 1 | Priority Hooks | `useLocation()`, `useTranslation()` |
//! | 2 | Context Hooks | `useAuthContext()` |
//! | 3 | State Hooks | `useState()`, `useReducer()`, `watch()` |
//! | 4 | Query Hooks | `useUsersQuery()`, `useSaveMutation()` |
//! | 5 | Custom Hooks | `useForm()` |
//! | 6 | Effect Hooks | `useEffect()`, `useMemo()`, `useCallback()` |
//! | 7 | Utility Functions | `const format = () => {}` |
//! | 8 | Event Handlers | `const handleClick = () => {}` |
//! | 9 | View Values | values referenced by the returned JSX |
//! | 10 | Early Returns | `if (!data) return null` |
//! | 11 | JSX Return | `return <div />` |
//!
//! Values only consumed by later statements, bare non-hook calls and other
//! statements are ignored. View values and early returns may be mixed.
//! State hooks, utilities and handlers must each stay in one block.
//!
//! # Configuration
//!
//! - `priority_hooks`: exact names of priority accessors
//! - `handler_prefixes`: name prefixes marking event handlers (default: `handle`, `on`)
//! - `ignore_test_files`: skip test and story files (default: false)
//!
//! # Suppression
//!
//! - `// layout-lint: allow(react-component-layout) reason="..."` on or above the statement

mod autofix;
mod category;
mod classifier;
mod validator;

pub use autofix::relocation_fix;
pub use category::Category;
pub use classifier::{Classified, Classifier, DEFAULT_HANDLER_PREFIXES, DEFAULT_PRIORITY_HOOKS};
pub use validator::{validate, LayoutDiagnostic, LayoutKind};

use std::collections::HashSet;

use layout_lint_core::utils::allowance::check_allow_with_reason;
use layout_lint_core::{
    Component, FileAnalysis, FileContext, Label, Location, Rule, RuleConfig, Severity,
    Suggestion, Violation,
};
use tracing::debug;

/// Rule code for react-component-layout.
pub const CODE: &str = "LL001";

/// Rule name for react-component-layout.
pub const NAME: &str = "react-component-layout";

/// Enforces the statement order inside React components.
#[derive(Debug, Clone)]
pub struct ReactComponentLayout {
    classifier: Classifier,
    /// Skip test and story files.
    pub ignore_test_files: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ReactComponentLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactComponentLayout {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            ignore_test_files: false,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.react-component-layout]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new().with_config(config)
    }

    /// Overlays the options present in `config` onto this rule.
    #[must_use]
    pub fn with_config(mut self, config: &RuleConfig) -> Self {
        self.ignore_test_files = config.get_bool("ignore_test_files", self.ignore_test_files);
        if let Some(hooks) = config.get_str_array("priority_hooks") {
            self.classifier = self.classifier.priority_hooks(hooks);
        }
        if let Some(prefixes) = config.get_str_array("handler_prefixes") {
            self.classifier = self.classifier.handler_prefixes(prefixes);
        }
        if let Some(severity) = config.severity {
            self.severity = severity;
        }
        self
    }

    /// Replaces the priority accessor names.
    #[must_use]
    pub fn priority_hooks(mut self, names: Vec<String>) -> Self {
        self.classifier = self.classifier.priority_hooks(names);
        self
    }

    /// Replaces the handler name prefixes.
    #[must_use]
    pub fn handler_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.classifier = self.classifier.handler_prefixes(prefixes);
        self
    }

    /// Sets whether test and story files are skipped.
    #[must_use]
    pub fn ignore_test_files(mut self, ignore: bool) -> Self {
        self.ignore_test_files = ignore;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_component(
        &self,
        ctx: &FileContext<'_>,
        component: &Component,
        warned_lines: &mut HashSet<usize>,
    ) -> Vec<Violation> {
        let classified = self.classifier.classify_all(component);
        let diagnostics = validate(&classified);
        debug!(
            "{}: {} statement(s), {} layout diagnostic(s)",
            component.name,
            classified.len(),
            diagnostics.len()
        );

        let mut violations = Vec::new();
        for diagnostic in diagnostics {
            let statement = &classified[diagnostic.index];

            let allow = check_allow_with_reason(ctx.content, statement.span.line, NAME);
            if allow.is_allowed() {
                if self.requires_allow_reason()
                    && allow.reason().is_none()
                    && warned_lines.insert(statement.span.line)
                {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            Severity::Warning,
                            Location::from_span(ctx.relative_path.clone(), &statement.span),
                            format!("Allow directive for '{NAME}' is missing required reason"),
                        )
                        .with_suggestion(Suggestion::new(
                            "Add reason=\"...\" to explain why this exception is necessary",
                        )),
                    );
                }
                continue;
            }

            let anchor = diagnostic.anchor.and_then(|i| classified.get(i));
            violations.push(self.violation(ctx, diagnostic.kind, statement, anchor));
        }
        violations
    }

    fn violation(
        &self,
        ctx: &FileContext<'_>,
        kind: LayoutKind,
        statement: &Classified,
        anchor: Option<&Classified>,
    ) -> Violation {
        let location = Location::from_span(ctx.relative_path.clone(), &statement.span);
        let current_name = &statement.display_name;
        let current_group = statement.category.group_name();

        let violation = match (kind, anchor) {
            (LayoutKind::Order, Some(anchor)) => {
                let prev_name = &anchor.display_name;
                let prev_group = anchor.category.group_name();
                let help = format!(
                    "Move \"{current_name}\" above \"{prev_name}\" to follow the component layout sequence."
                );
                let suggestion = match relocation_fix(ctx, statement.span, anchor.span, current_name)
                {
                    Some(fix) => Suggestion::with_fix(help, fix),
                    None => Suggestion::new(help),
                };

                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location,
                    format!(
                        "Sequence violation: \"{current_name}\" (group: {current_group}) is declared after \"{prev_name}\" (group: {prev_group})."
                    ),
                )
                .with_label(Label::new(
                    Location::from_span(ctx.relative_path.clone(), &anchor.span),
                    format!("\"{prev_name}\" ({prev_group}) is declared here"),
                ))
                .with_suggestion(suggestion)
            }
            (LayoutKind::Order, None) => Violation::new(
                CODE,
                NAME,
                self.severity,
                location,
                format!(
                    "Sequence violation: \"{current_name}\" (group: {current_group}) is declared out of order."
                ),
            ),
            (LayoutKind::Contiguity, _) => Violation::new(
                CODE,
                NAME,
                self.severity,
                location,
                format!(
                    "Contiguity violation: all \"{current_group}\" declarations must be grouped together."
                ),
            )
            .with_suggestion(Suggestion::new(format!(
                "Move this statement next to the other \"{current_group}\" declarations."
            ))),
        };

        violation
            .with_message_id(kind.message_id())
            .with_doc_ref("docs/rules/react-component-layout.md")
    }
}

impl Rule for ReactComponentLayout {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the order of hooks, handlers, view values and returns inside React components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, analysis: &FileAnalysis) -> Vec<Violation> {
        if self.ignore_test_files && ctx.is_test {
            return Vec::new();
        }

        let mut warned_lines = HashSet::new();
        analysis
            .components
            .iter()
            .flat_map(|component| self.check_component(ctx, component, &mut warned_lines))
            .collect()
    }
}
