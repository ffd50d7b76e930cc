//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::model::FileAnalysis;
use crate::types::{Severity, Violation};

/// A per-file lint rule over the flattened syntax model.
///
/// Rules receive the components an extractor found in one file and the raw
/// file context. They must be stateless across calls: everything a rule
/// computes for one component is discarded before the next one.
///
/// # Example
///
/// ```ignore
/// use layout_lint_core::{FileAnalysis, FileContext, Rule, Violation};
///
/// pub struct NoEmptyComponents;
///
/// impl Rule for NoEmptyComponents {
///     fn name(&self) -> &'static str { "no-empty-components" }
///     fn code(&self) -> &'static str { "LL900" }
///
///     fn check(&self, ctx: &FileContext, analysis: &FileAnalysis) -> Vec<Violation> {
///         analysis
///             .components
///             .iter()
///             .filter(|c| c.statements.is_empty())
///             .map(|c| /* build a Violation */)
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "react-component-layout").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `analysis` - Components extracted from the file
    fn check(&self, ctx: &FileContext, analysis: &FileAnalysis) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
