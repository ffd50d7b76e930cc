//! # layout-lint-core
//!
//! Core framework for linting the internal layout of UI components.
//!
//! This crate is parser-agnostic. It provides:
//!
//! - [`LanguageExtractor`] for turning source text into a flattened
//!   [`FileAnalysis`] (implemented by `layout-lint-ts`)
//! - [`Rule`] trait for per-file rules over that model
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] and [`Fix`] for lint findings and their automatic repairs
//! - [`apply_fixes`] for rewriting sources with non-overlapping fixes
//!
//! ## Example
//!
//! ```ignore
//! use layout_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(TsxExtractor::new())
//!     .rule(ReactComponentLayout::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod extractor;
mod fixer;
mod rule;
mod types;

/// Flattened syntax model shared by extractors and rules.
pub mod model;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use extractor::{ExtractError, ExtractorBox, LanguageExtractor};
pub use fixer::{apply_fixes, FixOutcome};
pub use model::{
    Binding, BindingInit, Component, FileAnalysis, Pattern, Span, Statement, StatementShape,
    ViewReach,
};
pub use rule::{Rule, RuleBox};
pub use types::{
    Fix, Label, LintResult, Location, Severity, Suggestion, TextEdit, Violation,
    ViolationDiagnostic,
};
pub use utils::allowance::{check_allow_with_reason, AllowCheck};
