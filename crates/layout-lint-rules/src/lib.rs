//! # layout-lint-rules
//!
//! Built-in lint rules for layout-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `react-component-layout` | Enforces statement order inside React components |
//!
//! ## Usage
//!
//! ```ignore
//! use layout_lint_core::Analyzer;
//! use layout_lint_rules::ReactComponentLayout;
//! use layout_lint_ts::TsxExtractor;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(TsxExtractor::new())
//!     .rule(ReactComponentLayout::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;
pub mod react_component_layout;

pub use presets::{all_rules, configured_rules, minimal_rules, recommended_rules, Preset};
pub use react_component_layout::{Category, Classifier, ReactComponentLayout};

/// Re-export core types for convenience.
pub use layout_lint_core::{Rule, Severity, Violation};
